//! Query result model structs.

use serde::Serialize;

/// Number of rows loaded into one source table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TableCount {
    /// SQL table name (e.g. `"crimes"`).
    pub table: String,
    /// Source file the rows came from (e.g. `"SF_Crimes.csv"`).
    pub file: String,
    pub rows: i64,
}
