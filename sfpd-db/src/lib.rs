//! In-memory SQLite database layer for San Francisco police incident data.
//!
//! The five source tables are loaded into their own SQLite tables and merged
//! with a single five-way `INNER JOIN` on `incident_id`. Incidents missing
//! from any table drop out of the merged result.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - CSV payloads come from [`SourceFiles`], either embedded at compile time
//!   or read from a data directory
//! - Rows are typed by `sfpd-incident` before insertion, so a malformed file
//!   fails at load time rather than at query time
//!
//! # Usage
//!
//! ```rust
//! use sfpd_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_incidents("Incident ID,Police District,Analysis Neighborhood\n1,Mission,Mission\n").unwrap();
//! db.load_coordinates("Incident ID,Latitude,Longitude\n1,37.76,-122.42\n").unwrap();
//! db.load_crimes("Incident ID,Incident Category,Incident Description\n1,Assault,Battery\n").unwrap();
//! db.load_dates("Incident ID,Incident Year,Incident Day of Week,Incident Time\n1,2020,Monday,14:23\n").unwrap();
//! db.load_resolutions("Incident ID,Resolution\n1,Arrest\n").unwrap();
//!
//! let incidents = db.query_incidents().unwrap();
//! assert_eq!(incidents.len(), 1);
//! assert_eq!(incidents[0].hour, 14);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.

pub mod schema;
mod loader;
mod queries;
pub mod models;
pub mod sources;

pub use sources::SourceFiles;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the five incident source tables.
///
/// This struct is cheaply cloneable (via `Rc`); clones share one connection.
///
/// # Example
///
/// ```rust
/// use sfpd_db::Database;
///
/// let db = Database::new().unwrap();
/// db.load_resolutions("Incident ID,Resolution\n1,Arrest\n").unwrap();
/// let counts = db.query_table_counts().unwrap();
/// assert_eq!(counts.len(), 5);
/// ```
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it with CSV data.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }

    /// Create a database and load all five tables from `sources`.
    pub fn from_sources(sources: &SourceFiles) -> anyhow::Result<Self> {
        let db = Self::new()?;
        db.load_sources(sources)?;
        Ok(db)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_resolutions("Incident ID,Resolution\n1,Arrest\n").unwrap();
        let counts = db2.query_table_counts().unwrap();
        let resolutions = counts.iter().find(|c| c.table == "resolutions").unwrap();
        assert_eq!(resolutions.rows, 1, "Clone should see same data via shared Rc");
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert!(db.query_incidents().unwrap().is_empty());
    }

    #[test]
    fn database_from_sources_loads_all_tables() {
        let db = Database::from_sources(&test_support::sample_sources()).unwrap();
        let counts = db.query_table_counts().unwrap();
        let rows: Vec<i64> = counts.iter().map(|c| c.rows).collect();
        assert_eq!(rows, vec![4, 4, 4, 4, 3]);
    }
}
