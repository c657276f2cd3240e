//! Errors raised while reading the source tables.

use thiserror::Error;

/// A fatal problem with one of the five source files.
///
/// Every variant names the file it came from; row-level variants also carry
/// the line number reported by the CSV reader.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{file}: missing required column '{column}'")]
    MissingColumn {
        file: &'static str,
        column: &'static str,
    },

    #[error("{file} line {line}: empty Incident ID")]
    EmptyIncidentId { file: &'static str, line: u64 },

    #[error("{file} line {line}: invalid Incident Year '{value}'")]
    InvalidYear {
        file: &'static str,
        line: u64,
        value: String,
    },

    #[error("{file} line {line}: invalid Incident Time '{value}'")]
    InvalidTime {
        file: &'static str,
        line: u64,
        value: String,
    },

    #[error("{file} line {line}: invalid {column} '{value}'")]
    InvalidCoordinate {
        file: &'static str,
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("{file}: {source}")]
    Csv {
        file: &'static str,
        #[source]
        source: csv::Error,
    },
}
