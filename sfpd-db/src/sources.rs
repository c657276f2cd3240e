//! The five CSV payloads the database is built from.

use anyhow::Context;
use sfpd_incident::SourceTable;
use std::path::Path;

/// Raw CSV text for each source table.
///
/// The dashboard embeds these at compile time; the CLI reads them from a
/// data directory with [`SourceFiles::read_dir`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceFiles {
    pub incidents: String,
    pub coordinates: String,
    pub crimes: String,
    pub dates: String,
    pub resolutions: String,
}

impl SourceFiles {
    /// Read all five default file names (`SF_Incidents.csv`, ...) from `dir`.
    ///
    /// A missing or unreadable file is an error naming its path.
    pub fn read_dir(dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let dir = dir.as_ref();
        let read = |table: SourceTable| -> anyhow::Result<String> {
            let path = dir.join(table.file_name());
            std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))
        };

        let sources = Self {
            incidents: read(SourceTable::Incidents)?,
            coordinates: read(SourceTable::Coordinates)?,
            crimes: read(SourceTable::Crimes)?,
            dates: read(SourceTable::Dates)?,
            resolutions: read(SourceTable::Resolution)?,
        };
        log::info!("[SFPD Debug] sources: Read 5 source files from {}", dir.display());
        Ok(sources)
    }

    /// CSV text for one table.
    pub fn get(&self, table: SourceTable) -> &str {
        match table {
            SourceTable::Incidents => &self.incidents,
            SourceTable::Coordinates => &self.coordinates,
            SourceTable::Crimes => &self.crimes,
            SourceTable::Dates => &self.dates,
            SourceTable::Resolution => &self.resolutions,
        }
    }
}
