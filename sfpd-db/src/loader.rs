//! CSV data loading functions for populating the in-memory SQLite database.
//!
//! Each loader parses one source table with `sfpd-incident` (which checks the
//! header and types every cell) and inserts the rows inside a transaction.
//! A malformed file therefore leaves its table untouched.
//!
//! # CSV Formats
//!
//! All files have headers; columns are matched by name.
//!
//! - **Incidents**: `Incident ID,Police District,Analysis Neighborhood`
//! - **Coordinates**: `Incident ID,Latitude,Longitude`
//! - **Crimes**: `Incident ID,Incident Category,[Incident Subcategory,]Incident Description`
//! - **Dates**: `Incident ID,[Incident Date,]Incident Year,Incident Day of Week,Incident Time`
//! - **Resolution**: `Incident ID,Resolution`

use crate::{Database, SourceFiles};
use anyhow::Context;
use rusqlite::params;
use sfpd_incident::source::{CoordinateRow, CrimeRow, DateRow, IncidentRow, ResolutionRow};
use sfpd_incident::SourceTable;

impl Database {
    /// Load all five tables. Stops at the first failing table.
    pub fn load_sources(&self, sources: &SourceFiles) -> anyhow::Result<()> {
        for table in SourceTable::ALL {
            self.load_source(table, sources.get(table))
                .with_context(|| format!("failed to load {}", table.file_name()))?;
        }
        Ok(())
    }

    /// Load one source table from CSV text, returning the number of rows inserted.
    pub fn load_source(&self, table: SourceTable, csv_data: &str) -> anyhow::Result<usize> {
        match table {
            SourceTable::Incidents => self.load_incidents(csv_data),
            SourceTable::Coordinates => self.load_coordinates(csv_data),
            SourceTable::Crimes => self.load_crimes(csv_data),
            SourceTable::Dates => self.load_dates(csv_data),
            SourceTable::Resolution => self.load_resolutions(csv_data),
        }
    }

    /// Load incident identity and location rows.
    ///
    /// # Example CSV
    /// ```text
    /// Incident ID,Police District,Analysis Neighborhood
    /// 953941,Mission,Mission
    /// ```
    pub fn load_incidents(&self, csv_data: &str) -> anyhow::Result<usize> {
        let rows = IncidentRow::parse_csv(csv_data)?;
        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO incidents (incident_id, police_district, analysis_neighborhood)
                 VALUES (?1, ?2, ?3)",
            )?;
            for r in &rows {
                stmt.execute(params![r.incident_id, r.police_district, r.analysis_neighborhood])?;
            }
        }
        tx.commit()?;
        log::info!("[SFPD Debug] loader: Loaded {} incidents", rows.len());
        Ok(rows.len())
    }

    /// Load latitude/longitude rows. Empty cells are stored as NULL.
    ///
    /// # Example CSV
    /// ```text
    /// Incident ID,Latitude,Longitude
    /// 953941,37.7599,-122.4148
    /// 953942,,
    /// ```
    pub fn load_coordinates(&self, csv_data: &str) -> anyhow::Result<usize> {
        let rows = CoordinateRow::parse_csv(csv_data)?;
        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO coordinates (incident_id, latitude, longitude)
                 VALUES (?1, ?2, ?3)",
            )?;
            for r in &rows {
                stmt.execute(params![r.incident_id, r.latitude, r.longitude])?;
            }
        }
        tx.commit()?;
        let missing = rows
            .iter()
            .filter(|r| r.latitude.is_none() || r.longitude.is_none())
            .count();
        log::info!(
            "[SFPD Debug] loader: Loaded {} coordinates, {} without a location",
            rows.len(),
            missing
        );
        Ok(rows.len())
    }

    /// Load crime category rows.
    ///
    /// # Example CSV
    /// ```text
    /// Incident ID,Incident Category,Incident Subcategory,Incident Description
    /// 953941,Assault,Simple Assault,Battery
    /// ```
    pub fn load_crimes(&self, csv_data: &str) -> anyhow::Result<usize> {
        let rows = CrimeRow::parse_csv(csv_data)?;
        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO crimes (incident_id, category, subcategory, description)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for r in &rows {
                stmt.execute(params![r.incident_id, r.category, r.subcategory, r.description])?;
            }
        }
        tx.commit()?;
        log::info!("[SFPD Debug] loader: Loaded {} crimes", rows.len());
        Ok(rows.len())
    }

    /// Load date/time rows. The hour of day is derived from `Incident Time`
    /// during parsing and stored alongside it.
    ///
    /// # Example CSV
    /// ```text
    /// Incident ID,Incident Date,Incident Time,Incident Year,Incident Day of Week
    /// 953941,2020-03-02,14:23,2020,Monday
    /// ```
    pub fn load_dates(&self, csv_data: &str) -> anyhow::Result<usize> {
        let rows = DateRow::parse_csv(csv_data)?;
        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO dates (incident_id, incident_date, year, day_of_week, incident_time, hour)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for r in &rows {
                stmt.execute(params![
                    r.incident_id,
                    r.date,
                    r.year,
                    r.day_of_week,
                    r.time,
                    r.hour
                ])?;
            }
        }
        tx.commit()?;
        log::info!("[SFPD Debug] loader: Loaded {} dates", rows.len());
        Ok(rows.len())
    }

    /// Load resolution rows.
    ///
    /// # Example CSV
    /// ```text
    /// Incident ID,Resolution
    /// 953941,Open or Active
    /// ```
    pub fn load_resolutions(&self, csv_data: &str) -> anyhow::Result<usize> {
        let rows = ResolutionRow::parse_csv(csv_data)?;
        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO resolutions (incident_id, resolution) VALUES (?1, ?2)",
            )?;
            for r in &rows {
                stmt.execute(params![r.incident_id, r.resolution])?;
            }
        }
        tx.commit()?;
        log::info!("[SFPD Debug] loader: Loaded {} resolutions", rows.len());
        Ok(rows.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::sample_sources;
    use crate::Database;
    use sfpd_incident::SourceTable;

    fn count(db: &Database, table: &str) -> i64 {
        let conn = db.conn.borrow();
        conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn load_incidents_from_csv() {
        let db = Database::new().unwrap();
        let n = db
            .load_incidents(sample_sources().get(SourceTable::Incidents))
            .unwrap();
        assert_eq!(n, 4);
        assert_eq!(count(&db, "incidents"), 4);

        let conn = db.conn.borrow();
        let neighborhood: String = conn
            .query_row(
                "SELECT analysis_neighborhood FROM incidents WHERE incident_id = '2'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(neighborhood, "Bernal Heights");
    }

    #[test]
    fn load_coordinates_stores_null_for_empty_cells() {
        let db = Database::new().unwrap();
        db.load_coordinates(sample_sources().get(SourceTable::Coordinates))
            .unwrap();

        let conn = db.conn.borrow();
        let latitude: Option<f64> = conn
            .query_row(
                "SELECT latitude FROM coordinates WHERE incident_id = '3'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!(latitude.is_none(), "Empty latitude should be NULL");
    }

    #[test]
    fn load_dates_stores_derived_hour() {
        let db = Database::new().unwrap();
        db.load_dates(sample_sources().get(SourceTable::Dates)).unwrap();

        let conn = db.conn.borrow();
        let (year, hour): (i32, u32) = conn
            .query_row(
                "SELECT year, hour FROM dates WHERE incident_id = '2'",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!(year, 2020);
        assert_eq!(hour, 22);
    }

    #[test]
    fn load_keeps_duplicate_keys() {
        let db = Database::new().unwrap();
        db.load_resolutions("Incident ID,Resolution\n1,Arrest\n1,Unfounded\n")
            .unwrap();
        assert_eq!(count(&db, "resolutions"), 2);
    }

    #[test]
    fn load_missing_column_is_fatal() {
        let db = Database::new().unwrap();
        let err = db
            .load_crimes("Incident ID,Incident Category\n1,Assault\n")
            .unwrap_err();
        assert!(err.to_string().contains("Incident Description"));
        assert_eq!(count(&db, "crimes"), 0);
    }

    #[test]
    fn load_malformed_row_leaves_table_empty() {
        let db = Database::new().unwrap();
        let csv = "\
Incident ID,Incident Year,Incident Day of Week,Incident Time
1,2020,Monday,10:00
2,2020,Monday,soon
";
        assert!(db.load_dates(csv).is_err());
        assert_eq!(count(&db, "dates"), 0);
    }

    #[test]
    fn load_sources_names_failing_file() {
        let db = Database::new().unwrap();
        let mut sources = sample_sources();
        sources.resolutions = String::new();
        let err = db.load_sources(&sources).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("failed to load SF_Resolution.csv"), "{message}");
        assert!(message.contains("Incident ID"), "{message}");
    }
}
