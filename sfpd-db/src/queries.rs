//! Typed query methods over the loaded source tables.
//!
//! The merged incident table is produced by [`Database::query_incidents`];
//! the remaining queries are diagnostics about what the join kept and dropped.

use crate::models::TableCount;
use crate::Database;
use sfpd_incident::{Incident, SourceTable};

impl Database {
    /// Join the five source tables into merged incidents.
    ///
    /// Inner-join semantics: an incident appears only when its ID is present
    /// in all five tables. Results follow the row order of the incidents
    /// table (then of the joined tables, for duplicate keys).
    pub fn query_incidents(&self) -> anyhow::Result<Vec<Incident>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT i.incident_id, i.police_district, i.analysis_neighborhood,
                    c.latitude, c.longitude,
                    cr.category, cr.subcategory, cr.description,
                    d.incident_date, d.year, d.day_of_week, d.incident_time, d.hour,
                    r.resolution
             FROM incidents i
             INNER JOIN coordinates c ON c.incident_id = i.incident_id
             INNER JOIN crimes cr ON cr.incident_id = i.incident_id
             INNER JOIN dates d ON d.incident_id = i.incident_id
             INNER JOIN resolutions r ON r.incident_id = i.incident_id
             ORDER BY i.rowid, c.rowid, cr.rowid, d.rowid, r.rowid",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Incident {
                    incident_id: row.get(0)?,
                    police_district: row.get(1)?,
                    analysis_neighborhood: row.get(2)?,
                    latitude: row.get(3)?,
                    longitude: row.get(4)?,
                    category: row.get(5)?,
                    subcategory: row.get(6)?,
                    description: row.get(7)?,
                    date: row.get(8)?,
                    year: row.get(9)?,
                    day_of_week: row.get(10)?,
                    time: row.get(11)?,
                    hour: row.get(12)?,
                    resolution: row.get(13)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[SFPD Debug] query: query_incidents returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Row count of every source table, in join order.
    pub fn query_table_counts(&self) -> anyhow::Result<Vec<TableCount>> {
        let conn = self.conn.borrow();
        let mut counts = Vec::with_capacity(SourceTable::ALL.len());
        for table in SourceTable::ALL {
            let rows: i64 = conn.query_row(
                &format!("SELECT COUNT(*) FROM {}", table.table_name()),
                [],
                |row| row.get(0),
            )?;
            counts.push(TableCount {
                table: table.table_name().to_string(),
                file: table.file_name().to_string(),
                rows,
            });
        }
        Ok(counts)
    }

    /// IDs from the incidents table that lack a row in at least one of the
    /// other four tables, and so are dropped by [`query_incidents`](Self::query_incidents).
    pub fn query_dropped_incident_ids(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT i.incident_id FROM incidents i
             WHERE NOT EXISTS (SELECT 1 FROM coordinates c WHERE c.incident_id = i.incident_id)
                OR NOT EXISTS (SELECT 1 FROM crimes cr WHERE cr.incident_id = i.incident_id)
                OR NOT EXISTS (SELECT 1 FROM dates d WHERE d.incident_id = i.incident_id)
                OR NOT EXISTS (SELECT 1 FROM resolutions r WHERE r.incident_id = i.incident_id)
             ORDER BY i.rowid",
        )?;
        let ids = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        if !ids.is_empty() {
            log::warn!(
                "[SFPD Debug] query: {} incidents have no match in every source table",
                ids.len()
            );
        }
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::sample_sources;
    use crate::Database;

    fn sample_db() -> Database {
        Database::from_sources(&sample_sources()).unwrap()
    }

    #[test]
    fn query_incidents_inner_joins_all_tables() {
        let incidents = sample_db().query_incidents().unwrap();
        let ids: Vec<&str> = incidents.iter().map(|i| i.incident_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"], "Incident 4 has no resolution");

        let first = &incidents[0];
        assert_eq!(first.police_district, "Mission");
        assert_eq!(first.category, "Assault");
        assert_eq!(first.subcategory, "Simple Assault");
        assert_eq!(first.description, "Battery");
        assert_eq!(first.year, 2020);
        assert_eq!(first.day_of_week, "Monday");
        assert_eq!(first.time, "14:23:00");
        assert_eq!(first.hour, 14);
        assert_eq!(first.resolution, "Arrest");
        assert_eq!(first.coordinates(), Some((37.7599, -122.4148)));
    }

    #[test]
    fn query_incidents_keeps_rows_without_coordinates() {
        let incidents = sample_db().query_incidents().unwrap();
        let third = incidents.iter().find(|i| i.incident_id == "3").unwrap();
        assert_eq!(third.latitude, None);
        assert_eq!(third.longitude, None);
    }

    #[test]
    fn query_incidents_follows_incident_file_order() {
        let db = Database::new().unwrap();
        db.load_incidents(
            "Incident ID,Police District,Analysis Neighborhood\nb,Park,Haight Ashbury\na,Bayview,Bayview Hunters Point\n",
        )
        .unwrap();
        db.load_coordinates("Incident ID,Latitude,Longitude\na,37.73,-122.39\nb,37.77,-122.45\n")
            .unwrap();
        db.load_crimes("Incident ID,Incident Category,Incident Description\na,Arson,Arson\nb,Fraud,Fraud\n")
            .unwrap();
        db.load_dates(
            "Incident ID,Incident Year,Incident Day of Week,Incident Time\na,2021,Sunday,00:30\nb,2021,Sunday,23:30\n",
        )
        .unwrap();
        db.load_resolutions("Incident ID,Resolution\na,Arrest\nb,Open or Active\n")
            .unwrap();

        let ids: Vec<String> = db
            .query_incidents()
            .unwrap()
            .into_iter()
            .map(|i| i.incident_id)
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn query_incidents_joins_float_formatted_ids() {
        let mut sources = sample_sources();
        sources.coordinates = sources.coordinates.replace("\n1,37.7599", "\n1.0,37.7599");
        let db = Database::from_sources(&sources).unwrap();

        let ids: Vec<String> = db
            .query_incidents()
            .unwrap()
            .into_iter()
            .map(|i| i.incident_id)
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn query_incidents_is_repeatable() {
        let first = sample_db().query_incidents().unwrap();
        let second = sample_db().query_incidents().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn query_dropped_incident_ids_reports_unmatched() {
        let dropped = sample_db().query_dropped_incident_ids().unwrap();
        assert_eq!(dropped, vec!["4"]);
    }

    #[test]
    fn query_table_counts_covers_every_table() {
        let counts = sample_db().query_table_counts().unwrap();
        let files: Vec<&str> = counts.iter().map(|c| c.file.as_str()).collect();
        assert_eq!(
            files,
            vec![
                "SF_Incidents.csv",
                "SF_Coordinates.csv",
                "SF_Crimes.csv",
                "SF_Dates.csv",
                "SF_Resolution.csv"
            ]
        );
        assert_eq!(counts[4].rows, 3);
    }
}
