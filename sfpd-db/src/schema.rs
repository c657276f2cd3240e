//! SQL schema definitions for the in-memory SQLite database.
//!
//! One table per source file. The schema is applied as a single batch when
//! the database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// This creates the following tables, each keyed (but not uniquely) by
/// `incident_id`:
///
/// - `incidents` - identity and location (police district, neighborhood)
/// - `coordinates` - latitude/longitude, NULL when the source cell was empty
/// - `crimes` - category, subcategory and free-text description
/// - `dates` - date, year, day of week, time of day and the derived hour
/// - `resolutions` - resolution outcome
///
/// `incident_id` is not a primary key; duplicate keys multiply in the merge
/// like any relational inner join. `rowid` preserves file order.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS incidents (
        incident_id TEXT NOT NULL,
        police_district TEXT NOT NULL,
        analysis_neighborhood TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_incidents_id ON incidents(incident_id);

    CREATE TABLE IF NOT EXISTS coordinates (
        incident_id TEXT NOT NULL,
        latitude REAL,
        longitude REAL
    );
    CREATE INDEX IF NOT EXISTS idx_coordinates_id ON coordinates(incident_id);

    CREATE TABLE IF NOT EXISTS crimes (
        incident_id TEXT NOT NULL,
        category TEXT NOT NULL,
        subcategory TEXT NOT NULL,
        description TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_crimes_id ON crimes(incident_id);

    CREATE TABLE IF NOT EXISTS dates (
        incident_id TEXT NOT NULL,
        incident_date TEXT NOT NULL,
        year INTEGER NOT NULL,
        day_of_week TEXT NOT NULL,
        incident_time TEXT NOT NULL,
        hour INTEGER NOT NULL CHECK (hour BETWEEN 0 AND 23)
    );
    CREATE INDEX IF NOT EXISTS idx_dates_id ON dates(incident_id);

    CREATE TABLE IF NOT EXISTS resolutions (
        incident_id TEXT NOT NULL,
        resolution TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_resolutions_id ON resolutions(incident_id);
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;
    use sfpd_incident::SourceTable;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_a_table_per_source() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        for table in SourceTable::ALL {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                    [table.table_name()],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Table '{}' should exist", table.table_name());
        }
    }

    #[test]
    fn schema_indexes_join_key() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='index' AND name LIKE 'idx_%_id'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 5);
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
