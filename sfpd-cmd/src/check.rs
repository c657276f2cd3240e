//! `check`: load everything and report what the join kept.

use sfpd_data::IncidentTable;
use std::fmt::Write;

pub fn run_check(data_dir: &str) -> anyhow::Result<()> {
    let table = crate::load_table(data_dir)?;
    print!("{}", format_report(&table));
    Ok(())
}

pub fn format_report(table: &IncidentTable) -> String {
    let report = table.report();
    let mut out = String::new();
    for count in &report.table_counts {
        let _ = writeln!(out, "{:<22} {:>8} rows", count.file, count.rows);
    }
    let _ = writeln!(out, "{:<22} {:>8} rows", "merged", table.len());

    if report.dropped_incident_ids.is_empty() {
        let _ = writeln!(out, "Every incident appears in all five tables.");
    } else {
        let _ = writeln!(
            out,
            "{} incidents dropped by the join: {}",
            report.dropped_incident_ids.len(),
            report.dropped_incident_ids.join(", ")
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::data_dir;

    #[test]
    fn test_report_counts_and_dropped_ids() {
        let dir = data_dir();
        let table = crate::load_table(dir.path().to_str().unwrap()).unwrap();
        let text = format_report(&table);

        assert!(text.contains("SF_Incidents.csv"));
        assert!(text.contains("SF_Resolution.csv"));
        assert!(text.lines().any(|l| l.starts_with("merged") && l.contains(" 3 rows")));
        assert!(text.contains("1 incidents dropped by the join: 5"));
    }

    #[test]
    fn test_report_when_nothing_dropped() {
        let table = IncidentTable::from_incidents(Vec::new());
        let text = format_report(&table);
        assert!(text.contains("Every incident appears in all five tables."));
    }

    #[test]
    fn test_check_fails_on_missing_column() {
        let dir = data_dir();
        std::fs::write(
            dir.path().join("SF_Resolution.csv"),
            "Incident ID,Outcome\n1,Arrest\n",
        )
        .unwrap();
        let err = run_check(dir.path().to_str().unwrap()).unwrap_err();
        assert!(format!("{err:#}").contains("Resolution"));
    }

    #[test]
    fn test_bundled_fixtures_load() {
        let fixtures = concat!(env!("CARGO_MANIFEST_DIR"), "/../fixtures");
        let table = crate::load_table(fixtures).unwrap();
        assert_eq!(table.len(), 37);
        assert_eq!(
            table.report().dropped_incident_ids,
            vec!["618185", "618629", "619110"]
        );
    }
}
