//! `export`: write the merged incident table as one CSV.

use anyhow::Context;
use log::info;
use sfpd_incident::Incident;
use std::io::Write;

pub fn run_export(data_dir: &str, output: &str) -> anyhow::Result<()> {
    let table = crate::load_table(data_dir)?;
    let file = std::fs::File::create(output)
        .with_context(|| format!("failed to create {}", output))?;
    write_incidents(table.incidents(), file)
        .with_context(|| format!("failed to write {}", output))?;
    info!("Exported {} incidents to {}", table.len(), output);
    Ok(())
}

/// Serialize incidents with a header row of the source column names.
pub fn write_incidents<W: Write>(incidents: &[Incident], writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for incident in incidents {
        wtr.serialize(incident)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::data_dir;

    #[test]
    fn test_export_writes_merged_rows() {
        let dir = data_dir();
        let output = dir.path().join("merged.csv");
        run_export(dir.path().to_str().unwrap(), output.to_str().unwrap()).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("Incident ID,Police District,Analysis Neighborhood"));
        assert!(header.ends_with("Incident Hour,Resolution"));

        let ids: Vec<&str> = lines.map(|l| l.split(',').next().unwrap()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_exported_rows_read_back() {
        let dir = data_dir();
        let table = crate::load_table(dir.path().to_str().unwrap()).unwrap();
        let mut buf = Vec::new();
        write_incidents(table.incidents(), &mut buf).unwrap();

        let mut rdr = csv::Reader::from_reader(buf.as_slice());
        let rows: Vec<Incident> = rdr.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows, table.incidents());
        assert_eq!(rows[1].latitude, None);
    }
}
