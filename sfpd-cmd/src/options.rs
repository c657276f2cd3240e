//! `options`: the values each sidebar dropdown offers.

use sfpd_incident::FilterOptions;
use std::fmt::Write;

pub fn run_options(data_dir: &str) -> anyhow::Result<()> {
    let table = crate::load_table(data_dir)?;
    print!("{}", format_options(table.filter_options()));
    Ok(())
}

/// One line per field, values in data order. The first value is the default.
pub fn format_options(options: &FilterOptions) -> String {
    let years: Vec<String> = options.years.iter().map(i32::to_string).collect();
    let mut out = String::new();
    let _ = writeln!(out, "Year:       {}", years.join(", "));
    let _ = writeln!(out, "Resolution: {}", options.resolutions.join(", "));
    let _ = writeln!(out, "District:   {}", options.districts.join(", "));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::data_dir;

    #[test]
    fn test_format_options_in_data_order() {
        let dir = data_dir();
        let table = crate::load_table(dir.path().to_str().unwrap()).unwrap();
        let text = format_options(table.filter_options());

        assert_eq!(
            text,
            "Year:       2020, 2019\n\
             Resolution: Open or Active, Cite or Arrest Adult\n\
             District:   Mission, Central\n"
        );
    }

    #[test]
    fn test_missing_data_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = run_options(missing.to_str().unwrap()).unwrap_err();
        assert!(format!("{err:#}").contains("SF_Incidents.csv"));
    }
}
