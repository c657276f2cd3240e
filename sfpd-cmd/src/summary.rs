//! `summary`: the six dashboard aggregations as text or JSON.

use log::{info, warn};
use sfpd_data::view::BarChart;
use sfpd_data::{DashboardView, IncidentTable};
use sfpd_incident::{Filter, FilterOptions};
use std::fmt::Write;

pub fn run_summary(
    data_dir: &str,
    year: Option<i32>,
    resolution: Option<String>,
    district: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let table = crate::load_table(data_dir)?;
    let filter = resolve_filter(table.filter_options(), year, resolution, district);
    info!(
        "Summarizing {} / {} / {}",
        filter.year, filter.resolution, filter.district
    );

    let view = table.view(&filter);
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", format_summary(&table, &filter, &view));
    }
    Ok(())
}

/// Fill unset selections with the first value of each field.
///
/// A value that does not occur in the data is kept (it selects nothing) but
/// logged as a warning. With no incidents at all there are no first values;
/// unset fields stay empty and the selection matches nothing.
pub fn resolve_filter(
    options: &FilterOptions,
    year: Option<i32>,
    resolution: Option<String>,
    district: Option<String>,
) -> Filter {
    let Some(default) = options.default_filter() else {
        warn!("No incidents remain after joining the source tables");
        return Filter {
            year: year.unwrap_or_default(),
            resolution: resolution.unwrap_or_default(),
            district: district.unwrap_or_default(),
        };
    };

    let filter = Filter {
        year: year.unwrap_or(default.year),
        resolution: resolution.unwrap_or(default.resolution),
        district: district.unwrap_or(default.district),
    };

    if !options.years.contains(&filter.year) {
        warn!("Year {} does not occur in the data", filter.year);
    }
    if !options.resolutions.contains(&filter.resolution) {
        warn!("Resolution '{}' does not occur in the data", filter.resolution);
    }
    if !options.districts.contains(&filter.district) {
        warn!("Police district '{}' does not occur in the data", filter.district);
    }
    filter
}

fn write_bars(out: &mut String, chart: &BarChart) {
    let _ = writeln!(out, "\n{}", chart.title);
    for bar in &chart.bars {
        let _ = writeln!(out, "  {:<32} {:>6}", bar.label, bar.count);
    }
}

/// Render a view as plain text, one section per chart.
pub fn format_summary(table: &IncidentTable, filter: &Filter, view: &DashboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Year {} | Resolution {} | District {}",
        filter.year, filter.resolution, filter.district
    );
    let _ = writeln!(out, "{} of {} incidents match", view.total, table.len());

    if view.is_empty() {
        let _ = writeln!(out, "No incidents match the selected filters.");
        return out;
    }

    write_bars(&mut out, &view.day_of_week);
    write_bars(&mut out, &view.hour_of_day);

    let _ = writeln!(out, "\n{}", view.category.title);
    for slice in &view.category.slices {
        let _ = writeln!(
            out,
            "  {:<32} {:>6} {:>6.1}%",
            slice.label,
            slice.count,
            slice.share * 100.0
        );
    }

    write_bars(&mut out, &view.district);
    write_bars(&mut out, &view.neighborhood);

    let _ = writeln!(
        out,
        "\n{}\n  {} plotted, {} without coordinates",
        view.map.title,
        view.map.points.len(),
        view.map.unplotted
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::data_dir;

    fn table() -> IncidentTable {
        let dir = data_dir();
        crate::load_table(dir.path().to_str().unwrap()).unwrap()
    }

    #[test]
    fn test_resolve_fills_defaults_from_first_values() {
        let table = table();
        let filter = resolve_filter(table.filter_options(), None, None, None);
        assert_eq!(filter, Filter::new(2020, "Open or Active", "Mission"));

        let filter =
            resolve_filter(table.filter_options(), Some(2019), None, Some("Central".into()));
        assert_eq!(filter, Filter::new(2019, "Open or Active", "Central"));
    }

    #[test]
    fn test_resolve_keeps_unknown_values() {
        let table = table();
        let filter = resolve_filter(table.filter_options(), Some(1999), None, None);
        assert_eq!(filter.year, 1999);
        assert!(table.filter(&filter).is_empty());
    }

    #[test]
    fn test_empty_join_summarizes_nothing() {
        let dir = data_dir();
        std::fs::write(
            dir.path().join("SF_Resolution.csv"),
            "Incident ID,Resolution\n99,Arrest\n",
        )
        .unwrap();
        let table = crate::load_table(dir.path().to_str().unwrap()).unwrap();
        assert!(table.is_empty());

        let filter = resolve_filter(table.filter_options(), None, None, None);
        assert_eq!(filter, Filter::new(0, "", ""));
        let text = format_summary(&table, &filter, &table.view(&filter));
        assert!(text.contains("0 of 0 incidents match"));
        assert!(text.contains("No incidents match the selected filters."));

        run_summary(dir.path().to_str().unwrap(), None, None, None, false).unwrap();
    }

    #[test]
    fn test_format_summary_lists_every_chart() {
        let table = table();
        let filter = Filter::new(2020, "Open or Active", "Mission");
        let text = format_summary(&table, &filter, &table.view(&filter));

        assert!(text.contains("2 of 3 incidents match"));
        for title in [
            "Incidents by Day of Week",
            "Incidents by Hour of Day",
            "Incidents by Category",
            "Incidents by Police District",
            "Incidents by Neighborhood",
            "San Francisco Incident Map",
        ] {
            assert!(text.contains(title), "missing section {title}");
        }
        assert!(text.contains("1 plotted, 1 without coordinates"));
        assert!(text.contains("50.0%"));
    }

    #[test]
    fn test_format_summary_of_empty_selection() {
        let table = table();
        let filter = Filter::new(2019, "Open or Active", "Mission");
        let text = format_summary(&table, &filter, &table.view(&filter));
        assert!(text.contains("0 of 3 incidents match"));
        assert!(text.contains("No incidents match the selected filters."));
        assert!(!text.contains("Incidents by Day of Week"));
    }
}
