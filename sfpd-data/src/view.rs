//! The six dashboard charts for one filtered subset.
//!
//! | Chart | Kind | Grouped by | Order |
//! |---|---|---|---|
//! | Incidents by Day of Week | bar | day of week | count descending |
//! | Incidents by Hour of Day | bar | hour (0-23) | count ascending |
//! | Incidents by Category | pie | category | count descending |
//! | Incidents by Police District | bar | police district | count descending |
//! | Incidents by Neighborhood | bar | analysis neighborhood | count descending |
//! | San Francisco Incident Map | map | raw rows | table order |

use crate::counts::{frequency_counts, CategoryCount, CountOrder};
use serde::Serialize;
use sfpd_incident::Incident;

pub const INCIDENT_COUNT: &str = "Incident Count";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// Bars in display order.
    pub bars: Vec<CategoryCount>,
}

impl BarChart {
    fn new(title: &'static str, x_label: &'static str, bars: Vec<CategoryCount>) -> Self {
        Self {
            title,
            x_label,
            y_label: INCIDENT_COUNT,
            bars,
        }
    }

    pub fn total(&self) -> usize {
        self.bars.iter().map(|b| b.count).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    /// Fraction of the filtered rows, 0.0..=1.0.
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: &'static str,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    fn from_counts(title: &'static str, counts: Vec<CategoryCount>) -> Self {
        let total: usize = counts.iter().map(|c| c.count).sum();
        let slices = counts
            .into_iter()
            .map(|c| PieSlice {
                share: c.count as f64 / total as f64,
                label: c.label,
                count: c.count,
            })
            .collect();
        Self { title, slices }
    }

    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }
}

/// One plotted incident, labelled with its description on hover.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapChart {
    pub title: &'static str,
    pub points: Vec<MapPoint>,
    /// Filtered rows left off the map for lack of coordinates.
    pub unplotted: usize,
}

/// Everything the dashboard renders for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// Number of filtered rows.
    pub total: usize,
    pub day_of_week: BarChart,
    pub hour_of_day: BarChart,
    pub category: PieChart,
    pub district: BarChart,
    pub neighborhood: BarChart,
    pub map: MapChart,
}

impl DashboardView {
    /// Aggregate an already-filtered subset. An empty subset yields empty charts.
    pub fn build(rows: &[&Incident]) -> Self {
        let points: Vec<MapPoint> = rows
            .iter()
            .filter_map(|i| {
                let (latitude, longitude) = i.coordinates()?;
                Some(MapPoint {
                    latitude,
                    longitude,
                    description: i.description.clone(),
                })
            })
            .collect();

        Self {
            total: rows.len(),
            day_of_week: BarChart::new(
                "Incidents by Day of Week",
                "Day of Week",
                frequency_counts(rows, |i| i.day_of_week.clone(), CountOrder::Descending),
            ),
            hour_of_day: BarChart::new(
                "Incidents by Hour of Day",
                "Hour",
                frequency_counts(rows, |i| i.hour, CountOrder::Ascending),
            ),
            category: PieChart::from_counts(
                "Incidents by Category",
                frequency_counts(rows, |i| i.category.clone(), CountOrder::Descending),
            ),
            district: BarChart::new(
                "Incidents by Police District",
                "District",
                frequency_counts(rows, |i| i.police_district.clone(), CountOrder::Descending),
            ),
            neighborhood: BarChart::new(
                "Incidents by Neighborhood",
                "Neighborhood",
                frequency_counts(
                    rows,
                    |i| i.analysis_neighborhood.clone(),
                    CountOrder::Descending,
                ),
            ),
            map: MapChart {
                title: "San Francisco Incident Map",
                unplotted: rows.len() - points.len(),
                points,
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
