//! Police Incident Dashboard in San Francisco
//!
//! Sidebar of three dropdowns (year, resolution, police district) and a
//! two-column grid of six charts over the filtered incidents.
//!
//! Data flow:
//! 1. `build.rs` copies the five source CSVs from `fixtures/` into `OUT_DIR`.
//! 2. `include_str!` embeds them into the WASM binary.
//! 3. On mount: load and join them once into an immutable `IncidentTable`
//!    and select the first value of each field. Any load error is fatal.
//! 4. On selection change: filter, aggregate six ways and re-render every chart.

use dioxus::prelude::*;
use serde_json::json;
use sfpd_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, FilterSidebar, LoadingSpinner,
};
use sfpd_chart_ui::js_bridge;
use sfpd_chart_ui::state::AppState;
use sfpd_data::view::BarChart;
use sfpd_data::{DashboardView, IncidentTable};
use sfpd_db::SourceFiles;

const INCIDENTS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/SF_Incidents.csv"));
const COORDINATES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/SF_Coordinates.csv"));
const CRIMES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/SF_Crimes.csv"));
const DATES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/SF_Dates.csv"));
const RESOLUTION_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/SF_Resolution.csv"));

/// DOM ids for the chart container divs.
const DAY_OF_WEEK_ID: &str = "day-of-week-chart";
const HOUR_OF_DAY_ID: &str = "hour-of-day-chart";
const CATEGORY_ID: &str = "category-chart";
const DISTRICT_ID: &str = "district-chart";
const NEIGHBORHOOD_ID: &str = "neighborhood-chart";
const MAP_ID: &str = "incident-map";

const BAR_COLOR: &str = "#636EFA";
const FIXTURE_HINT: &str =
    "Check the five SF_*.csv files in fixtures/ and rebuild the dashboard.";
const SF_CENTER: [f64; 2] = [37.7749, -122.4194];

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("incident-dashboard-root"))
        .launch(App);
}

fn embedded_sources() -> SourceFiles {
    SourceFiles {
        incidents: INCIDENTS_CSV.to_string(),
        coordinates: COORDINATES_CSV.to_string(),
        crimes: CRIMES_CSV.to_string(),
        dates: DATES_CSV.to_string(),
        resolutions: RESOLUTION_CSV.to_string(),
    }
}

fn render_bar(container_id: &str, chart: &BarChart, rotate_labels: bool) {
    let data_json = serde_json::to_string(&chart.bars).unwrap_or_default();
    let config_json = json!({
        "xLabel": chart.x_label,
        "yLabel": chart.y_label,
        "color": BAR_COLOR,
        "rotateLabels": rotate_labels,
    })
    .to_string();
    js_bridge::render_bar_chart(container_id, &data_json, &config_json);
}

/// Push every chart of `view` to its container.
fn render_view(view: &DashboardView) {
    render_bar(DAY_OF_WEEK_ID, &view.day_of_week, false);
    render_bar(HOUR_OF_DAY_ID, &view.hour_of_day, false);
    render_bar(DISTRICT_ID, &view.district, false);
    render_bar(NEIGHBORHOOD_ID, &view.neighborhood, true);

    let slices_json = serde_json::to_string(&view.category.slices).unwrap_or_default();
    js_bridge::render_pie_chart(CATEGORY_ID, &slices_json, "{}");

    let points_json = serde_json::to_string(&view.map.points).unwrap_or_default();
    let map_config = json!({
        "center": SF_CENTER,
        "zoom": 12,
        "color": BAR_COLOR,
    })
    .to_string();
    js_bridge::render_incident_map(MAP_ID, &points_json, &map_config);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Load and join the source tables once on mount ───
    use_effect(move || {
        match IncidentTable::load(&embedded_sources()) {
            Ok(table) => {
                if table.is_empty() {
                    log::warn!("No incidents remain after joining the source tables");
                }
                state.install(table);
                js_bridge::init_charts();
            }
            Err(e) => {
                log::error!("Failed to load incident data: {:#}", e);
                let causes: Vec<String> = e.chain().map(|cause| cause.to_string()).collect();
                state.error_msg.set(Some(causes.join("\n")));
            }
        }
        state.loading.set(false);
    });

    // ─── Effect 2: Filter, aggregate and render ───
    // Re-runs whenever loading or any of the three selections change.
    use_effect(move || {
        let loading = (state.loading)();
        let selection = state.selection();
        if loading {
            return;
        }
        let Some(table) = state.table.read().clone() else {
            return;
        };

        // An empty table has no selection; its charts render empty.
        let view = table.view_or_empty(selection.as_ref());
        if let Some(filter) = &selection {
            log::info!(
                "[SFPD Debug] dashboard: {} incidents for {} / {} / {}",
                view.total,
                filter.year,
                filter.resolution,
                filter.district
            );
        }
        render_view(&view);
    });

    // (matching, plotted) for the current selection
    let counts = state.selection().and_then(|filter| {
        state.table.read().as_ref().map(|t| {
            let rows = t.filter(&filter);
            let plotted = rows.iter().filter(|i| i.coordinates().is_some()).count();
            (rows.len(), plotted)
        })
    });
    let (matching, plotted) = counts.unwrap_or((0, 0));
    let loaded = state.table.read().is_some();
    let empty = loaded && matching == 0;

    // ─── Render ───
    rsx! {
        div {
            style: "display: flex; min-height: 100vh; font-family: system-ui, -apple-system, sans-serif;",

            aside {
                style: "width: 260px; flex-shrink: 0; background: #f0f2f6; border-right: 1px solid #e0e0e0;",
                FilterSidebar {}
            }

            main {
                style: "flex: 1; padding: 16px 24px; min-width: 0;",

                h1 {
                    style: "margin: 0 0 24px 0;",
                    "🚓 Police Incident Dashboard"
                }

                if let Some(err) = state.error_msg.read().as_ref() {
                    ErrorDisplay {
                        message: err.clone(),
                        hint: Some(FIXTURE_HINT.to_string()),
                    }
                }

                if *state.loading.read() {
                    LoadingSpinner {}
                } else if loaded {
                    if empty {
                        p {
                            style: "color: #666;",
                            "No incidents match the selected filters."
                        }
                    } else {
                        p {
                            style: "color: #666;",
                            "{matching} incidents match the selected filters."
                        }
                    }

                    div {
                        style: "display: grid; grid-template-columns: minmax(0, 1fr) minmax(0, 1fr); gap: 24px;",
                        div {
                            ChartCard { id: DAY_OF_WEEK_ID, title: "Incidents by Day of Week", empty }
                            ChartCard {
                                id: HOUR_OF_DAY_ID,
                                title: "Incidents by Hour of Day",
                                caption: "Least frequent hours first",
                                empty,
                            }
                            ChartCard { id: CATEGORY_ID, title: "Incidents by Category", empty }
                        }
                        div {
                            ChartCard { id: DISTRICT_ID, title: "Incidents by Police District", empty }
                            ChartCard { id: NEIGHBORHOOD_ID, title: "Incidents by Neighborhood", empty }
                            ChartCard {
                                id: MAP_ID,
                                title: "San Francisco Incident Map",
                                caption: "Incidents without coordinates are not plotted",
                                total: plotted,
                                height: 420,
                                empty,
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One titled chart slot in the grid.
#[component]
fn ChartCard(
    id: String,
    title: String,
    #[props(default)] caption: String,
    #[props(default)] total: Option<usize>,
    #[props(default = 320)] height: u32,
    empty: bool,
) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 24px;",
            ChartHeader { title, caption, total }
            ChartContainer { id, height, empty }
        }
    }
}
