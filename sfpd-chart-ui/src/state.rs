//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use sfpd_data::IncidentTable;
use sfpd_incident::{Filter, FilterOptions};

/// Shared application state for the incident dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Merged incidents; set once after the initial load and never replaced
    pub table: Signal<Option<IncidentTable>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Distinct values offered by the three dropdowns
    pub options: Signal<FilterOptions>,
    /// Selected incident year (None until data is loaded)
    pub selected_year: Signal<Option<i32>>,
    /// Selected resolution
    pub selected_resolution: Signal<String>,
    /// Selected police district
    pub selected_district: Signal<String>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            table: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            options: Signal::new(FilterOptions::default()),
            selected_year: Signal::new(None),
            selected_resolution: Signal::new(String::new()),
            selected_district: Signal::new(String::new()),
        }
    }

    /// Store the loaded table and select the first value of every field.
    pub fn install(&mut self, table: IncidentTable) {
        let options = table.filter_options().clone();
        log::info!(
            "[SFPD Debug] state: {} incidents, {} years, {} resolutions, {} districts",
            table.len(),
            options.years.len(),
            options.resolutions.len(),
            options.districts.len()
        );
        if let Some(default) = options.default_filter() {
            self.selected_year.set(Some(default.year));
            self.selected_resolution.set(default.resolution);
            self.selected_district.set(default.district);
        }
        self.options.set(options);
        self.table.set(Some(table));
    }

    /// The current selection, or None before data is loaded.
    ///
    /// Reading this inside an effect or component subscribes it to all three
    /// dropdowns.
    pub fn selection(&self) -> Option<Filter> {
        let year = (self.selected_year)();
        let resolution = (self.selected_resolution)();
        let district = (self.selected_district)();
        Some(Filter {
            year: year?,
            resolution,
            district,
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
