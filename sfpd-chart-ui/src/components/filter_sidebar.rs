//! Sidebar with the year, resolution and district dropdowns.

use crate::components::FilterSelect;
use crate::state::AppState;
use dioxus::prelude::*;

/// Sidebar filter panel.
/// Reads the available values from AppState and updates the selection on change.
#[component]
pub fn FilterSidebar() -> Element {
    let mut state = use_context::<AppState>();
    let options = state.options.read().clone();

    let years: Vec<String> = options.years.iter().map(|y| y.to_string()).collect();
    let selected_year = (state.selected_year)()
        .map(|y| y.to_string())
        .unwrap_or_default();

    rsx! {
        div {
            style: "padding: 16px;",
            h2 {
                style: "margin: 0 0 12px 0; font-size: 18px;",
                "Please Filter Here:"
            }
            FilterSelect {
                id: "year-select".to_string(),
                label: "Select Year".to_string(),
                options: years,
                selected: selected_year,
                on_select: move |value: String| {
                    if let Ok(year) = value.parse::<i32>() {
                        state.selected_year.set(Some(year));
                    }
                },
            }
            FilterSelect {
                id: "resolution-select".to_string(),
                label: "Select Resolution".to_string(),
                options: options.resolutions.clone(),
                selected: (state.selected_resolution)(),
                on_select: move |value: String| state.selected_resolution.set(value),
            }
            FilterSelect {
                id: "district-select".to_string(),
                label: "Select District".to_string(),
                options: options.districts.clone(),
                selected: (state.selected_district)(),
                on_select: move |value: String| state.selected_district.set(value),
            }
        }
    }
}
