//! Reusable Dioxus RSX components for the incident dashboard.

mod chart_container;
mod chart_header;
mod error_display;
mod filter_select;
mod filter_sidebar;
mod loading_spinner;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use filter_select::FilterSelect;
pub use filter_sidebar::FilterSidebar;
pub use loading_spinner::LoadingSpinner;
