//! Filtering and aggregation of merged incidents.
//!
//! [`IncidentTable`] is the immutable, load-once handle on the merged data.
//! Each selection change filters it ([`IncidentTable::filter`]) and
//! summarizes the result six ways ([`DashboardView::build`]).

pub mod counts;
pub mod table;
pub mod view;

pub use counts::{frequency_counts, CategoryCount, CountOrder};
pub use table::{IncidentTable, LoadReport};
pub use view::DashboardView;
