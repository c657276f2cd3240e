//! The merged incident table and the filter engine.

use crate::view::DashboardView;
use serde::Serialize;
use sfpd_db::models::TableCount;
use sfpd_db::{Database, SourceFiles};
use sfpd_incident::{Filter, FilterOptions, Incident};
use std::sync::Arc;

/// What the load saw: rows per source table and the incidents the join dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadReport {
    pub table_counts: Vec<TableCount>,
    pub dropped_incident_ids: Vec<String>,
}

/// Immutable handle on the merged incidents.
///
/// Built once per process with [`IncidentTable::load`] and passed explicitly
/// to whatever renders the page. Clones share the same rows.
#[derive(Debug, Clone, PartialEq)]
pub struct IncidentTable {
    incidents: Arc<[Incident]>,
    options: Arc<FilterOptions>,
    report: Arc<LoadReport>,
}

impl IncidentTable {
    /// Load the five source tables, join them and freeze the result.
    ///
    /// Any missing column or malformed cell aborts the whole load.
    pub fn load(sources: &SourceFiles) -> anyhow::Result<Self> {
        let db = Database::from_sources(sources)?;
        let incidents = db.query_incidents()?;
        let report = LoadReport {
            table_counts: db.query_table_counts()?,
            dropped_incident_ids: db.query_dropped_incident_ids()?,
        };
        log::info!(
            "[SFPD Debug] table: Merged {} incidents ({} dropped by the join)",
            incidents.len(),
            report.dropped_incident_ids.len()
        );
        Ok(Self::with_report(incidents, report))
    }

    /// Wrap already-merged incidents, e.g. in tests.
    pub fn from_incidents(incidents: Vec<Incident>) -> Self {
        Self::with_report(incidents, LoadReport::default())
    }

    fn with_report(incidents: Vec<Incident>, report: LoadReport) -> Self {
        let options = FilterOptions::from_incidents(&incidents);
        Self {
            incidents: incidents.into(),
            options: Arc::new(options),
            report: Arc::new(report),
        }
    }

    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    /// Distinct year, resolution and district values, in table order.
    pub fn filter_options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Rows matching all three selections, in table order.
    pub fn filter(&self, filter: &Filter) -> Vec<&Incident> {
        self.incidents.iter().filter(|i| filter.matches(i)).collect()
    }

    /// Filter, then summarize into the six dashboard charts.
    pub fn view(&self, filter: &Filter) -> DashboardView {
        DashboardView::build(&self.filter(filter))
    }

    /// Like [`view`](Self::view), but a missing selection (an empty table
    /// offers no values to select) yields the empty charts.
    pub fn view_or_empty(&self, filter: Option<&Filter>) -> DashboardView {
        match filter {
            Some(filter) => self.view(filter),
            None => DashboardView::build(&[]),
        }
    }
}
