//! Core types for San Francisco police incident data.
//!
//! The dashboard data is spread across five source tables that share the
//! `Incident ID` column. This crate knows which columns each table must carry,
//! parses each table into typed rows, and defines the merged [`Incident`]
//! record along with the year/resolution/district [`Filter`].

pub mod error;
pub mod filter;
pub mod hour;
pub mod incident;
pub mod source;

pub use error::LoadError;
pub use filter::{Filter, FilterOptions};
pub use incident::Incident;
pub use source::SourceTable;

#[cfg(any(test, feature = "test-support"))]
pub use incident::test_support;
