//! Shared Dioxus components and chart bridge for the incident dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js and Leaflet chart functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (filter sidebar, chart containers, etc.)

pub mod js_bridge;
pub mod state;
pub mod components;
