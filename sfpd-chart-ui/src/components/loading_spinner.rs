//! Spinner shown while the source tables are joined.

use dioxus::prelude::*;

const SPIN_KEYFRAMES: &str = "@keyframes sfpd-spin { to { transform: rotate(360deg); } }";

#[component]
pub fn LoadingSpinner(
    #[props(default = "Joining incident tables...".to_string())] label: String,
) -> Element {
    rsx! {
        style { "{SPIN_KEYFRAMES}" }
        div {
            style: "display: flex; gap: 12px; justify-content: center; align-items: center; padding: 40px; color: #666;",
            div {
                style: "width: 18px; height: 18px; border: 3px solid #ddd; border-top-color: #636EFA; border-radius: 50%; animation: sfpd-spin 0.8s linear infinite;",
            }
            span { "{label}" }
        }
    }
}
