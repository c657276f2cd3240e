//! Fatal load error panel.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    /// Error chain, one cause per line
    pub message: String,
    /// What the user can do about it
    #[props(default = None)]
    pub hint: Option<String>,
}

/// Replaces the chart grid when the source tables cannot be loaded.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let causes: Vec<String> = props.message.lines().map(str::to_string).collect();

    rsx! {
        section {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-left: 4px solid #C62828;",
            h3 {
                style: "margin: 0 0 6px 0; font-size: 15px;",
                "The incident data could not be loaded"
            }
            ul {
                style: "margin: 0; padding-left: 18px; font-family: monospace; font-size: 12px;",
                for cause in causes {
                    li { "{cause}" }
                }
            }
            if let Some(hint) = props.hint.as_ref() {
                p {
                    style: "margin: 8px 0 0 0; color: #5D4037; font-size: 13px;",
                    "{hint}"
                }
            }
        }
    }
}
