//! Title row above each chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Ordering note, e.g. "Least frequent hours first"
    #[props(default = String::new())]
    pub caption: String,
    /// Incidents behind the chart; hidden when None
    #[props(default = None)]
    pub total: Option<usize>,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        header {
            style: "display: flex; align-items: baseline; justify-content: space-between; margin-bottom: 8px; border-bottom: 1px solid #eee;",
            div {
                h3 {
                    style: "margin: 0 0 4px 0; font-size: 16px;",
                    "{props.title}"
                }
                if !props.caption.is_empty() {
                    p {
                        style: "margin: 0 0 4px 0; font-size: 12px; color: #666;",
                        "{props.caption}"
                    }
                }
            }
            if let Some(total) = props.total {
                span {
                    style: "font-size: 12px; color: #636EFA;",
                    "{total} incidents"
                }
            }
        }
    }
}
