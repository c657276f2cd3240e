//! Fixed-height slot a D3 chart or Leaflet map renders into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id passed to the JS render function
    pub id: String,
    /// Height in pixels. Leaflet needs it set explicitly.
    #[props(default = 320)]
    pub height: u32,
    /// Overlay a note when the selection matched no incidents
    #[props(default = false)]
    pub empty: bool,
}

#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!("position: relative; width: 100%; height: {}px;", props.height);

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%; height: 100%;",
            }
            if props.empty {
                div {
                    style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; color: #999; pointer-events: none;",
                    "No incidents for this selection"
                }
            }
        }
    }
}
