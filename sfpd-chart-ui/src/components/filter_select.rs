//! Labelled single-select dropdown.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FilterSelectProps {
    /// DOM id of the `<select>`
    pub id: String,
    /// Label shown above the dropdown
    pub label: String,
    /// Values in display order
    pub options: Vec<String>,
    /// Currently selected value
    pub selected: String,
    /// Called with the newly selected value
    pub on_select: EventHandler<String>,
}

/// A sidebar dropdown offering exactly one of `options`.
#[component]
pub fn FilterSelect(props: FilterSelectProps) -> Element {
    let on_select = props.on_select;
    let on_change = move |evt: Event<FormData>| {
        on_select.call(evt.value());
    };

    rsx! {
        div {
            style: "margin: 12px 0;",
            label {
                r#for: "{props.id}",
                style: "display: block; font-weight: bold; margin-bottom: 4px;",
                "{props.label}"
            }
            select {
                id: "{props.id}",
                style: "width: 100%; padding: 4px;",
                disabled: props.options.is_empty(),
                onchange: on_change,
                for value in props.options.iter() {
                    option {
                        value: "{value}",
                        selected: *value == props.selected,
                        "{value}"
                    }
                }
            }
        }
    }
}
