//! Titled dashboard panel.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PanelProps {
    /// Panel heading
    pub title: String,
    /// Extra class, e.g. "panel-main"
    #[props(default = String::new())]
    pub class: String,
    pub children: Element,
}

/// Card-style container with a heading.
#[component]
pub fn Panel(props: PanelProps) -> Element {
    rsx! {
        div {
            class: "panel {props.class}",
            style: "background: #1f2937; color: #f9fafb; border-radius: 8px; padding: 16px; min-width: 0;",
            h2 {
                style: "margin: 0 0 12px 0; font-size: 18px;",
                "{props.title}"
            }
            {props.children}
        }
    }
}
