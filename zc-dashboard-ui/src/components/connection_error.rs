//! Connection error component.

use dioxus::prelude::*;
use zc_core::cycle::{SETUP_COMMAND, SETUP_HINT};

#[derive(Props, Clone, PartialEq)]
pub struct ConnectionErrorProps {
    pub message: String,
}

/// Shown in place of the dashboard when the first fetch cycles fail.
#[component]
pub fn ConnectionError(props: ConnectionErrorProps) -> Element {
    rsx! {
        div {
            class: "error",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            h2 { style: "margin: 0 0 8px 0;", "Connection Error" }
            p { "{props.message}" }
            p { "{SETUP_HINT}" }
            code { "{SETUP_COMMAND}" }
        }
    }
}
