//! Loading spinner component.

use dioxus::prelude::*;

/// Full-page indicator shown until the first reading arrives.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "loading",
            style: "display: flex; flex-direction: column; justify-content: center; align-items: center; padding: 40px; color: #666;",
            div {
                class: "spinner",
                style: "width: 40px; height: 40px; border: 4px solid #e5e7eb; border-top-color: #3b82f6; border-radius: 50%;",
            }
            p { "Loading Curator AI Dashboard..." }
        }
    }
}
