//! Loading indicator component.

use dioxus::prelude::*;

/// Simple loading indicator.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        p {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #64748b;",
            "Loading..."
        }
    }
}
