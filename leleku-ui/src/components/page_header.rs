//! Dashboard header bar with the logout button.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    pub title: String,
    /// Fired when the logout button is pressed
    pub on_logout: EventHandler<()>,
}

#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        header {
            style: "border-bottom: 1px solid #e2e8f0;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; height: 64px; max-width: 1280px; margin: 0 auto; padding: 0 16px;",
                span {
                    style: "font-weight: 700; font-size: 22px;",
                    "{props.title}"
                }
                button {
                    style: "background: #2563eb; color: #ffffff; border: none; border-radius: 6px; padding: 8px 16px; cursor: pointer;",
                    onclick: move |_| props.on_logout.call(()),
                    "Keluar"
                }
            }
        }
    }
}
