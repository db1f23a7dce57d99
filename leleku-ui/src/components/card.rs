//! Bordered card shell shared by the dashboard tiles.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    /// Extra inline style appended after the default card style
    #[props(default = String::new())]
    pub style: String,
    pub children: Element,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    rsx! {
        div {
            style: "border: 1px solid #e2e8f0; border-radius: 12px; padding: 20px; background: #ffffff; {props.style}",
            {props.children}
        }
    }
}
