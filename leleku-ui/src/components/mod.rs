//! Reusable Dioxus RSX components for the Leleku pages.

mod card;
mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod page_header;
mod reading_card;
mod status_card;

pub use card::Card;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use page_header::PageHeader;
pub use reading_card::ReadingCard;
pub use status_card::StatusCard;
