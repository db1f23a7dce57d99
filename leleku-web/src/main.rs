//! Leleku pond monitoring dashboard
//!
//! Two screens over the Leleku backend:
//! - `/login`: username/password form; stores the session token in a cookie.
//! - `/dashboard`: pH and turbidity cards, the water quality status and two
//!   D3.js area charts, kept live through the `getDataSensor` push event.
//!
//! Backend URL and token lifetime are read at compile time from
//! `LELEKU_BACKEND_URL` and `LELEKU_TOKEN_EXPIRY_DAYS`.

use dioxus::prelude::*;
use dioxus::router::Navigator;
use leleku_core::config::AppConfig;
use leleku_core::session::{Navigate, Page};

mod pages;

use pages::{Dashboard, Login};


/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[redirect("/", || Route::Login {})]
    #[route("/login")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
}

/// `Navigate` over the Dioxus router.
#[derive(Clone, Copy)]
struct RouterNav(Navigator);

impl Navigate for RouterNav {
    fn go_to(&self, page: Page) {
        let route = match page {
            Page::Login => Route::Login {},
            Page::Dashboard => Route::Dashboard {},
        };
        let _ = self.0.push(route);
    }
}

fn build_config() -> AppConfig {
    AppConfig::from_values(
        option_env!("LELEKU_BACKEND_URL"),
        option_env!("LELEKU_TOKEN_EXPIRY_DAYS"),
    )
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(build_config);

    rsx! {
        document::Script { src: "https://cdn.jsdelivr.net/npm/d3@7" }
        div {
            style: "min-height: 100vh; background: #f8fafc; color: #0f172a; font-family: system-ui, -apple-system, sans-serif;",
            Router::<Route> {}
        }
    }
}
