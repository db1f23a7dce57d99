//! Dashboard screen.
//!
//! Data flow:
//! 1. On mount: session guard. Without a token we leave for `/login` and do
//!    nothing else.
//! 2. Open the push subscription and fetch the `/sensor` snapshot. Both end
//!    in `DashboardContext::apply`, whichever finishes last wins.
//! 3. On every state change: re-render both D3 area charts.
//! 4. On unmount: drop the push subscription (closes the socket).

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Local;
use dioxus::prelude::*;
use futures::channel::mpsc::UnboundedReceiver;
use futures::StreamExt;
use leleku_core::api::HttpMonitorApi;
use leleku_core::config::{AppConfig, SENSOR_EVENT};
use leleku_core::dashboard::{load_snapshot, LoadOutcome, Source};
use leleku_core::sensor::SensorPayload;
use leleku_core::session::{guard, logout, Guard, Page};
use leleku_core::view::chart_points;
use leleku_ui::components::{
    Card, ChartContainer, ChartHeader, LoadingSpinner, PageHeader, ReadingCard, StatusCard,
};
use leleku_ui::js_bridge::{self, AreaChartConfig};
use leleku_ui::push::PushSubscription;
use leleku_ui::session::CookieSession;
use leleku_ui::state::DashboardContext;
use log::warn;

use crate::RouterNav;

/// DOM ids for the D3 chart container divs.
const PH_CHART_ID: &str = "ph-chart";
const TURBIDITY_CHART_ID: &str = "turbidity-chart";

#[component]
pub fn Dashboard() -> Element {
    let config = use_context::<AppConfig>();
    let nav = RouterNav(navigator());
    let mut ctx = use_context_provider(DashboardContext::new);
    let api = use_hook(|| Rc::new(HttpMonitorApi::new(config.clone())));
    let subscription: Rc<RefCell<Option<PushSubscription>>> =
        use_hook(|| Rc::new(RefCell::new(None)));

    // Push payloads cross from the WebSocket callback into the Dioxus runtime here.
    let updates = use_coroutine(move |mut rx: UnboundedReceiver<SensorPayload>| async move {
        while let Some(payload) = rx.next().await {
            ctx.apply(payload, Source::Push);
        }
    });

    // ─── Mount: guard, subscribe, initial snapshot ───
    {
        let subscription = subscription.clone();
        let api = api.clone();
        let backend_url = config.backend_url.clone();
        use_effect(move || {
            if guard(Page::Dashboard, &CookieSession, &nav) == Guard::Redirected {
                return;
            }

            match PushSubscription::open(&backend_url, SENSOR_EVENT, updates.tx()) {
                Ok(sub) => *subscription.borrow_mut() = Some(sub),
                Err(e) => warn!("live updates unavailable: {}", e),
            }
            js_bridge::init_charts();

            let api = api.clone();
            spawn(async move {
                if let LoadOutcome::Loaded(payload) =
                    load_snapshot(api.as_ref(), &CookieSession, &nav).await
                {
                    ctx.apply(payload, Source::Snapshot);
                }
                ctx.loading.set(false);
            });
        });
    }

    // ─── Unmount: release the push channel ───
    {
        let subscription = subscription.clone();
        use_drop(move || {
            subscription.borrow_mut().take();
            js_bridge::destroy_chart(PH_CHART_ID);
            js_bridge::destroy_chart(TURBIDITY_CHART_ID);
        });
    }

    // ─── Charts: re-render whenever the state changes ───
    use_effect(move || {
        if (ctx.loading)() {
            return;
        }
        let state = ctx.state.read();
        js_bridge::render_area_chart(
            PH_CHART_ID,
            &chart_points(&state.ph, &Local),
            &AreaChartConfig {
                y_label: "pH".to_string(),
                color: "#2563eb".to_string(),
            },
        );
        js_bridge::render_area_chart(
            TURBIDITY_CHART_ID,
            &chart_points(&state.turbidity, &Local),
            &AreaChartConfig {
                y_label: "Kekeruhan (%)".to_string(),
                color: "#0d9488".to_string(),
            },
        );
    });

    let on_logout = move |_: ()| logout(&CookieSession, &nav);

    if (ctx.loading)() {
        return rsx! {
            LoadingSpinner {}
        };
    }

    let state = ctx.state.read().clone();

    rsx! {
        document::Title { "Dashboard | Monitoring Kolam Lele Menggunakan Internet Of Things" }
        PageHeader {
            title: "Sistem Monitoring Kolam Lele".to_string(),
            on_logout,
        }
        div {
            style: "max-width: 1280px; margin: 0 auto; padding: 24px 16px 64px 16px;",
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 16px;",
                StatusCard { detail: state.detail.clone() }
                ReadingCard {
                    title: "Ph Air Kolam".to_string(),
                    series: state.ph.clone(),
                }
                ReadingCard {
                    title: "Kekeruhan Air Kolam".to_string(),
                    series: state.turbidity.clone(),
                    unit: "%".to_string(),
                }
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 16px; margin-top: 16px;",
                Card {
                    ChartHeader { title: "Sensor Ph Air".to_string(), caption: "50 Data".to_string() }
                    ChartContainer { id: PH_CHART_ID.to_string() }
                }
                Card {
                    ChartHeader { title: "Sensor Kekeruhan Air".to_string(), caption: "50 Data".to_string() }
                    ChartContainer { id: TURBIDITY_CHART_ID.to_string() }
                }
            }
        }
    }
}
