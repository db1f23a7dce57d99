//! Dashboard view-model.
//!
//! Two sources feed one `DashboardState`: the initial `GET /sensor` snapshot
//! and the `getDataSensor` push event. Both go through [`reduce`], which
//! replaces the whole state. Nothing orders the two sources against each
//! other, so whichever lands last wins.
//!
//! The two sources split readings differently: a snapshot with fewer than two
//! readings shows nothing, a push shows whatever it carries.

use log::{error, info, warn};

use crate::api::MonitorApi;
use crate::error::ApiError;
use crate::sensor::{SensorKind, SensorPayload, SensorReading, SensorSeries, WaterQualityDetail};
use crate::session::{guard, Guard, Navigate, Page, SessionStore};

/// Everything the dashboard renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub ph: SensorSeries,
    pub turbidity: SensorSeries,
    pub detail: WaterQualityDetail,
}

/// Where a payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// `GET /sensor` answer
    Snapshot,
    /// `getDataSensor` event
    Push,
}

impl DashboardState {
    pub fn from_payload(payload: SensorPayload, source: Source) -> Self {
        let (ph, turbidity) = match source {
            Source::Snapshot => partition(&payload.sensor),
            Source::Push => split(&payload.sensor),
        };
        Self {
            ph,
            turbidity,
            detail: payload.detail,
        }
    }
}

/// Split raw readings into the pH and turbidity series, each sorted by time.
///
/// A list with fewer than two readings yields two empty series, even when the
/// single reading would belong to one of them.
pub fn partition(readings: &[SensorReading]) -> (SensorSeries, SensorSeries) {
    if readings.len() < 2 {
        return (SensorSeries::default(), SensorSeries::default());
    }
    split(readings)
}

/// Split raw readings into the pH and turbidity series, each sorted by time.
pub fn split(readings: &[SensorReading]) -> (SensorSeries, SensorSeries) {
    (
        SensorSeries::collect(SensorKind::Ph, readings),
        SensorSeries::collect(SensorKind::Turbidity, readings),
    )
}

/// State transition for an incoming snapshot or push payload.
///
/// `_previous` is deliberately unused: updates never merge.
pub fn reduce(
    _previous: &DashboardState,
    incoming: SensorPayload,
    source: Source,
) -> DashboardState {
    DashboardState::from_payload(incoming, source)
}

/// How the initial load ended.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Snapshot decoded; apply it with [`reduce`]
    Loaded(SensorPayload),
    /// Non-2xx answer. State stays at its defaults and nothing is shown.
    Unavailable(u16),
    /// A redirect to login was issued
    Redirected,
}

/// Fetch the initial snapshot for a dashboard that already passed the guard.
///
/// Any failure other than a non-2xx status is treated like an expired
/// session: the token is dropped and the user is sent back to login. A
/// connectivity blip therefore also logs the user out.
pub async fn load_snapshot<A, S, N>(api: &A, store: &S, nav: &N) -> LoadOutcome
where
    A: MonitorApi,
    S: SessionStore + ?Sized,
    N: Navigate + ?Sized,
{
    match api.snapshot().await {
        Ok(payload) => {
            info!("snapshot loaded with {} readings", payload.sensor.len());
            LoadOutcome::Loaded(payload)
        }
        Err(ApiError::Status(status)) => {
            warn!("snapshot request returned status {}", status);
            LoadOutcome::Unavailable(status)
        }
        Err(e) => {
            error!("error fetching data: {}", e);
            store.clear();
            nav.go_to(Page::Login);
            LoadOutcome::Redirected
        }
    }
}

/// Guard plus initial load, as run when the dashboard mounts.
pub async fn mount<A, S, N>(api: &A, store: &S, nav: &N) -> LoadOutcome
where
    A: MonitorApi,
    S: SessionStore + ?Sized,
    N: Navigate + ?Sized,
{
    match guard(Page::Dashboard, store, nav) {
        Guard::Redirected => LoadOutcome::Redirected,
        Guard::Proceed => load_snapshot(api, store, nav).await,
    }
}
