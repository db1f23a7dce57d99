//! In-memory fakes for the session, navigation and API seams.

use std::cell::{Cell, RefCell};

use chrono::{DateTime, Duration, Utc};
use serde_json::json;

use crate::api::{Credentials, LoginResponse, MonitorApi};
use crate::error::{ApiError, Result, SessionError};
use crate::sensor::{SensorKind, SensorPayload, SensorReading};
use crate::session::{Navigate, Page, SessionStore};

#[derive(Default)]
pub struct MemoryStore {
    token: RefCell<Option<String>>,
    pub saves: RefCell<Vec<(String, Duration)>>,
    pub clears: Cell<usize>,
}

impl MemoryStore {
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        *store.token.borrow_mut() = Some(token.to_string());
        store
    }
}

impl SessionStore for MemoryStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str, ttl: Duration) -> std::result::Result<(), SessionError> {
        *self.token.borrow_mut() = Some(token.to_string());
        self.saves.borrow_mut().push((token.to_string(), ttl));
        Ok(())
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
        self.clears.set(self.clears.get() + 1);
    }
}

#[derive(Default)]
pub struct RecordingNav {
    visits: RefCell<Vec<Page>>,
}

impl RecordingNav {
    pub fn visits(&self) -> Vec<Page> {
        self.visits.borrow().clone()
    }
}

impl Navigate for RecordingNav {
    fn go_to(&self, page: Page) {
        self.visits.borrow_mut().push(page);
    }
}

/// Canned API answers; counts calls so tests can assert "no fetch issued".
pub struct FakeApi {
    pub login_result: Result<LoginResponse>,
    pub snapshot_result: Result<SensorPayload>,
    pub login_calls: RefCell<Vec<Credentials>>,
    pub snapshot_calls: Cell<usize>,
}

impl FakeApi {
    pub fn new(login_result: Result<LoginResponse>, snapshot_result: Result<SensorPayload>) -> Self {
        Self {
            login_result,
            snapshot_result,
            login_calls: RefCell::new(Vec::new()),
            snapshot_calls: Cell::new(0),
        }
    }

    pub fn with_login(result: Result<LoginResponse>) -> Self {
        Self::new(result, Err(ApiError::Status(500)))
    }

    pub fn with_snapshot(result: Result<SensorPayload>) -> Self {
        Self::new(Err(ApiError::Status(500)), result)
    }
}

impl MonitorApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        self.login_calls.borrow_mut().push(credentials.clone());
        self.login_result.clone()
    }

    async fn snapshot(&self) -> Result<SensorPayload> {
        self.snapshot_calls.set(self.snapshot_calls.get() + 1);
        self.snapshot_result.clone()
    }
}

pub fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
}

pub fn reading(kind: SensorKind, value: f64, recorded_at: &str) -> SensorReading {
    SensorReading {
        kind,
        value,
        recorded_at: at(recorded_at),
    }
}

/// A payload decoded from backend-shaped JSON.
pub fn payload(sensor: serde_json::Value, category: Option<&str>) -> SensorPayload {
    serde_json::from_value(json!({
        "sensor": sensor,
        "detail": {
            "ph": 7.1,
            "kekeruhan": 20.0,
            "skor": 85,
            "kategori": category,
            "createdAt": "2025-03-01T09:00:00Z",
        }
    }))
    .unwrap()
}
