//! Dashboard state managed via Dioxus context.
//!
//! `DashboardContext` bundles the reactive signals of one mounted dashboard.
//! The dashboard page provides it with `use_context_provider`, so it is
//! created on mount and dropped on unmount. Child components retrieve it with
//! `use_context::<DashboardContext>()`.

use dioxus::prelude::*;
use leleku_core::dashboard::{reduce, DashboardState, Source};
use leleku_core::sensor::SensorPayload;

#[derive(Clone, Copy)]
pub struct DashboardContext {
    /// Latest snapshot or push update
    pub state: Signal<DashboardState>,
    /// Whether the initial snapshot is still in flight
    pub loading: Signal<bool>,
}

impl DashboardContext {
    /// Create a new context with empty series and a blank detail.
    pub fn new() -> Self {
        Self {
            state: Signal::new(DashboardState::default()),
            loading: Signal::new(true),
        }
    }

    /// Replace the state with an incoming snapshot or push payload.
    pub fn apply(&mut self, payload: SensorPayload, source: Source) {
        let next = reduce(&self.state.peek(), payload, source);
        self.state.set(next);
    }
}

impl Default for DashboardContext {
    fn default() -> Self {
        Self::new()
    }
}
