//! Core types and view-models for the Leleku pond monitoring dashboard.
//!
//! This crate holds everything that does not touch the browser:
//! - `sensor`: readings, series and the water quality detail record
//! - `dashboard`: partitioning, the state reducer and the initial snapshot load
//! - `login`: login form state and the submit contract
//! - `session`: session store / navigation seams, the session guard and logout
//! - `view`: pure rendering derivations (status colors, card values, chart points)
//! - `push`: Socket.IO framing for the live update channel
//! - `api`: the backend Data API seam (plus a reqwest client behind the `api` feature)

pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod login;
pub mod push;
pub mod sensor;
pub mod session;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;
