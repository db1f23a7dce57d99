//! Shared Dioxus components and browser adapters for the Leleku dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js area chart via `js_sys::eval()`
//! - `state`: Reactive dashboard state with Dioxus Signals
//! - `session`: Cookie-backed `SessionStore`
//! - `push`: WebSocket push subscription scoped to the dashboard's lifetime
//! - `components`: Reusable RSX components (cards, chart containers, etc.)

pub mod components;
pub mod js_bridge;
pub mod push;
pub mod session;
pub mod state;
