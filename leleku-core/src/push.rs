//! Socket.IO framing for the live update channel.
//!
//! The backend pushes `getDataSensor` events over Socket.IO (Engine.IO v4,
//! WebSocket transport, default namespace). Frames are text:
//!
//! ```text
//! 0{"sid":..}        engine open      -> reply 40 (join namespace)
//! 2                  engine ping      -> reply 3
//! 40{"sid":..}       namespace joined
//! 42["event",{..}]   event with arguments
//! 41 / 1             disconnect / close
//! 44{"message":..}   namespace refused
//! ```
//!
//! `PushSession` turns incoming frames into the replies to send and the
//! payloads to hand to the dashboard. The transport itself lives in the UI.
//! Packets addressed to any namespace but `/` are ignored.

use log::{info, warn};
use serde_json::Value;

use crate::error::PushError;
use crate::sensor::SensorPayload;

/// Frame that joins the default namespace.
pub const CONNECT_FRAME: &str = "40";
/// Frame that leaves the default namespace before closing the socket.
pub const DISCONNECT_FRAME: &str = "41";
const PONG_FRAME: &str = "3";

/// WebSocket endpoint for a backend base URL.
pub fn socket_url(backend_url: &str) -> Result<String, PushError> {
    let base = backend_url.trim_end_matches('/');
    let ws = if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{}", rest)
    } else if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{}", rest)
    } else {
        return Err(PushError::InvalidUrl(backend_url.to_string()));
    };
    Ok(format!("{}/socket.io/?EIO=4&transport=websocket", ws))
}

/// A decoded text frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Open,
    Close,
    Ping,
    Pong,
    Noop,
    Connected,
    Disconnected,
    ConnectError(String),
    Event { name: String, args: Vec<Value> },
    /// Acks, binary packets and other namespaces; the dashboard never asks for them
    Ignored,
}

pub fn parse_frame(text: &str) -> Result<Frame, PushError> {
    let malformed = || PushError::MalformedFrame(text.to_string());
    let mut chars = text.chars();
    match chars.next() {
        Some('0') => Ok(Frame::Open),
        Some('1') => Ok(Frame::Close),
        Some('2') => Ok(Frame::Ping),
        Some('3') => Ok(Frame::Pong),
        Some('6') => Ok(Frame::Noop),
        Some('4') => parse_packet(chars.as_str()).ok_or_else(malformed),
        _ => Err(malformed()),
    }
}

/// Socket.IO packet carried by an Engine.IO message.
fn parse_packet(packet: &str) -> Option<Frame> {
    let (kind, rest) = packet.split_at_checked(1)?;

    // Optional "/namespace," prefix, then optional numeric ack id.
    let rest = match rest.strip_prefix('/') {
        Some(nsp) => {
            let (name, body) = nsp.split_once(',').unwrap_or((nsp, ""));
            if !name.is_empty() {
                return Some(Frame::Ignored);
            }
            body
        }
        None => rest,
    };
    let body = rest.trim_start_matches(|c: char| c.is_ascii_digit());

    match kind {
        "0" => Some(Frame::Connected),
        "1" => Some(Frame::Disconnected),
        "2" => {
            let mut args = match serde_json::from_str::<Value>(body).ok()? {
                Value::Array(items) => items,
                _ => return None,
            };
            if args.is_empty() {
                return None;
            }
            let name = match args.remove(0) {
                Value::String(name) => name,
                _ => return None,
            };
            Some(Frame::Event { name, args })
        }
        "4" => {
            let message = serde_json::from_str::<Value>(body)
                .ok()
                .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
                .unwrap_or_else(|| body.to_string());
            Some(Frame::ConnectError(message))
        }
        "3" | "5" | "6" => Some(Frame::Ignored),
        _ => None,
    }
}

/// What the transport should do after a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum PushAction {
    /// Write this text frame back to the socket
    Send(&'static str),
    /// A decoded sensor update for the dashboard
    Deliver(SensorPayload),
    /// The server ended the session
    Closed(String),
}

/// Protocol handling for one subscription to one event.
#[derive(Debug, Clone)]
pub struct PushSession {
    event: String,
}

impl PushSession {
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
        }
    }

    /// At most one action per frame.
    pub fn on_frame(&self, text: &str) -> Option<PushAction> {
        let frame = match parse_frame(text) {
            Ok(frame) => frame,
            Err(e) => {
                warn!("{}", e);
                return None;
            }
        };

        match frame {
            Frame::Open => Some(PushAction::Send(CONNECT_FRAME)),
            Frame::Ping => Some(PushAction::Send(PONG_FRAME)),
            Frame::Connected => {
                info!("joined the default namespace");
                None
            }
            Frame::Event { name, mut args } if name == self.event => {
                if args.is_empty() {
                    warn!("{} event without payload", name);
                    return None;
                }
                match serde_json::from_value::<SensorPayload>(args.swap_remove(0)) {
                    Ok(payload) => Some(PushAction::Deliver(payload)),
                    Err(e) => {
                        warn!("dropping undecodable {} payload: {}", name, e);
                        None
                    }
                }
            }
            Frame::Disconnected | Frame::Close => {
                Some(PushAction::Closed("server closed the session".to_string()))
            }
            Frame::ConnectError(message) => Some(PushAction::Closed(message)),
            Frame::Event { .. } | Frame::Pong | Frame::Noop | Frame::Ignored => None,
        }
    }
}
