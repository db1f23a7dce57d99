//! WebSocket push subscription.
//!
//! A `PushSubscription` owns one socket and the JS callbacks attached to it.
//! Dropping it detaches the callbacks and closes the socket, so holding it in
//! the dashboard component ties the connection to that component's lifetime.

use futures::channel::mpsc::UnboundedSender;
use leleku_core::error::PushError;
use leleku_core::push::{socket_url, PushAction, PushSession, DISCONNECT_FRAME};
use leleku_core::sensor::SensorPayload;
use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, MessageEvent, WebSocket};

pub struct PushSubscription {
    socket: WebSocket,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_close: Closure<dyn FnMut(CloseEvent)>,
}

impl PushSubscription {
    /// Connect to the backend and forward every `event` payload to `updates`.
    pub fn open(
        backend_url: &str,
        event: &str,
        updates: UnboundedSender<SensorPayload>,
    ) -> Result<Self, PushError> {
        let url = socket_url(backend_url)?;
        let socket =
            WebSocket::new(&url).map_err(|e| PushError::Transport(format!("{:?}", e)))?;
        info!("push channel connecting to {}", url);

        let session = PushSession::new(event);
        let reply = socket.clone();
        let on_message = Closure::<dyn FnMut(MessageEvent)>::new(move |msg: MessageEvent| {
            let Some(text) = msg.data().as_string() else {
                return;
            };
            match session.on_frame(&text) {
                Some(PushAction::Send(frame)) => {
                    if let Err(e) = reply.send_with_str(frame) {
                        warn!("push channel write failed: {:?}", e);
                    }
                }
                Some(PushAction::Deliver(payload)) => {
                    if updates.unbounded_send(payload).is_err() {
                        warn!("push update arrived after the dashboard went away");
                    }
                }
                Some(PushAction::Closed(reason)) => info!("push channel closed: {}", reason),
                None => {}
            }
        });
        socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

        let on_close = Closure::<dyn FnMut(CloseEvent)>::new(move |evt: CloseEvent| {
            info!("push socket closed ({}) {}", evt.code(), evt.reason());
        });
        socket.set_onclose(Some(on_close.as_ref().unchecked_ref()));

        Ok(Self {
            socket,
            _on_message: on_message,
            _on_close: on_close,
        })
    }
}

impl Drop for PushSubscription {
    fn drop(&mut self) {
        self.socket.set_onmessage(None);
        self.socket.set_onclose(None);
        if self.socket.ready_state() == WebSocket::OPEN {
            let _ = self.socket.send_with_str(DISCONNECT_FRAME);
        }
        let _ = self.socket.close();
        info!("push channel released");
    }
}
