//! Cookie-backed session store.
//!
//! The token lives in a `token` cookie with an `expires` attribute, so the
//! browser drops it when it expires and `token()` simply stops finding it.

use chrono::{Duration, Utc};
use leleku_core::error::SessionError;
use leleku_core::session::{
    expired_cookie_string, find_cookie, set_cookie_string, SessionStore, TOKEN_KEY,
};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CookieSession;

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()
}

impl SessionStore for CookieSession {
    fn token(&self) -> Option<String> {
        let cookies = html_document()?.cookie().ok()?;
        let raw = find_cookie(&cookies, TOKEN_KEY)?;
        js_sys::decode_uri_component(raw).ok().map(String::from)
    }

    fn save(&self, token: &str, ttl: Duration) -> Result<(), SessionError> {
        let document = html_document()
            .ok_or_else(|| SessionError::Unavailable("no HTML document".to_string()))?;
        let value = String::from(js_sys::encode_uri_component(token));
        let cookie = set_cookie_string(TOKEN_KEY, &value, Utc::now() + ttl);
        document
            .set_cookie(&cookie)
            .map_err(|e| SessionError::Unavailable(format!("{:?}", e)))
    }

    fn clear(&self) {
        if let Some(document) = html_document() {
            let _ = document.set_cookie(&expired_cookie_string(TOKEN_KEY));
        }
    }
}
