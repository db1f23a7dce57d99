//! Session token storage, navigation and the per-page session guard.

use chrono::{DateTime, Duration, Utc};
use log::info;

use crate::error::SessionError;

/// Cookie / record name holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Client-side holder of the session token.
///
/// Expiry is the store's business: `token()` must not return a token the
/// store considers expired.
pub trait SessionStore {
    fn token(&self) -> Option<String>;
    fn save(&self, token: &str, ttl: Duration) -> Result<(), SessionError>;
    fn clear(&self);
}

/// The two screens of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Dashboard,
}

/// Redirect capability handed to the view-models.
pub trait Navigate {
    fn go_to(&self, page: Page);
}

/// Result of running the session guard on mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Stay on the page and continue mounting
    Proceed,
    /// A redirect was issued; nothing else should happen
    Redirected,
}

/// Session guard, run once when `page` mounts.
///
/// The login page bounces to the dashboard when a token exists; the
/// dashboard bounces to login when it does not.
pub fn guard<S, N>(page: Page, store: &S, nav: &N) -> Guard
where
    S: SessionStore + ?Sized,
    N: Navigate + ?Sized,
{
    let has_token = store.token().is_some();
    match (page, has_token) {
        (Page::Login, true) => {
            info!("session present, skipping login");
            nav.go_to(Page::Dashboard);
            Guard::Redirected
        }
        (Page::Dashboard, false) => {
            info!("no session, redirecting to login");
            nav.go_to(Page::Login);
            Guard::Redirected
        }
        _ => Guard::Proceed,
    }
}

/// Client-only logout: forget the token and go back to login.
pub fn logout<S, N>(store: &S, nav: &N)
where
    S: SessionStore + ?Sized,
    N: Navigate + ?Sized,
{
    store.clear();
    info!("logged out");
    nav.go_to(Page::Login);
}

/// `name=value; expires=...; path=/` as understood by `document.cookie`.
///
/// `value` must already be URI-encoded.
pub fn set_cookie_string(name: &str, value: &str, expires: DateTime<Utc>) -> String {
    format!(
        "{}={}; expires={}; path=/",
        name,
        value,
        expires.format("%a, %d %b %Y %H:%M:%S GMT")
    )
}

/// Cookie string that makes the browser drop `name`.
pub fn expired_cookie_string(name: &str) -> String {
    format!("{}=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/", name)
}

/// Find the raw (still encoded) value of `name` in a `document.cookie` string.
pub fn find_cookie<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemoryStore, RecordingNav};
    use chrono::TimeZone;

    #[test]
    fn test_dashboard_without_token_redirects_to_login() {
        let store = MemoryStore::default();
        let nav = RecordingNav::default();
        assert_eq!(guard(Page::Dashboard, &store, &nav), Guard::Redirected);
        assert_eq!(nav.visits(), vec![Page::Login]);
    }

    #[test]
    fn test_dashboard_with_token_proceeds() {
        let store = MemoryStore::with_token("abc");
        let nav = RecordingNav::default();
        assert_eq!(guard(Page::Dashboard, &store, &nav), Guard::Proceed);
        assert!(nav.visits().is_empty());
    }

    #[test]
    fn test_login_with_token_redirects_to_dashboard() {
        let store = MemoryStore::with_token("abc");
        let nav = RecordingNav::default();
        assert_eq!(guard(Page::Login, &store, &nav), Guard::Redirected);
        assert_eq!(nav.visits(), vec![Page::Dashboard]);
    }

    #[test]
    fn test_login_without_token_proceeds() {
        let store = MemoryStore::default();
        let nav = RecordingNav::default();
        assert_eq!(guard(Page::Login, &store, &nav), Guard::Proceed);
        assert!(nav.visits().is_empty());
    }

    #[test]
    fn test_logout_clears_and_redirects() {
        let store = MemoryStore::with_token("abc");
        let nav = RecordingNav::default();
        logout(&store, &nav);
        assert_eq!(store.token(), None);
        assert_eq!(nav.visits(), vec![Page::Login]);
    }

    #[test]
    fn test_cookie_strings() {
        let expires = Utc.with_ymd_and_hms(2025, 3, 2, 8, 30, 0).unwrap();
        assert_eq!(
            set_cookie_string("token", "a.b.c", expires),
            "token=a.b.c; expires=Sun, 02 Mar 2025 08:30:00 GMT; path=/"
        );
        assert!(expired_cookie_string("token").contains("1970"));
    }

    #[test]
    fn test_find_cookie() {
        let jar = "theme=dark; token=eyJhbGciOi.x.y; other=1";
        assert_eq!(find_cookie(jar, "token"), Some("eyJhbGciOi.x.y"));
        assert_eq!(find_cookie(jar, "missing"), None);
        assert_eq!(find_cookie("token=", "token"), None);
        assert_eq!(find_cookie("", "token"), None);
    }
}
