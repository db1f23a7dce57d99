//! Login view-model: pending credentials, in-flight flag and the submit contract.

use chrono::Duration;
use log::{info, warn};

use crate::api::{Credentials, MonitorApi};
use crate::error::ApiError;
use crate::session::{Navigate, Page, SessionStore};

/// Message shown when the server rejects the request outright.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";
const UNREACHABLE_MESSAGE: &str = "Unable to reach the server";
const UNEXPECTED_MESSAGE: &str = "Unexpected response from the server";
const REJECTED_MESSAGE: &str = "Login failed";

/// Form field, addressed by its input `name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

impl LoginField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "username" => Some(LoginField::Username),
            "password" => Some(LoginField::Password),
            _ => None,
        }
    }
}

/// State behind the login form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub credentials: Credentials,
    /// Inputs and the submit button are disabled while true
    pub submitting: bool,
    pub error: Option<String>,
}

impl LoginForm {
    pub fn update_field(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Username => self.credentials.username = value,
            LoginField::Password => self.credentials.password = value,
        }
    }

    /// Both fields are required.
    pub fn is_complete(&self) -> bool {
        !self.credentials.username.is_empty() && !self.credentials.password.is_empty()
    }

    /// Enter the in-flight state and hand back the credentials to post.
    ///
    /// Returns `None` while a submission is already running or the form is
    /// incomplete.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.submitting || !self.is_complete() {
            return None;
        }
        self.submitting = true;
        self.error = None;
        Some(self.credentials.clone())
    }

    /// Leave the in-flight state with the result of [`submit`].
    pub fn finish(&mut self, result: Result<(), String>) {
        self.submitting = false;
        self.error = result.err();
    }
}

/// Post credentials and, on success, store the token and open the dashboard.
///
/// Errors come back as the message to show under the form. Nothing is
/// stored and no redirect happens on failure; the user resubmits.
pub async fn submit<A, S, N>(
    api: &A,
    store: &S,
    nav: &N,
    credentials: &Credentials,
    ttl: Duration,
) -> Result<(), String>
where
    A: MonitorApi,
    S: SessionStore + ?Sized,
    N: Navigate + ?Sized,
{
    let response = api.login(credentials).await.map_err(|e| {
        warn!("login request failed: {}", e);
        match e {
            ApiError::Status(_) => UNAUTHORIZED_MESSAGE.to_string(),
            ApiError::Transport(_) => UNREACHABLE_MESSAGE.to_string(),
            ApiError::Decode(_) => UNEXPECTED_MESSAGE.to_string(),
        }
    })?;

    if !response.success {
        return Err(response
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| REJECTED_MESSAGE.to_string()));
    }

    let token = response
        .data
        .map(|data| data.token)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| UNEXPECTED_MESSAGE.to_string())?;

    store.save(&token, ttl).map_err(|e| e.to_string())?;
    info!("logged in as {}", credentials.username);
    nav.go_to(Page::Dashboard);
    Ok(())
}
