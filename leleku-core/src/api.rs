//! Backend Data API seam.
//!
//! `MonitorApi` is what the view-models talk to. `HttpMonitorApi` (feature
//! `api`) is the reqwest implementation; it builds for both native targets
//! and wasm32, where reqwest goes through `fetch`.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sensor::SensorPayload;

/// Username / password pair posted to `/login`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// `POST /login` response envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<LoginData>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginData {
    pub token: String,
}

/// The two backend calls the pages make.
///
/// Implementations return `ApiError::Status` for any non-2xx response,
/// `ApiError::Transport` when no response arrived and `ApiError::Decode`
/// when the body has the wrong shape.
#[allow(async_fn_in_trait)]
pub trait MonitorApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse>;
    async fn snapshot(&self) -> Result<SensorPayload>;
}

#[cfg(feature = "api")]
pub use http::HttpMonitorApi;

#[cfg(feature = "api")]
mod http {
    use super::*;
    use crate::config::AppConfig;
    use crate::error::ApiError;
    use crate::sensor::SnapshotEnvelope;
    use log::info;
    use reqwest::header::CONTENT_TYPE;
    use reqwest::{Client, Response};
    use serde::de::DeserializeOwned;

    /// reqwest-backed `MonitorApi`.
    #[derive(Debug, Clone)]
    pub struct HttpMonitorApi {
        client: Client,
        config: AppConfig,
    }

    impl HttpMonitorApi {
        pub fn new(config: AppConfig) -> Self {
            Self {
                client: Client::new(),
                config,
            }
        }

        async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
            let status = response.status();
            if !status.is_success() {
                return Err(ApiError::Status(status.as_u16()));
            }
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
    }

    impl MonitorApi for HttpMonitorApi {
        async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
            let url = self.config.endpoint("/login");
            info!("POST {}", url);
            let response = self
                .client
                .post(&url)
                .json(credentials)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            Self::decode(response).await
        }

        async fn snapshot(&self) -> Result<SensorPayload> {
            // The backend does not check a bearer header on this route.
            let url = self.config.endpoint("/sensor");
            info!("GET {}", url);
            let response = self
                .client
                .get(&url)
                .header(CONTENT_TYPE, "application/json")
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let envelope: SnapshotEnvelope = Self::decode(response).await?;
            Ok(envelope.data)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_response_shapes() {
        let ok: LoginResponse = serde_json::from_value(json!({
            "success": true,
            "message": "Login berhasil",
            "data": { "token": "abc.def" }
        }))
        .unwrap();
        assert!(ok.success);
        assert_eq!(ok.data.unwrap().token, "abc.def");

        let rejected: LoginResponse = serde_json::from_value(json!({
            "success": false,
            "message": "Invalid credentials"
        }))
        .unwrap();
        assert!(!rejected.success);
        assert_eq!(rejected.message.as_deref(), Some("Invalid credentials"));
        assert!(rejected.data.is_none());
    }

    #[test]
    fn test_credentials_body() {
        let body = serde_json::to_value(Credentials {
            username: "admin".into(),
            password: "secret".into(),
        })
        .unwrap();
        assert_eq!(body, json!({ "username": "admin", "password": "secret" }));
    }
}
