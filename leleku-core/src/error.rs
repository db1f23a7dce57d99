/// Error types for the Leleku core library
use thiserror::Error;

/// Failure talking to the backend Data API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The server answered with a non-2xx status
    #[error("Server responded with status {0}")]
    Status(u16),

    /// The request never produced a response (DNS, refused connection, CORS, ...)
    #[error("Request failed: {0}")]
    Transport(String),

    /// The response body could not be decoded into the expected shape
    #[error("Invalid response body: {0}")]
    Decode(String),
}

/// Failure decoding the push channel.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PushError {
    /// Backend URL has no http(s) scheme
    #[error("Unsupported backend URL: {0}")]
    InvalidUrl(String),

    /// Frame does not follow the Engine.IO / Socket.IO text encoding
    #[error("Malformed frame: {0}")]
    MalformedFrame(String),

    /// The browser refused to open the socket
    #[error("Push transport error: {0}")]
    Transport(String),
}

/// Failure persisting the session token.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The storage backend is not reachable (no document, read-only disk, ...)
    #[error("Session storage unavailable: {0}")]
    Unavailable(String),

    #[error("Session IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session record is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Type alias for Results using ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
