// web_app/api/error.rs - User-facing request errors
//
// Every failure the dashboard can show ends up as one DispatchError. Its
// Display text goes straight into the error banner.

use thiserror::Error;

use super::transport::{RawResponse, TransportError};

/// Everything that can go wrong on a dashboard request.
///
/// `Display` is the message shown in the inline error banner.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DispatchError {
    #[error("Enter a search query")]
    Validation,

    #[error("Access denied (invalid anti-forgery token)")]
    Forbidden,

    #[error("Server not responding")]
    NoResponse,

    /// Message taken from the `error` field of the response body
    #[error("{0}")]
    Server(String),

    #[error("Server error")]
    ServerGeneric,

    #[error("Malformed response from server: {0}")]
    MalformedResponse(String),
}

impl DispatchError {
    /// Classify a response that came back with a non-success status.
    pub fn from_response(response: &RawResponse) -> Self {
        if response.status == 403 {
            return DispatchError::Forbidden;
        }

        serde_json::from_str::<serde_json::Value>(&response.body)
            .ok()
            .and_then(|body| {
                body.get("error")
                    .and_then(|e| e.as_str())
                    .map(str::to_owned)
            })
            .filter(|msg| !msg.trim().is_empty())
            .map(DispatchError::Server)
            .unwrap_or(DispatchError::ServerGeneric)
    }
}

impl From<TransportError> for DispatchError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::NoResponse(_) => DispatchError::NoResponse,
            TransportError::Request(_) => DispatchError::ServerGeneric,
        }
    }
}
