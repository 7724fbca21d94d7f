// web_app/api/transport.rs - HTTP seam between the dispatcher and the network
//
// The dispatcher only needs three things from the outside world: issue a GET,
// issue a JSON POST, and read the page cookies. The browser build plugs in
// `BrowserTransport`; tests plug in an in-memory fake.

use thiserror::Error;

/// Status and raw body of a response that reached us
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request went out but nothing came back
    #[error("no response received: {0}")]
    NoResponse(String),

    /// The request could not be built or sent at all
    #[error("request could not be issued: {0}")]
    Request(String),
}

/// Minimal async HTTP client used by [`super::Dispatcher`].
///
/// Every request carries credentials (cookies) so the API session and the
/// anti-forgery cookie travel with it.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(
        &self,
        url: &str,
        params: &[(&'static str, String)],
    ) -> Result<RawResponse, TransportError>;

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
        headers: &[(&'static str, String)],
    ) -> Result<RawResponse, TransportError>;

    /// Raw `name=value; name2=value2` cookie string visible to the page.
    fn cookies(&self) -> String;
}

/// Value of the `csrftoken` cookie, if set.
pub fn csrf_token_from_cookies(cookies: &str) -> Option<&str> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix("csrftoken="))
}
