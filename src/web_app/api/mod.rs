// web_app/api/mod.rs - Client for the external scrape API
//
// - transport.rs: HTTP seam (trait + response type)
// - error.rs: user-facing error taxonomy
// - dispatcher.rs: scrape / listing / CSRF request flow
// - browser.rs: gloo-net transport used by the WASM client

pub mod dispatcher;
pub mod error;
pub mod transport;

#[cfg(feature = "web-client")]
pub mod browser;

pub use dispatcher::{can_submit, parse_product_list, validate_query, Dispatcher};
pub use error::DispatchError;
pub use transport::{csrf_token_from_cookies, RawResponse, Transport, TransportError};

#[cfg(feature = "web-client")]
pub use browser::BrowserTransport;
