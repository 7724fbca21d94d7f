// web_app/api/browser.rs - Fetch-backed transport for the WASM client
//
// Only ever invoked from event handlers and effects, which run in the
// browser. The server build compiles it but never calls it.

use gloo_net::http::{Request, Response};
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, RequestCredentials};

use super::transport::{RawResponse, Transport, TransportError};

/// `fetch` with `credentials: include`, cookies read from `document.cookie`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

async fn read_response(response: Response) -> RawResponse {
    let status = response.status();
    // A body that cannot be read is treated as empty; the status still counts
    let body = response.text().await.unwrap_or_default();
    RawResponse { status, body }
}

impl Transport for BrowserTransport {
    async fn get(
        &self,
        url: &str,
        params: &[(&'static str, String)],
    ) -> Result<RawResponse, TransportError> {
        let request = Request::get(url)
            .query(params.iter().map(|(k, v)| (*k, v.as_str())))
            .credentials(RequestCredentials::Include)
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::NoResponse(e.to_string()))?;
        Ok(read_response(response).await)
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
        headers: &[(&'static str, String)],
    ) -> Result<RawResponse, TransportError> {
        let mut builder = Request::post(url).credentials(RequestCredentials::Include);
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        let request = builder
            .json(body)
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::NoResponse(e.to_string()))?;
        Ok(read_response(response).await)
    }

    fn cookies(&self) -> String {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
            .and_then(|d| d.cookie().ok())
            .unwrap_or_default()
    }
}
