// web_app/api/dispatcher.rs - Request flow to the external scrape API
//
// One method per user action. Each call issues its requests sequentially and
// returns; there is no retry, de-duplication or cancellation. Callers own the
// loading flag and decide what to do with the returned list.

use serde_json::json;

use super::error::DispatchError;
use super::transport::{csrf_token_from_cookies, RawResponse, Transport};
use crate::web_app::config::ApiConfig;
use crate::web_app::model::{ProductFilters, ProductRecord, ScrapeMode};

pub const CSRF_PATH: &str = "/csrf/";
pub const HEALTH_PATH: &str = "/health/";
pub const SEARCH_PATH: &str = "/products/search/";
pub const PRODUCTS_PATH: &str = "/products/";

/// Header echoing the `csrftoken` cookie on mutating requests
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Reject blank queries before anything touches the network.
pub fn validate_query(query: &str) -> Result<(), DispatchError> {
    if query.trim().is_empty() {
        return Err(DispatchError::Validation);
    }
    Ok(())
}

/// Whether the submit control should be enabled.
pub fn can_submit(query: &str, loading: bool) -> bool {
    !query.is_empty() && !loading
}

/// Parse a success body that must be a JSON array of products.
pub fn parse_product_list(body: &str) -> Result<Vec<ProductRecord>, DispatchError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| DispatchError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    if !value.is_array() {
        return Err(DispatchError::MalformedResponse(
            "expected a list of products".to_string(),
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| DispatchError::MalformedResponse(format!("bad product record: {}", e)))
}

fn ensure_success(response: RawResponse) -> Result<RawResponse, DispatchError> {
    if response.is_success() {
        Ok(response)
    } else {
        let err = DispatchError::from_response(&response);
        tracing::warn!("API returned {}: {}", response.status, err);
        Err(err)
    }
}

/// Issues the dashboard's requests through a [`Transport`]
pub struct Dispatcher<T> {
    transport: T,
    config: ApiConfig,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self { transport, config }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Ask the API to set the anti-forgery cookie.
    pub async fn prime_csrf(&self) -> Result<(), DispatchError> {
        let url = self.config.endpoint(CSRF_PATH);
        tracing::debug!("Priming CSRF cookie via {}", url);
        let response = self.transport.get(&url, &[]).await?;
        ensure_success(response).map(|_| ())
    }

    /// Liveness probe consulted before every scrape.
    pub async fn health(&self) -> Result<(), DispatchError> {
        let url = self.config.endpoint(HEALTH_PATH);
        let response = self.transport.get(&url, &[]).await?;
        ensure_success(response).map(|_| ())
    }

    /// Trigger a server-side scrape for `query` and return the new product list.
    ///
    /// Blank queries fail with [`DispatchError::Validation`] without any
    /// network traffic.
    pub async fn trigger_scrape(
        &self,
        query: &str,
        mode: ScrapeMode,
    ) -> Result<Vec<ProductRecord>, DispatchError> {
        if let Err(e) = validate_query(query) {
            tracing::warn!("Rejected blank scrape query");
            return Err(e);
        }

        self.health().await?;

        let token = csrf_token_from_cookies(&self.transport.cookies())
            .unwrap_or_default()
            .to_string();
        let headers = [
            (CSRF_HEADER, token),
            ("Content-Type", "application/json".to_string()),
        ];
        let body = json!({ "query": query });

        tracing::info!("Scrape request: query='{}', mode={:?}", query, mode);
        let response = self
            .transport
            .post_json(&self.config.endpoint(SEARCH_PATH), &body, &headers)
            .await?;
        let response = ensure_success(response)?;

        let products = match mode {
            ScrapeMode::ResponseBody => parse_product_list(&response.body)?,
            ScrapeMode::ReloadListing => {
                self.refresh_list(&ProductFilters::for_query(query)).await?
            }
        };

        tracing::info!("Scrape finished: {} products", products.len());
        Ok(products)
    }

    /// Read stored products, filtered by `filters`.
    pub async fn refresh_list(
        &self,
        filters: &ProductFilters,
    ) -> Result<Vec<ProductRecord>, DispatchError> {
        let params = filters.to_query_pairs();
        tracing::info!("Listing request: filters={:?}", params);

        let response = self
            .transport
            .get(&self.config.endpoint(PRODUCTS_PATH), &params)
            .await?;
        let response = ensure_success(response)?;
        parse_product_list(&response.body)
    }
}
