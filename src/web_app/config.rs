// web_app/config.rs - Location of the external scrape API
//
// The server binary reads `WB_API_URL` at startup (environment or `.env`),
// provides it to the view tree through Leptos context and writes it into a
// `<meta name="wb-api-url">` tag in the page shell. The WASM client reads
// that tag when it hydrates; the compile-time value is only the fallback.

use serde::{Deserialize, Serialize};

/// Used when `WB_API_URL` is not set
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

/// Environment variable holding the API base URL
pub const API_URL_ENV: &str = "WB_API_URL";

/// `name` of the shell meta tag carrying the base URL to the client
pub const API_URL_META: &str = "wb-api-url";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL without a trailing slash
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("WB_API_URL").unwrap_or(DEFAULT_API_URL))
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Validate and build a config from user-supplied text.
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let trimmed = raw.trim();
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            anyhow::bail!("API URL must start with http:// or https://, got '{}'", trimmed);
        }
        Ok(Self::new(trimmed))
    }

    /// Read `WB_API_URL` (after loading `.env`), falling back to the default.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> anyhow::Result<Self> {
        use anyhow::Context;
        use std::env;

        dotenv::dotenv().ok();
        match env::var(API_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => {
                Self::parse(&value).with_context(|| format!("invalid {}", API_URL_ENV))
            }
            Ok(_) | Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(e).with_context(|| format!("could not read {}", API_URL_ENV)),
        }
    }

    /// Config from the shell meta tag's `content`; a missing or invalid
    /// value falls back to the default.
    pub fn from_meta_content(content: Option<&str>) -> Self {
        match content.map(Self::parse) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                tracing::warn!("Ignoring {} meta tag: {}", API_URL_META, e);
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// Read the meta tag the server rendered into the page.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        let selector = format!("meta[name='{}']", API_URL_META);
        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&selector).ok().flatten())
            .and_then(|el| el.get_attribute("content"));
        Self::from_meta_content(content.as_deref())
    }

    /// Absolute URL for an API path such as `/products/search/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
