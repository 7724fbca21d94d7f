// web_app/model/mod.rs - Shared data models for client and server
//
// These structs describe what the external scrape API returns and the
// small pieces of view state (sorting, filters, chart aggregates) that the
// dashboard derives from it.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Product as returned by the listing and scrape endpoints
///
/// Decimal columns arrive either as JSON numbers or as decimal strings
/// (`"1234.00"`); `rust_decimal` accepts both.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: i64,
    #[serde(default)]
    pub wb_id: Option<i64>,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub discounted_price: Option<Decimal>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews_count: u32,
    pub url: String,
    /// Search text the record was scraped for
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<chrono::NaiveDateTime>,
}

impl ProductRecord {
    /// True when the record breaks the `discounted_price <= price` rule.
    pub fn has_inverted_discount(&self) -> bool {
        matches!(self.discounted_price, Some(d) if d > self.price)
    }
}

/// Accepts RFC 3339 timestamps (with any offset) and naive ISO timestamps.
/// Anything unparseable becomes `None` instead of failing the whole list.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<chrono::NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        chrono::DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.naive_utc())
            .or_else(|_| s.parse::<chrono::NaiveDateTime>())
            .ok()
    }))
}

/// Sortable table column
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Price,
    Rating,
    ReviewsCount,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Name,
        SortKey::Price,
        SortKey::Rating,
        SortKey::ReviewsCount,
    ];

    /// Column header text
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Price => "Price",
            SortKey::Rating => "Rating",
            SortKey::ReviewsCount => "Reviews",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Name => write!(f, "name"),
            SortKey::Price => write!(f, "price"),
            SortKey::Rating => write!(f, "rating"),
            SortKey::ReviewsCount => write!(f, "reviews_count"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// Current table ordering. `key == None` means unsorted (API order).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }

    /// State after a click on `key`'s header.
    ///
    /// Same column flips the direction; a different column starts ascending.
    pub fn toggled(self, key: SortKey) -> Self {
        let direction = if self.key == Some(key) {
            self.direction.flipped()
        } else {
            SortDirection::Ascending
        };
        Self::new(key, direction)
    }

    pub fn is_sorted_by(&self, key: SortKey) -> bool {
        self.key == Some(key)
    }
}

/// How the product list is refreshed after a successful scrape
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrapeMode {
    /// The scrape response body is the new product list
    #[default]
    ResponseBody,
    /// Ignore the scrape body and re-query the listing endpoint
    ReloadListing,
}

impl std::fmt::Display for ScrapeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScrapeMode::ResponseBody => write!(f, "Live scrape"),
            ScrapeMode::ReloadListing => write!(f, "Saved catalog"),
        }
    }
}

/// Listing filters understood by `GET /products/`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFilters {
    pub query: String,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_rating: Option<f64>,
    pub min_reviews: Option<u32>,
}

impl ProductFilters {
    pub fn for_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Query-string pairs for the set fields only.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.query.trim().is_empty() {
            pairs.push(("query", self.query.clone()));
        }
        if let Some(v) = self.min_price {
            pairs.push(("min_price", v.to_string()));
        }
        if let Some(v) = self.max_price {
            pairs.push(("max_price", v.to_string()));
        }
        if let Some(v) = self.min_rating {
            pairs.push(("min_rating", v.to_string()));
        }
        if let Some(v) = self.min_reviews {
            pairs.push(("min_reviews", v.to_string()));
        }
        pairs
    }
}

/// Fixed histogram bucket over the effective price
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceRange {
    UpTo1000,
    UpTo5000,
    UpTo10000,
    UpTo20000,
    Above20000,
}

impl PriceRange {
    pub const ALL: [PriceRange; 5] = [
        PriceRange::UpTo1000,
        PriceRange::UpTo5000,
        PriceRange::UpTo10000,
        PriceRange::UpTo20000,
        PriceRange::Above20000,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PriceRange::UpTo1000 => "0-1000",
            PriceRange::UpTo5000 => "1001-5000",
            PriceRange::UpTo10000 => "5001-10000",
            PriceRange::UpTo20000 => "10001-20000",
            PriceRange::Above20000 => "20001+",
        }
    }

    /// Inclusive upper bound, `None` for the open-ended bucket.
    pub fn upper_bound(self) -> Option<Decimal> {
        match self {
            PriceRange::UpTo1000 => Some(Decimal::from(1_000)),
            PriceRange::UpTo5000 => Some(Decimal::from(5_000)),
            PriceRange::UpTo10000 => Some(Decimal::from(10_000)),
            PriceRange::UpTo20000 => Some(Decimal::from(20_000)),
            PriceRange::Above20000 => None,
        }
    }
}

/// Price histogram bucket
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceBucket {
    pub range: PriceRange,
    pub count: usize,
}

/// Ordered bucket counts, always one entry per `PriceRange`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceHistogram {
    pub buckets: Vec<PriceBucket>,
}

impl Default for PriceHistogram {
    fn default() -> Self {
        Self {
            buckets: PriceRange::ALL
                .into_iter()
                .map(|range| PriceBucket { range, count: 0 })
                .collect(),
        }
    }
}

impl PriceHistogram {
    pub fn count(&self, range: PriceRange) -> usize {
        self.buckets
            .iter()
            .find(|b| b.range == range)
            .map(|b| b.count)
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }

    pub fn max_count(&self) -> usize {
        self.buckets.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

/// One point of the discount-vs-rating scatter plot
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    /// Discount, percent of the list price
    pub x: f64,
    /// Rating, 0-5
    pub y: f64,
}
