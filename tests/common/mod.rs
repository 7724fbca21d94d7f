// common/mod.rs - Shared fixtures for the integration tests
//
// Builders for product records shaped like what the scrape API returns.

#![allow(dead_code)]

use rust_decimal::Decimal;
use wb_dashboard::web_app::model::ProductRecord;

/// Product with a list price only
pub fn product(id: i64, name: &str, price: i64) -> ProductRecord {
    ProductRecord {
        id,
        wb_id: Some(100_000 + id),
        name: name.to_string(),
        price: Decimal::from(price),
        discounted_price: None,
        rating: None,
        reviews_count: 0,
        url: format!("https://www.wildberries.ru/catalog/{}/detail.aspx", 100_000 + id),
        query: Some("test".to_string()),
        created_at: None,
    }
}

/// Product with discount, rating and review count filled in
pub fn full_product(
    id: i64,
    price: i64,
    discounted: i64,
    rating: f64,
    reviews_count: u32,
) -> ProductRecord {
    ProductRecord {
        discounted_price: Some(Decimal::from(discounted)),
        rating: Some(rating),
        reviews_count,
        ..product(id, &format!("Product {id}"), price)
    }
}

/// JSON body the API sends for a list of products
pub fn products_json(products: &[ProductRecord]) -> String {
    serde_json::to_string(products).expect("serialize products")
}
