// tests/app_logic_tests.rs - Server-side pieces of the web app
//
// Components need a reactive runtime to render, so these tests stick to
// what the views are built from: API configuration, chart rendering, row
// keys and cell formatting.

use rust_decimal::Decimal;
use wb_dashboard::web_app::components::{
    clamp_to_axes, parse_optional, render_discount_rating, render_price_histogram, row_key,
};
use wb_dashboard::web_app::config::{ApiConfig, API_URL_ENV, DEFAULT_API_URL};
use wb_dashboard::web_app::model::ScatterPoint;
use wb_dashboard::web_app::transform::{
    bucket_by_price, discount_vs_rating, format_price, format_rating, format_rub,
};

mod common;

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_from_env() {
    // Single test touching the variable, so no cross-test races
    std::env::set_var(API_URL_ENV, "https://scraper.example.com/api/");
    let config = ApiConfig::from_env().unwrap();
    assert_eq!(config.base_url, "https://scraper.example.com/api");
    assert_eq!(
        config.endpoint("/products/search/"),
        "https://scraper.example.com/api/products/search/"
    );

    std::env::set_var(API_URL_ENV, "ftp://nope");
    assert!(ApiConfig::from_env().is_err());

    std::env::set_var(API_URL_ENV, "");
    assert_eq!(ApiConfig::from_env().unwrap(), ApiConfig::default());
    std::env::remove_var(API_URL_ENV);
}

#[test]
fn test_default_points_at_local_backend() {
    assert_eq!(ApiConfig::new(DEFAULT_API_URL).endpoint("health/"), "http://127.0.0.1:8000/api/health/");
}

// ============================================================================
// Charts
// ============================================================================

#[test]
fn test_histogram_chart_from_products() {
    let records = vec![
        common::product(1, "a", 500),
        common::product(2, "b", 800),
        common::product(3, "c", 25_000),
    ];
    let svg = render_price_histogram(&bucket_by_price(&records)).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("</svg>"));
}

#[test]
fn test_scatter_chart_skips_incomplete_records() {
    let records = vec![
        common::full_product(1, 2000, 1500, 4.5, 10),
        common::full_product(2, 2000, 0, 4.5, 10),
        common::product(3, "plain", 900),
    ];
    let svg = render_discount_rating(&discount_vs_rating(&records)).unwrap();
    assert_eq!(svg.matches("<circle").count(), 1);
}

#[test]
fn test_scatter_points_clamped_to_axes() {
    assert_eq!(clamp_to_axes(&ScatterPoint { x: 50.0, y: 2.5 }), (50.0, 2.5));
    assert_eq!(clamp_to_axes(&ScatterPoint { x: 120.0, y: -1.0 }), (100.0, 0.0));
}

// ============================================================================
// Table rows
// ============================================================================

#[test]
fn test_rescraped_row_gets_new_key() {
    let first = common::full_product(1, 2000, 1500, 4.5, 10);
    let mut rescraped = first.clone();
    rescraped.discounted_price = Some(Decimal::from(1400));
    assert_eq!(first.id, rescraped.id);
    assert_ne!(row_key(&first), row_key(&rescraped));
}

// ============================================================================
// Cell formatting and filter input
// ============================================================================

#[test]
fn test_rub_formatting() {
    assert_eq!(format_rub(Decimal::from(1_234_567)), "1 234 567 ₽");
    assert_eq!(format_rub(Decimal::new(349_000, 2)), "3 490 ₽");
    assert_eq!(format_rub(Decimal::new(18_995, 1)), "1 899,5 ₽");
    assert_eq!(format_rub(Decimal::ZERO), "0 ₽");
}

#[test]
fn test_price_cell_text() {
    assert_eq!(format_price(None), "-");
    assert_eq!(format_price(Some(Decimal::new(18_995, 1))), "1 899,5 ₽");
}

#[test]
fn test_meta_tag_config_reaches_client() {
    let config = ApiConfig::from_meta_content(Some("https://scraper.example.com/api"));
    assert_eq!(config.endpoint("/products/"), "https://scraper.example.com/api/products/");
}

#[test]
fn test_rating_formatting() {
    assert_eq!(format_rating(Some(4.0)), "4.0");
    assert_eq!(format_rating(None), "-");
    assert_eq!(format_rating(Some(0.0)), "-");
}

#[test]
fn test_filter_input_parsing() {
    assert_eq!(parse_optional::<Decimal>("2500").unwrap(), Some(Decimal::from(2500)));
    assert_eq!(parse_optional::<f64>("").unwrap(), None);
}
