// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the application.
//
// Structure:
// - common.rs: Reusable atomic components (Loading, ErrorBanner, price/rating cells)
// - search.rs: Query input and catalog filters
// - product.rs: Sortable product table
// - chart.rs: Price histogram and discount-vs-rating scatter plot

pub mod chart;
pub mod common;
pub mod product;
pub mod search;

// Re-export commonly used components for convenience
pub use chart::*;
pub use common::*;
pub use product::*;
pub use search::*;
