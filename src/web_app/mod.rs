// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Product records and view-state types (client and server)
// - transform/: Pure sorting, bucketing and formatting (client and server)
// - config.rs: Where the external scrape API lives
// - api/: Request flow against the scrape API, behind a Transport trait
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod api;
pub mod config;
pub mod model;
pub mod transform;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
