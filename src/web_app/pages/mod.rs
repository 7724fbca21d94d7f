// web_app/pages/mod.rs - Page components module
//
// - DashboardPage: scrape trigger, product table and charts. Mounted twice by
//   the router, once per ScrapeMode.

pub mod dashboard;

// Re-export page components
pub use dashboard::DashboardPage;
