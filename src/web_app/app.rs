// web_app/app.rs - Root application component
//
// Sets up meta tags, routing and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::model::ScrapeMode;
use crate::web_app::pages::DashboardPage;

/// Root application component
///
/// Routes:
/// - `/`: list comes straight from the scrape response
/// - `/catalog`: list is re-read from the saved catalog, with filters
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        <Title text="Wildberries Parser" />
        <Meta name="description" content="Scrape Wildberries search results and explore prices, discounts and ratings" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/wb_dashboard.css" />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route
                    path=path!("/")
                    view=|| view! { <DashboardPage mode=ScrapeMode::ResponseBody /> }
                />
                <Route
                    path=path!("/catalog")
                    view=|| view! { <DashboardPage mode=ScrapeMode::ReloadListing /> }
                />
            </Routes>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-purple-600 text-white rounded-lg hover:bg-purple-700 transition-colors"
                >
                    "Back to the dashboard"
                </a>
            </div>
        </div>
    }
}
