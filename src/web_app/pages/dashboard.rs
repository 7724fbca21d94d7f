// web_app/pages/dashboard.rs - Dashboard page component
//
// The one page of the app. It owns all view state (query, product list,
// sort, loading and error flags) as signals; table rows and chart data are
// derived from those signals on every change.
//
// `mode` decides where the product list comes from after a scrape: the
// scrape response itself, or a fresh read of the saved catalog.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::api::{validate_query, BrowserTransport, Dispatcher};
use crate::web_app::components::*;
use crate::web_app::config::ApiConfig;
use crate::web_app::model::*;
use crate::web_app::transform::{bucket_by_price, discount_vs_rating, sort_products};

/// Main dashboard page component
///
/// Orchestrates:
/// - Search bar and scrape trigger
/// - Catalog filters (saved catalog mode only)
/// - Sortable product table
/// - Price histogram and discount-vs-rating charts
#[component]
pub fn DashboardPage(
    /// Where the product list comes from after a scrape
    #[prop(default = ScrapeMode::ResponseBody)]
    mode: ScrapeMode,
) -> impl IntoView {
    let config = StoredValue::new(use_context::<ApiConfig>().unwrap_or_default());

    // View state
    let query = RwSignal::new(String::new());
    let products = RwSignal::new(Vec::<ProductRecord>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let sort = RwSignal::new(SortState::default());
    let filters = RwSignal::new(ProductFilters::default());

    // Derived data, recomputed from the product list
    let sorted = Signal::derive(move || products.with(|list| sort_products(list, &sort.get())));
    let histogram = Signal::derive(move || products.with(|list| bucket_by_price(list)));
    let scatter = Signal::derive(move || products.with(|list| discount_vs_rating(list)));
    let product_count = Signal::derive(move || products.with(Vec::len));
    let is_loading = Signal::from(loading);

    // Runs once in the browser: get the anti-forgery cookie, and load the
    // saved catalog when that's what this page shows
    Effect::new(move || {
        spawn_local(async move {
            let dispatcher = Dispatcher::new(BrowserTransport, config.get_value());
            if let Err(e) = dispatcher.prime_csrf().await {
                tracing::error!("Failed to prime CSRF cookie: {}", e);
            }

            if mode == ScrapeMode::ReloadListing {
                loading.set(true);
                match dispatcher.refresh_list(&filters.get_untracked()).await {
                    Ok(list) => products.set(list),
                    Err(e) => error.set(Some(e.to_string())),
                }
                loading.set(false);
            }
        });
    });

    let on_scrape = Callback::new(move |()| {
        let q = query.get_untracked();
        if let Err(e) = validate_query(&q) {
            error.set(Some(e.to_string()));
            return;
        }

        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let dispatcher = Dispatcher::new(BrowserTransport, config.get_value());
            match dispatcher.trigger_scrape(&q, mode).await {
                Ok(list) => {
                    // Keep listing filters in sync with what was scraped
                    filters.update(|f| f.query = q);
                    products.set(list);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    });

    let on_apply_filters = Callback::new(move |()| {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let dispatcher = Dispatcher::new(BrowserTransport, config.get_value());
            match dispatcher.refresh_list(&filters.get_untracked()).await {
                Ok(list) => products.set(list),
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    });

    let on_dismiss_error = Callback::new(move |()| error.set(None));

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            // Header
            <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                    <div class="flex items-center gap-2">
                        <span class="text-2xl">"🛍"</span>
                        <h1 class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-purple-600 to-pink-600">
                            "Wildberries Parser"
                        </h1>
                    </div>
                    <nav class="flex gap-4 text-sm font-medium">
                        <a href="/" class="text-gray-600 hover:text-purple-700">{ScrapeMode::ResponseBody.to_string()}</a>
                        <a href="/catalog" class="text-gray-600 hover:text-purple-700">{ScrapeMode::ReloadListing.to_string()}</a>
                    </nav>
                </div>
            </header>

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-8">
                // Search section
                <section class="bg-white rounded-2xl shadow-sm p-6 border border-gray-100">
                    <SearchBar
                        query=query
                        loading=is_loading
                        on_submit=on_scrape
                    />
                    <Show when=move || mode == ScrapeMode::ReloadListing>
                        <FilterPanel
                            filters=filters
                            on_apply=on_apply_filters
                            loading=is_loading
                        />
                    </Show>
                </section>

                {move || error.get().map(|message| view! {
                    <ErrorBanner error=message on_dismiss=on_dismiss_error />
                })}

                <Show when=move || loading.get()>
                    <Loading message="Loading data..." />
                </Show>

                <Show when=move || { product_count.get() > 0 }>
                    <section class="space-y-4">
                        <h2 class="text-lg font-bold text-gray-800">
                            {move || format!("Products found: {}", product_count.get())}
                        </h2>
                        <ProductTable products=sorted sort=sort />
                    </section>

                    <section class="space-y-4">
                        <h2 class="text-lg font-bold text-gray-800">"Product analytics"</h2>
                        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                            <PriceHistogramChart histogram=histogram />
                            <DiscountRatingChart points=scatter />
                        </div>
                    </section>
                </Show>
            </main>

            // Footer
            <footer class="bg-white border-t border-gray-200 mt-12 py-8">
                <div class="max-w-7xl mx-auto px-4 text-center text-gray-500 text-sm">
                    <p>{format!("Wildberries Parser © {}", chrono::Utc::now().format("%Y"))}</p>
                </div>
            </footer>
        </div>
    }
}
