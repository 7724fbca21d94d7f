// web_app/components/search.rs - Query input and listing filters
//
// - SearchBar: query input with the scrape button
// - FilterPanel: price / rating / review filters for the saved catalog
// - NumberFilter: one optional numeric input

use std::str::FromStr;

use leptos::prelude::*;
use rust_decimal::Decimal;

use crate::web_app::api::can_submit;
use crate::web_app::model::ProductFilters;

/// Search bar component with input and submit button
///
/// The button is disabled while the query is empty or a request is in flight.
#[component]
pub fn SearchBar(
    /// Current search query
    query: RwSignal<String>,
    /// Whether a request is outstanding
    loading: Signal<bool>,
    /// Callback when the form is submitted
    on_submit: Callback<()>,
    /// Button label while idle
    #[prop(default = "Load products")]
    button_label: &'static str,
) -> impl IntoView {
    let on_form_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if can_submit(&query.get_untracked(), loading.get_untracked()) {
            on_submit.run(());
        }
    };

    view! {
        <form on:submit=on_form_submit class="w-full">
            <div class="flex gap-4">
                <div class="relative flex-1">
                    <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                        <span class="text-gray-400">"🔍"</span>
                    </div>
                    <input
                        type="text"
                        placeholder="Enter a search query"
                        class="w-full pl-10 pr-4 py-3 border-2 border-gray-200 rounded-xl \
                               focus:ring-4 focus:ring-purple-100 focus:border-purple-500 \
                               outline-none transition-all text-lg"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </div>
                <button
                    type="submit"
                    class="px-8 py-3 bg-purple-600 text-white rounded-xl hover:bg-purple-700 \
                           transition-colors disabled:bg-gray-400 disabled:cursor-not-allowed \
                           font-bold shadow-sm active:scale-95"
                    disabled=move || !can_submit(&query.get(), loading.get())
                >
                    {move || if loading.get() { "Loading..." } else { button_label }}
                </button>
            </div>
        </form>
    }
}

/// Parse an optional numeric input; empty text clears the filter.
pub fn parse_optional<T: FromStr>(raw: &str) -> Result<Option<T>, T::Err> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.replace(',', ".").parse::<T>().map(Some)
}

/// Labeled numeric input; commits its text on blur
#[component]
fn NumberFilter(
    label: &'static str,
    placeholder: &'static str,
    /// Starting text
    initial: String,
    /// Receives the raw text when the input loses focus
    on_commit: Callback<String>,
) -> impl IntoView {
    // Local text so half-typed values don't clobber the filter
    let local = RwSignal::new(initial);

    view! {
        <label class="flex flex-col gap-1 text-sm">
            <span class="font-semibold text-gray-600 uppercase tracking-wide text-xs">{label}</span>
            <input
                type="text"
                inputmode="decimal"
                placeholder=placeholder
                class="px-3 py-1.5 border border-gray-200 rounded-lg text-sm focus:ring-2 focus:ring-purple-200 outline-none"
                prop:value=move || local.get()
                on:input=move |ev| local.set(event_target_value(&ev))
                on:blur=move |_| on_commit.run(local.get_untracked())
            />
        </label>
    }
}

fn initial_text<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Complete filter panel for the saved catalog
///
/// Unparseable input keeps the previous filter value.
#[component]
pub fn FilterPanel(
    /// Filters sent with the listing request
    filters: RwSignal<ProductFilters>,
    /// Re-query the listing
    on_apply: Callback<()>,
    /// Whether a request is outstanding
    loading: Signal<bool>,
) -> impl IntoView {
    let current = filters.get_untracked();

    let set_min_price = Callback::new(move |raw: String| {
        if let Ok(v) = parse_optional::<Decimal>(&raw) {
            filters.update(|f| f.min_price = v);
        }
    });
    let set_max_price = Callback::new(move |raw: String| {
        if let Ok(v) = parse_optional::<Decimal>(&raw) {
            filters.update(|f| f.max_price = v);
        }
    });
    let set_min_rating = Callback::new(move |raw: String| {
        if let Ok(v) = parse_optional::<f64>(&raw) {
            filters.update(|f| f.min_rating = v);
        }
    });
    let set_min_reviews = Callback::new(move |raw: String| {
        if let Ok(v) = parse_optional::<u32>(&raw) {
            filters.update(|f| f.min_reviews = v);
        }
    });

    view! {
        <div class="bg-gray-50 p-4 rounded-xl border border-gray-100 mt-4">
            <div class="grid grid-cols-2 md:grid-cols-5 gap-4 items-end">
                <NumberFilter
                    label="Min price, ₽"
                    placeholder="0"
                    initial=initial_text(current.min_price)
                    on_commit=set_min_price
                />
                <NumberFilter
                    label="Max price, ₽"
                    placeholder="∞"
                    initial=initial_text(current.max_price)
                    on_commit=set_max_price
                />
                <NumberFilter
                    label="Min rating"
                    placeholder="0-5"
                    initial=initial_text(current.min_rating)
                    on_commit=set_min_rating
                />
                <NumberFilter
                    label="Min reviews"
                    placeholder="0"
                    initial=initial_text(current.min_reviews)
                    on_commit=set_min_reviews
                />
                <button
                    type="button"
                    class="px-4 py-2 bg-white text-gray-700 rounded-lg hover:bg-gray-100 \
                           border border-gray-300 disabled:opacity-50 font-medium shadow-sm"
                    disabled=move || loading.get()
                    on:click=move |_| on_apply.run(())
                >
                    "Apply filters"
                </button>
            </div>
        </div>
    }
}
