// web_app/components/product.rs - Product display components
//
// - ProductTable: sortable table of scraped products
// - SortableHeader: clickable column header with direction arrow
// - ProductRow: one table row

use leptos::prelude::*;
use rust_decimal::Decimal;

use super::common::{RatingCell, RubPrice};
use crate::web_app::model::{ProductRecord, SortKey, SortState};
use crate::web_app::transform::sort_indicator;

/// Clickable column header
///
/// Clicking the active column flips the direction; any other column
/// becomes the active one, ascending.
#[component]
pub fn SortableHeader(
    column: SortKey,
    sort: RwSignal<SortState>,
) -> impl IntoView {
    view! {
        <th
            class="px-4 py-3 text-left text-xs font-semibold text-gray-600 uppercase tracking-wider \
                   cursor-pointer select-none hover:bg-gray-100 transition-colors"
            on:click=move |_| sort.update(|s| *s = s.toggled(column))
        >
            {column.label()}
            " "
            <span class="text-purple-600">{move || sort_indicator(&sort.get(), column)}</span>
        </th>
    }
}

/// One product row
#[component]
pub fn ProductRow(product: ProductRecord) -> impl IntoView {
    let title = product
        .created_at
        .map(|ts| format!("Added {}", ts.format("%Y-%m-%d %H:%M")))
        .unwrap_or_default();
    // Inverted discounts still render, just without the highlight
    let discount_highlight = !product.has_inverted_discount();

    view! {
        <tr class="border-t border-gray-100 hover:bg-purple-50/40 transition-colors" title=title>
            <td class="px-4 py-3">
                <a
                    href=product.url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-purple-700 hover:underline font-medium"
                >
                    {product.name.clone()}
                </a>
            </td>
            <td class="px-4 py-3">
                <RubPrice amount=Some(product.price) />
            </td>
            <td class="px-4 py-3">
                <RubPrice amount=product.discounted_price highlight=discount_highlight />
            </td>
            <td class="px-4 py-3">
                <RatingCell rating=product.rating />
            </td>
            <td class="px-4 py-3 text-gray-700">{product.reviews_count}</td>
        </tr>
    }
}

/// Key for one table row
///
/// Covers every displayed field, not just `id`: a re-scrape keeps ids but
/// changes prices, and `For` only rebuilds rows whose key changed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RowKey {
    id: i64,
    name: String,
    url: String,
    price: Decimal,
    discounted_price: Option<Decimal>,
    rating_bits: Option<u64>,
    reviews_count: u32,
}

pub fn row_key(product: &ProductRecord) -> RowKey {
    RowKey {
        id: product.id,
        name: product.name.clone(),
        url: product.url.clone(),
        price: product.price,
        discounted_price: product.discounted_price,
        rating_bits: product.rating.map(f64::to_bits),
        reviews_count: product.reviews_count,
    }
}

/// Sortable product table
#[component]
pub fn ProductTable(
    /// Products in display order
    products: Signal<Vec<ProductRecord>>,
    /// Shared sort state, mutated by the headers
    sort: RwSignal<SortState>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto bg-white rounded-2xl shadow-sm border border-gray-100">
            <table class="min-w-full text-sm">
                <thead class="bg-gray-50">
                    <tr>
                        <SortableHeader column=SortKey::Name sort=sort />
                        <SortableHeader column=SortKey::Price sort=sort />
                        <th class="px-4 py-3 text-left text-xs font-semibold text-gray-600 uppercase tracking-wider">
                            "Discounted price"
                        </th>
                        <SortableHeader column=SortKey::Rating sort=sort />
                        <SortableHeader column=SortKey::ReviewsCount sort=sort />
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || products.get()
                        key=row_key
                        children=move |product| view! { <ProductRow product=product /> }
                    />
                </tbody>
            </table>
        </div>
    }
}
