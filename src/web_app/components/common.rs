// web_app/components/common.rs - Reusable UI components
//
// These are small, composable components used throughout the application.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;
use rust_decimal::Decimal;

use crate::web_app::transform::{format_price, format_rating};

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Inline error banner with a dismiss button
#[component]
pub fn ErrorBanner(
    /// The error message to display
    error: String,
    /// Called when the user closes the banner
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-4 flex items-start gap-4" role="alert">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <p class="flex-1 text-red-700 text-sm pt-2">{error}</p>
            <button
                type="button"
                class="text-red-400 hover:text-red-600 hover:bg-red-100 rounded-full p-2 transition-colors"
                title="Dismiss"
                on:click=move |_| on_dismiss.run(())
            >
                "✕"
            </button>
        </div>
    }
}

/// Ruble price cell
///
/// Shows a dash when there is no price.
#[component]
pub fn RubPrice(
    /// The amount to display
    amount: Option<Decimal>,
    /// Whether to highlight (green, bolder)
    #[prop(default = false)]
    highlight: bool,
) -> impl IntoView {
    let class = if highlight {
        "font-bold text-green-600 whitespace-nowrap"
    } else {
        "text-gray-900 font-medium whitespace-nowrap"
    };

    view! {
        <span class=class>
            {format_price(amount)}
        </span>
    }
}

/// Compact rating cell: a single star plus the numeric value
#[component]
pub fn RatingCell(rating: Option<f64>) -> impl IntoView {
    let text = format_rating(rating);
    let title = format!("Rating: {}", text);
    let rated = matches!(rating, Some(r) if r > 0.0);

    view! {
        <span class="inline-flex items-center gap-1" title=title>
            <Show when=move || rated>
                <span class="text-yellow-400">"★"</span>
            </Show>
            <span class="font-medium text-gray-700">{text}</span>
        </span>
    }
}
