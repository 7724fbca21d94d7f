// lib.rs - Root module for the wb_dashboard library
//
// The same crate builds the actix server (`ssr`) and the WASM bundle
// (`hydrate`); model, transform and api compile without either feature so
// the integration tests can run natively.

pub mod web_app;

/// WASM entry point, called by the script cargo-leptos injects
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;
    use web_app::config::ApiConfig;
    use web_app::App;

    console_error_panic_hook::set_once();
    let api_config = ApiConfig::from_document();
    leptos::mount::hydrate_body(move || {
        provide_context(api_config);
        view! { <App /> }
    });
}
