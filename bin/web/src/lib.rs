//! shiny-leptos web front end.
//!
//! This crate provides the Leptos UI for the shiny-leptos template. Built
//! with the `csr` feature it compiles to a wasm bundle that a Shiny app (or
//! the bundled dev server, built with `serve`) loads from `/static`.

#![allow(non_snake_case)]

pub mod app;
pub mod components;
pub mod pages;
pub mod routing;
pub mod shell;

#[cfg(feature = "serve")]
pub mod config;

#[cfg(feature = "csr")]
pub mod shiny;

#[cfg(feature = "csr")]
static HOST_BRIDGE: shiny_leptos_bridge::BridgeCell = shiny_leptos_bridge::BridgeCell::new();

/// Resolves the host bridge and mounts the app into `#app`.
///
/// Falls back to `<body>` when the page has no mount element.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    use crate::app::App;
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();
    // tracing's `log` feature forwards records here in the browser.
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already set: {e}");
    }

    let bridge = HOST_BRIDGE.get_or_resolve(shiny::resolve_shiny);
    tracing::info!(state = %bridge.state(), "Host bridge resolved");

    let parent = document()
        .get_element_by_id(shell::MOUNT_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match parent {
        Some(parent) => leptos::mount::mount_to(parent, move || view! { <App bridge=bridge/> }).forget(),
        None => leptos::mount::mount_to_body(move || view! { <App bridge=bridge/> }),
    }
}
