//! Main Leptos application component and routing.

use crate::pages::{HomePage, RouteExamplePage};
use crate::routing::{AppRoute, use_hash_route};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use shiny_leptos_bridge::Bridge;

/// The main application component.
///
/// `bridge` is resolved once before mounting and shared with every page
/// through context. Omitting it runs the app standalone.
#[component]
pub fn App(#[prop(optional)] bridge: Bridge) -> impl IntoView {
    provide_meta_context();
    provide_context(bridge);

    let route = use_hash_route();

    view! {
        <Title text="Shiny/Leptos Template"/>
        <main>
            {move || {
                route.get().map(|route| match route {
                    AppRoute::Home => view! { <HomePage/> }.into_any(),
                    AppRoute::UrlRoute => view! { <RouteExamplePage/> }.into_any(),
                })
            }}
        </main>
    }
}

/// The bridge provided by [`App`], or a disconnected one outside it.
pub fn use_bridge() -> Bridge {
    use_context::<Bridge>().unwrap_or_default()
}
