//! Page shown at `/urlroute`.

use crate::components::{Icon, IconKind};
use crate::routing::AppRoute;
use leptos::prelude::*;

/// Confirms that fragment routing works and links back home.
#[component]
pub fn RouteExamplePage() -> impl IntoView {
    view! {
        <div class="container text-center mt-4">
            <div class="row">
                <p class="fs-1 fw-bold">"Successfully Routed!"</p>
                <a href=AppRoute::Home.href() class="btn btn-outline-primary me-2" title="Back home">
                    <Icon kind=IconKind::Home/>
                </a>
            </div>
        </div>
    }
}
