//! Home page component.

use crate::app::use_bridge;
use crate::components::{Alert, Icon, IconKind, SpinningStar};
use crate::routing::AppRoute;
use leptos::prelude::*;
use shiny_leptos_bridge::{Bridge, NoticeState, SpinState, Subscription, listen_for_ack, send_check};

/// Shows the notice whenever the host acknowledges a comms check.
///
/// The handler lives until the returned guard is dropped.
pub fn show_notice_on_ack(bridge: &Bridge, notice: RwSignal<NoticeState>) -> Subscription {
    listen_for_ack(bridge, move || notice.update(NoticeState::show))
}

/// The home page component.
#[component]
pub fn HomePage() -> impl IntoView {
    let bridge = use_bridge();
    let notice = RwSignal::new(NoticeState::default());
    let spin = RwSignal::new(SpinState::default());

    let subscription = show_notice_on_ack(&bridge, notice);
    on_cleanup(move || drop(subscription));

    let check_comms = move |_| send_check(&bridge);
    let toggle_spin = move |_| {
        spin.update(|spin| {
            spin.toggle();
        });
    };

    view! {
        <Alert
            visible=Signal::derive(move || notice.get().is_visible())
            on_dismiss=Callback::new(move |()| notice.update(NoticeState::dismiss))
        >
            "Communication Successful."
        </Alert>

        <div class="container text-center mt-4">
            <div class="row justify-content-center">
                <p class="fs-1 fw-bold">"Shiny/Leptos Template Application"</p>
                <p class="text-muted font-monospace">
                    "Use the following buttons to check out some functionality. "
                    "(Comms don't work in frontend mode)"
                </p>
            </div>
            <div class="row justify-content-center">
                <div class="col">
                    <button
                        id="commBtn"
                        class="btn btn-outline-primary ms-2"
                        title="Test Shiny Comms"
                        on:click=check_comms
                    >
                        <Icon kind=IconKind::TowerCell/>
                    </button>
                    <a
                        id="routeBtn"
                        href=AppRoute::UrlRoute.href()
                        class="btn btn-outline-primary ms-2"
                        title="Test Router"
                    >
                        <Icon kind=IconKind::Route/>
                    </a>
                    <button
                        id="aniBtn"
                        class="btn btn-outline-primary ms-2"
                        title="Test Animation"
                        on:click=toggle_spin
                    >
                        <Icon kind=IconKind::Star/>
                    </button>
                </div>
            </div>
            <hr/>
            <div class="row justify-content-center mt-4">
                <div class="col">
                    <SpinningStar spin=spin/>
                </div>
            </div>
        </div>
    }
}
