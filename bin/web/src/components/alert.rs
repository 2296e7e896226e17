//! Dismissible success alert.

use leptos::prelude::*;

/// A success banner rendered only while `visible` is true.
///
/// The close button calls `on_dismiss`; hiding the alert is up to the owner
/// of `visible`.
#[component]
pub fn Alert(
    #[prop(into)] visible: Signal<bool>,
    on_dismiss: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="alert alert-success alert-dismissible" role="alert">
                {children()}
                <button
                    type="button"
                    class="btn-close"
                    aria-label="Close"
                    on:click=move |_| on_dismiss.run(())
                ></button>
            </div>
        </Show>
    }
}
