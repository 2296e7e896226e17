//! Animated example element.

use crate::components::{Icon, IconKind};
use leptos::prelude::*;
use shiny_leptos_bridge::SpinState;

const SPIN_TRANSITION: &str = "transform 0.6s ease-in-out";

/// Inline style rotating an element to `degrees`.
#[must_use]
pub fn rotation_style(degrees: u16) -> String {
    format!("display: inline-block; transform: rotate({degrees}deg); transition: {SPIN_TRANSITION};")
}

/// A large star that turns a full circle each time `spin` flips.
#[component]
pub fn SpinningStar(#[prop(into)] spin: Signal<SpinState>) -> impl IntoView {
    view! {
        <div class="spinner" style=move || rotation_style(spin.get().rotation_degrees())>
            <Icon kind=IconKind::Star size=120/>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_style_targets_degrees() {
        assert!(rotation_style(0).contains("rotate(0deg)"));
        assert!(rotation_style(360).contains("rotate(360deg)"));
    }

    #[test]
    fn rotation_style_animates() {
        assert!(rotation_style(360).contains("transition: transform"));
    }
}
