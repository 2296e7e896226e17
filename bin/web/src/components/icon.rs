//! Inline SVG icons.

use leptos::prelude::*;

/// The icons the template uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Home,
    Route,
    Star,
    TowerCell,
}

impl IconKind {
    /// Stroke path in a 24x24 viewbox.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "M3 11 12 3l9 8M5 9.5V21h5v-6h4v6h5V9.5",
            Self::Route => {
                "M6 21a2 2 0 1 0 0-4 2 2 0 0 0 0 4M18 7a2 2 0 1 0 0-4 2 2 0 0 0 0 4\
                 M6 17v-6a4 4 0 0 1 4-4h6M18 7v6a4 4 0 0 1-4 4H8"
            }
            Self::Star => "M12 2.5l2.9 6.1 6.6.8-4.9 4.6 1.3 6.5L12 17.3l-5.9 3.2 1.3-6.5-4.9-4.6 6.6-.8z",
            Self::TowerCell => {
                "M12 11v10M9 21h6M12 9.5a1.5 1.5 0 1 0 0-3 1.5 1.5 0 0 0 0 3\
                 M8 4.5a6 6 0 0 0 0 7M16 4.5a6 6 0 0 1 0 7M5 2a10 10 0 0 0 0 12M19 2a10 10 0 0 1 0 12"
            }
        }
    }

    /// Accessible name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Route => "route",
            Self::Star => "star",
            Self::TowerCell => "tower cell",
        }
    }
}

/// Renders `kind` at `size` pixels, inheriting the text colour.
#[component]
pub fn Icon(kind: IconKind, #[prop(default = 16)] size: u32) -> impl IntoView {
    let size = size.to_string();
    view! {
        <svg
            class="icon"
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            role="img"
            aria-label=kind.label()
        >
            <path d=kind.path()></path>
        </svg>
    }
}
