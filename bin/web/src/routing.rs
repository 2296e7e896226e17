//! Hash-fragment routing.
//!
//! Shiny serves the bundle from a single page, so routes live in the URL
//! fragment (`#/`, `#/urlroute`) and never reach the server.

use leptos::prelude::*;

/// The two views the app can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    UrlRoute,
}

impl AppRoute {
    /// Matches a path exactly. An empty path counts as `/`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "" | "/" => Some(Self::Home),
            "/urlroute" => Some(Self::UrlRoute),
            _ => None,
        }
    }

    /// Matches a `location.hash` value such as `#/urlroute`.
    #[must_use]
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        Self::from_path(fragment.strip_prefix('#').unwrap_or(fragment))
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::UrlRoute => "/urlroute",
        }
    }

    /// Link target for anchors.
    #[must_use]
    pub fn href(self) -> &'static str {
        match self {
            Self::Home => "#/",
            Self::UrlRoute => "#/urlroute",
        }
    }
}

/// Tracks the route in the URL fragment.
///
/// Without a browser (native builds) the route is always [`AppRoute::Home`].
pub fn use_hash_route() -> ReadSignal<Option<AppRoute>> {
    let (route, set_route) = signal(current_route());

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::hashchange, move |_| {
            let next = current_route();
            tracing::debug!(route = ?next, "Route changed");
            set_route.set(next);
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "csr"))]
    let _ = set_route;

    route
}

fn current_route() -> Option<AppRoute> {
    #[cfg(feature = "csr")]
    {
        let hash = window().location().hash().unwrap_or_default();
        AppRoute::from_fragment(&hash)
    }
    #[cfg(not(feature = "csr"))]
    {
        Some(AppRoute::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_paths_match() {
        assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Home));
        assert_eq!(AppRoute::from_path("/urlroute"), Some(AppRoute::UrlRoute));
    }

    #[test]
    fn empty_fragment_is_home() {
        assert_eq!(AppRoute::from_fragment(""), Some(AppRoute::Home));
        assert_eq!(AppRoute::from_fragment("#"), Some(AppRoute::Home));
    }

    #[test]
    fn fragments_resolve_to_routes() {
        assert_eq!(AppRoute::from_fragment("#/"), Some(AppRoute::Home));
        assert_eq!(
            AppRoute::from_fragment("#/urlroute"),
            Some(AppRoute::UrlRoute)
        );
    }

    #[test]
    fn match_is_exact() {
        assert_eq!(AppRoute::from_fragment("#/urlroute/"), None);
        assert_eq!(AppRoute::from_fragment("#/URLROUTE"), None);
        assert_eq!(AppRoute::from_fragment("#/urlroute?x=1"), None);
        assert_eq!(AppRoute::from_fragment("#/elsewhere"), None);
    }

    #[test]
    fn href_round_trips_through_fragment() {
        for route in [AppRoute::Home, AppRoute::UrlRoute] {
            assert_eq!(AppRoute::from_fragment(route.href()), Some(route));
            assert_eq!(AppRoute::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn native_route_defaults_to_home() {
        let owner = Owner::new();
        owner.set();
        assert_eq!(use_hash_route().get_untracked(), Some(AppRoute::Home));
    }
}
