//! Page components for the application.
//!
//! Each page is a Leptos component that renders one route.

pub mod home;
pub mod route_example;

pub use home::HomePage;
pub use route_example::RouteExamplePage;
