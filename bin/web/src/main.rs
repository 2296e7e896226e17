#[cfg(feature = "serve")]
#[tokio::main]
async fn main() {
    use axum::{Router, response::Html, routing::get};
    use shiny_leptos_web::{config::ServeConfig, shell::render_shell};
    use tower_http::services::ServeDir;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = ServeConfig::from_env().expect("failed to load configuration");
    let prefix = config.mount_prefix();
    tracing::info!(
        site_root = %config.site_root.display(),
        prefix = %prefix,
        "Loaded configuration"
    );

    if !config.site_root.join("pkg").is_dir() {
        tracing::warn!(
            site_root = %config.site_root.display(),
            "No pkg/ directory under site root; build the wasm bundle first"
        );
    }

    // No Shiny host here, so the app runs with a disconnected bridge.
    let page = render_shell(&prefix, &config.output_name);

    let app = Router::new()
        .route(
            "/",
            get(move || {
                let page = page.clone();
                async move { Html(page) }
            }),
        )
        .nest_service(&prefix, ServeDir::new(&config.site_root));

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("failed to bind to address");

    tracing::info!("listening on http://{}", config.addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}

#[cfg(not(feature = "serve"))]
fn main() {
    // This main function is only used for WASM builds
    // The app is mounted from lib.rs
}
