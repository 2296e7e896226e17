//! Dev server configuration.
//!
//! Loaded via the `config` crate from environment variables prefixed with
//! `SHINY_LEPTOS__`, e.g. `SHINY_LEPTOS__ADDR=0.0.0.0:8080` or
//! `SHINY_LEPTOS__SITE_ROOT=dist`.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Configuration for the standalone dev server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServeConfig {
    /// Address to listen on.
    #[serde(default = "default_addr")]
    pub addr: SocketAddr,

    /// Directory holding the compiled bundle (`pkg/`) and stylesheet.
    #[serde(default = "default_site_root")]
    pub site_root: PathBuf,

    /// URL prefix the site root is served under.
    #[serde(default = "default_static_prefix")]
    pub static_prefix: String,

    /// Base name of the wasm-bindgen output in `pkg/`.
    #[serde(default = "default_output_name")]
    pub output_name: String,
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

fn default_site_root() -> PathBuf {
    PathBuf::from("target/site")
}

fn default_static_prefix() -> String {
    "/static".to_string()
}

fn default_output_name() -> String {
    "shiny_leptos_web".to_string()
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            site_root: default_site_root(),
            static_prefix: default_static_prefix(),
            output_name: default_output_name(),
        }
    }
}

impl ServeConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(
            config::Environment::with_prefix("SHINY_LEPTOS")
                .separator("__")
                .try_parsing(true),
        )
    }

    /// Loads configuration from an arbitrary source.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or deserialized.
    pub fn from_source<S>(source: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }

    /// The static prefix with exactly one leading and no trailing slash.
    #[must_use]
    pub fn mount_prefix(&self) -> String {
        let trimmed = self.static_prefix.trim_matches('/');
        format!("/{trimmed}")
    }
}
