//! Commonly used constants

use std::path::PathBuf;

/// Prefix of environment variables that override configuration values.
pub const ENV_PREFIX: &str = "PAYMAYA";

/// Environment variable selecting the gateway environment.
pub const RUN_ENV: &str = "PAYMAYA_ENV";

/// Sandbox gateway base url.
pub const SANDBOX_BASE_URL: &str = "https://pg-sandbox.paymaya.com";

/// Production gateway base url.
pub const PRODUCTION_BASE_URL: &str = "https://pg.paymaya.com";

/// Error code used when the gateway does not send one.
pub const NO_ERROR_CODE: &str = "No error code";

/// Error message used when the gateway does not send one.
pub const NO_ERROR_MESSAGE: &str = "No error message";

/// Gateway environment.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Env {
    #[default]
    Sandbox,
    Production,
}

impl Env {
    /// Environment picked from `PAYMAYA_ENV`, sandbox when unset or unknown.
    pub fn current_env() -> Self {
        std::env::var(RUN_ENV).map_or_else(|_| Self::default(), |v| v.parse().unwrap_or_default())
    }

    pub const fn config_path(self) -> &'static str {
        match self {
            Self::Sandbox => "sandbox.toml",
            Self::Production => "production.toml",
        }
    }

    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Sandbox => SANDBOX_BASE_URL,
            Self::Production => PRODUCTION_BASE_URL,
        }
    }
}

/// Base path to look for the `config/` directory.
pub fn workspace_path() -> PathBuf {
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let mut path = PathBuf::from(manifest_dir);
        path.pop();
        path.pop();
        path
    } else {
        PathBuf::from(".")
    }
}
