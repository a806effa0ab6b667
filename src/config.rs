use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;

use crate::utils::format::Locale;
use crate::view::toast::ToastTray;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    /// Base url of the payroll backend, without the `/api` prefix
    pub backend_url: String,
    pub storage_path: PathBuf,
    pub log_level: tracing::Level,

    // Display
    pub locale: Locale,
    pub currency_suffix: String,
    pub toast_duration: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from `lookup`, which answers a variable name
    /// with its value when set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            server_addr: var("SERVER_ADDR", "127.0.0.1:8080"),
            backend_url: lookup("BACKEND_URL").context("BACKEND_URL must be set")?,
            storage_path: var("STORAGE_PATH", "storage.json").into(),
            log_level: var("LOG_LEVEL", "debug")
                .parse()
                .context("LOG_LEVEL must be one of trace, debug, info, warn, error")?,

            locale: var("PANEL_LOCALE", "ar")
                .parse()
                .context("PANEL_LOCALE must be `ar` or `en`")?,
            currency_suffix: var("CURRENCY_SUFFIX", "د.ك"),
            toast_duration: match lookup("TOAST_DURATION_MS") {
                Some(ms) => Duration::from_millis(
                    ms.parse()
                        .context("TOAST_DURATION_MS must be a number of milliseconds")?,
                ),
                None => ToastTray::DEFAULT_DURATION,
            },
        })
    }
}
