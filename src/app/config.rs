// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Runtime configuration: backend address, timeout, and seeded session cookies.
//!
//! Values come from an optional TOML file and are then overridden by
//! `UPAI_*` environment variables.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use url::Url;

/// Environment variable pointing at an explicit config file.
pub const CONFIG_PATH_VAR: &str = "UPAI_DESK_CONFIG";

const DEFAULT_BASE_URL: &str = "http://localhost:8000/";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolved settings used to build the API client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend root; always ends with `/` so endpoint paths join beneath it.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Initial `csrftoken` cookie value.
    pub csrf_token: Option<String>,
    /// Initial `sessionid` cookie value for an authenticated session.
    pub session_id: Option<String>,
}

/// On-disk representation; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    csrf_token: Option<String>,
    session_id: Option<String>,
}

impl AppConfig {
    /// Settings for `base_url` with the default timeout and no seeded cookies.
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            csrf_token: None,
            session_id: None,
        }
    }

    /// Load the config file (if any) and apply environment overrides.
    pub fn load() -> Result<Self> {
        let file = match config_path() {
            Some(path) if path.exists() => {
                tracing::info!(path = %path.display(), "loading configuration");
                read_config_file(&path)?
            }
            Some(path) => {
                tracing::info!(path = %path.display(), "no configuration file, using defaults");
                ConfigFile::default()
            }
            None => ConfigFile::default(),
        };
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Merge file values with overrides looked up through `env`.
    fn resolve(file: ConfigFile, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw_url = env("UPAI_BASE_URL").or(file.base_url);
        let mut config =
            Self::with_base_url(parse_base_url(raw_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?);

        let timeout_secs = match env("UPAI_TIMEOUT_SECS") {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("UPAI_TIMEOUT_SECS is not a number: {raw:?}"))?,
            ),
            None => file.timeout_secs,
        };
        if let Some(secs) = timeout_secs {
            if secs == 0 {
                bail!("timeout_secs must be greater than zero");
            }
            config.timeout = Duration::from_secs(secs);
        }

        config.csrf_token = env("UPAI_CSRF_TOKEN")
            .or(file.csrf_token)
            .filter(|v| !v.trim().is_empty());
        config.session_id = env("UPAI_SESSION_ID")
            .or(file.session_id)
            .filter(|v| !v.trim().is_empty());

        Ok(config)
    }
}

/// Parse the backend root, requiring http(s) and normalizing a trailing slash.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url =
        Url::parse(raw.trim()).with_context(|| format!("Invalid backend URL: {raw:?}"))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        bail!("Backend URL must be an http/https address: {raw:?}");
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn config_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join("upai-desk").join("config.toml")))
}

fn read_config_file(path: &Path) -> Result<ConfigFile> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    toml::from_str(&text).with_context(|| format!("Failed to parse config file: {:?}", path))
}
