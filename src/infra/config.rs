// ============================================================
// Layer 6 — Client Configuration
// ============================================================
// The only setting the client needs is the backend base URL.
//
// Resolution order (first one wins):
//   1. --api-url flag, or the SMARTNOTE_API_URL environment
//      variable (clap merges both into one value)
//   2. "api_url" in the JSON file given with --config
//   3. DEFAULT_API_URL
//
// Example config file:
//   { "api_url": "https://notes.example.edu/api" }
//
// Trailing slashes are stripped so endpoint paths can always be
// joined with a single "/".

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Backend used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Environment variable read by the --api-url flag
pub const API_URL_ENV: &str = "SMARTNOTE_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the REST API, without a trailing slash
    pub api_url: String,
}

/// On-disk shape of the --config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    api_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_url: DEFAULT_API_URL.to_string() }
    }
}

impl ClientConfig {
    /// Resolve the configuration from the CLI value (flag or env var)
    /// and an optional config file.
    pub fn resolve(cli_api_url: Option<String>, config_file: Option<&Path>) -> Result<Self> {
        let from_file = match config_file {
            Some(path) => load_file(path)?.api_url,
            None       => None,
        };

        let raw = cli_api_url
            .filter(|u| !u.trim().is_empty())
            .or(from_file)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let api_url = normalise_base_url(&raw)?;
        tracing::debug!("Using API base URL '{}'", api_url);
        Ok(Self { api_url })
    }
}

fn load_file(path: &Path) -> Result<ConfigFile> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config file '{}'", path.display()))?;

    serde_json::from_str(&json)
        .with_context(|| format!("Config file '{}' is not valid JSON", path.display()))
}

/// Validate a base URL and strip trailing slashes.
fn normalise_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');

    let url = reqwest::Url::parse(trimmed)
        .with_context(|| format!("Invalid API URL '{raw}'"))?;

    if !matches!(url.scheme(), "http" | "https") {
        bail!("API URL must use http or https, got '{}'", url.scheme());
    }

    Ok(trimmed.to_string())
}
