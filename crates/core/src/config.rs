//! Client configuration: backend base URL and request timeout.
//!
//! Resolved in layers: defaults, then an optional `muso.toml`, then the
//! `MUSO_API_URL` / `MUSO_TIMEOUT_SECS` environment, then explicit overrides
//! from the caller (CLI flags).

use std::path::Path;
use std::time::Duration;

use tracing::{debug, warn};

/// Backend address when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Per-request deadline when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "muso.toml";

pub const ENV_API_URL: &str = "MUSO_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "MUSO_TIMEOUT_SECS";

/// Known keys in `muso.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] = &["base_url", "timeout_secs"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("invalid timeout '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Explicitly constructed client options, passed to the API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), timeout: DEFAULT_TIMEOUT }
    }
}

impl ClientConfig {
    /// Build from a base URL, validating it and dropping any trailing `/`.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self { base_url: normalize_base_url(base_url)?, timeout: DEFAULT_TIMEOUT })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout("0".to_string()));
        }
        self.timeout = timeout;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Absolute URL for an API path such as `/api/search`.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Defaults, then `muso.toml` in `dir` (if present), then the process environment.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        Self::load_with(dir, |key| std::env::var(key).ok())
    }

    /// Like [`ClientConfig::load`], with the environment supplied by `lookup`.
    pub fn load_with<F>(dir: &Path, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            debug!(path = %path.display(), "Loading config file");
            let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                path: path.display().to_string(),
                source,
            })?;
            config.apply_toml(&content)?;
        }
        config.apply_env(lookup)?;
        Ok(config)
    }

    /// Merge overrides from TOML text. A file that fails to parse is ignored with a warning.
    pub fn apply_toml(&mut self, content: &str) -> Result<(), ConfigError> {
        let table = match content.parse::<toml::Table>() {
            Ok(table) => table,
            Err(e) => {
                warn!(error = %e, "Failed to parse {CONFIG_FILE_NAME}");
                return Ok(());
            }
        };

        for key in table.keys() {
            if KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
                continue;
            }
            let suggestion = KNOWN_CONFIG_KEYS.iter().min_by_key(|k| edit_distance(key, k));
            match suggestion {
                Some(s) if edit_distance(key, s) <= 3 => warn!(
                    key = key.as_str(),
                    suggestion = *s,
                    "Unknown key in {CONFIG_FILE_NAME} — did you mean '{s}'?"
                ),
                _ => warn!(
                    key = key.as_str(),
                    "Unknown key in {CONFIG_FILE_NAME} (known keys: {})",
                    KNOWN_CONFIG_KEYS.join(", ")
                ),
            }
        }

        if let Some(value) = table.get("base_url") {
            let url = value.as_str().ok_or_else(|| ConfigError::InvalidUrl {
                url: value.to_string(),
                reason: "expected a string".to_string(),
            })?;
            self.base_url = normalize_base_url(url)?;
        }
        if let Some(value) = table.get("timeout_secs") {
            let secs = value
                .as_integer()
                .filter(|s| *s > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(value.to_string()))?;
            self.timeout = Duration::from_secs(secs as u64);
        }
        Ok(())
    }

    /// Merge overrides from environment-style lookups (`MUSO_API_URL`, `MUSO_TIMEOUT_SECS`).
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL).filter(|u| !u.trim().is_empty()) {
            self.base_url = normalize_base_url(&url)?;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS).filter(|t| !t.trim().is_empty()) {
            let secs = parse_timeout_secs(&raw)?;
            self.timeout = Duration::from_secs(secs);
        }
        Ok(())
    }
}

/// Parse a positive whole number of seconds.
pub fn parse_timeout_secs(raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|s| *s > 0)
        .ok_or_else(|| ConfigError::InvalidTimeout(raw.to_string()))
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ConfigError::InvalidUrl {
            url: raw.to_string(),
            reason: "base URL must not carry a query or fragment".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
