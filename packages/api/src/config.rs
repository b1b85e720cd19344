//! Client configuration.

use url::Url;

/// Where the jobs API lives when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid JOBS_API_URL {value:?}: {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Root of the jobs API; endpoint paths are joined onto it.
    pub base_url: Url,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let mut base_url = Url::parse(base_url.trim()).map_err(|source| ConfigError::InvalidBaseUrl {
            value: base_url.to_string(),
            source,
        })?;
        // Without a trailing slash `join` would replace the last path segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { base_url })
    }

    /// Build a config from the environment.
    ///
    /// - `JOBS_API_URL` at runtime, when the platform has an environment
    /// - otherwise `JOBS_API_URL` as set at compile time (wasm builds)
    /// - otherwise `http://localhost:8000`
    pub fn from_env() -> Result<Self, ConfigError> {
        let value = std::env::var("JOBS_API_URL")
            .ok()
            .and_then(non_empty)
            .or_else(|| option_env!("JOBS_API_URL").map(str::to_string).and_then(non_empty))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(&value)
    }
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
