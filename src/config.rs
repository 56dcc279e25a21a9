use std::time::Duration;

/// Default wall-clock budget for one credential lookup.
/// Override with `SKYROC_PROFILE_TIMEOUT_SECS`.
pub const DEFAULT_PROFILE_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the credential service, e.g. `http://127.0.0.1:8000`.
    /// Set via SKYROC_BASE_URL. Absent or blank disables the hook.
    pub base_url: Option<String>,
    /// Shared token sent as `X-Skyroc-Internal-Token`.
    /// Set via SKYROC_INTERNAL_TOKEN. Absent or blank disables the hook.
    pub internal_token: Option<String>,
    /// Request timeout in seconds for the credential lookup.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            internal_token: None,
            timeout_secs: DEFAULT_PROFILE_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// True when both the base URL and the token are present and non-blank.
    pub fn is_enabled(&self) -> bool {
        self.base_url().is_some() && self.internal_token().is_some()
    }

    pub fn base_url(&self) -> Option<&str> {
        non_blank(self.base_url.as_deref())
    }

    pub fn internal_token(&self) -> Option<&str> {
        non_blank(self.internal_token.as_deref())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn load() -> anyhow::Result<Config> {
    dotenvy::dotenv().ok();

    Ok(Config {
        base_url: std::env::var("SKYROC_BASE_URL").ok(),
        internal_token: std::env::var("SKYROC_INTERNAL_TOKEN").ok(),
        timeout_secs: std::env::var("SKYROC_PROFILE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PROFILE_TIMEOUT_SECS),
    })
}
