//! Credential service client.
//!
//! One POST per lookup, no retries. The reply is checked in order:
//! HTTP status, JSON shape, `code == "0000"`, `data` present, then
//! non-blank `userName` and `password`. The first failing check decides the
//! returned [`ProfileError`].

use std::time::Duration;

use reqwest::Client;
use url::Url;

use super::types::{
    ProfileCredentials, ProfileCredentialsRequest, ProfileCredentialsResponse,
};
use crate::errors::ProfileError;

pub const INTERNAL_TOKEN_HEADER: &str = "X-Skyroc-Internal-Token";
pub const PROFILE_ENDPOINT_PATH: &str = "/internal/doris/profile-credentials";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// `{base}/internal/doris/profile-credentials` with surrounding whitespace
/// and trailing slashes removed from `base`.
pub fn profile_endpoint(base_url: &str) -> String {
    format!(
        "{}{}",
        base_url.trim().trim_end_matches('/'),
        PROFILE_ENDPOINT_PATH
    )
}

pub struct ProfileClient {
    /// Composed but unparsed; a malformed URL surfaces from `fetch` so the
    /// caller can fall back per query.
    endpoint: String,
    token: String,
    http: Client,
}

impl ProfileClient {
    pub fn new(
        base_url: &str,
        token: impl Into<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let endpoint = profile_endpoint(base_url);

        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| anyhow::anyhow!("credential client build error: {}", e))?;

        Ok(Self {
            endpoint,
            token: token.into(),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn endpoint_url(&self) -> Result<Url, ProfileError> {
        Url::parse(&self.endpoint).map_err(|source| ProfileError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            source,
        })
    }

    /// Look up the profile credentials issued for `user_name`.
    pub async fn fetch(&self, user_name: &str) -> Result<ProfileCredentials, ProfileError> {
        let url = self.endpoint_url()?;
        let resp = self
            .http
            .post(url)
            .header(INTERNAL_TOKEN_HEADER, &self.token)
            .json(&ProfileCredentialsRequest { user_name })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ProfileError::Status(status));
        }

        let body = resp.bytes().await?;
        let parsed: ProfileCredentialsResponse = serde_json::from_slice(&body)?;
        validate(parsed)
    }
}

/// Turn a decoded envelope into a credential pair, or say why it can't be.
pub fn validate(resp: ProfileCredentialsResponse) -> Result<ProfileCredentials, ProfileError> {
    if !resp.is_success() {
        return Err(ProfileError::Rejected {
            code: resp.code_str(),
        });
    }

    let data = resp.data.ok_or(ProfileError::MissingData)?;

    match (data.user_name_str(), data.password()) {
        (Some(user_name), Some(password))
            if !user_name.trim().is_empty() && !password.is_blank() =>
        {
            Ok(ProfileCredentials {
                user_name,
                password,
            })
        }
        _ => Err(ProfileError::Incomplete),
    }
}

// ── Tests ──────────────────────────────────────────────────────
