use thiserror::Error;

/// Every way a profile credential lookup can fail.
///
/// The override hook treats all of them the same way (log and fall back to
/// the stored credentials); the variants exist so the log line and the
/// `probe` command can say which check tripped.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("invalid credential service URL '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },

    #[error("credential service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("credential service returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("credential service response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("credential service rejected lookup, code={code}")]
    Rejected { code: String },

    #[error("credential service response missing data")]
    MissingData,

    #[error("credential service returned blank user name or password")]
    Incomplete,
}

impl ProfileError {
    /// Short machine-friendly tag for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ProfileError::InvalidEndpoint { .. } => "invalid_endpoint",
            ProfileError::Transport(_) => "transport",
            ProfileError::Status(_) => "status",
            ProfileError::Decode(_) => "decode",
            ProfileError::Rejected { .. } => "rejected",
            ProfileError::MissingData => "missing_data",
            ProfileError::Incomplete => "incomplete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_includes_code() {
        let err = ProfileError::Rejected { code: "4001".into() };
        assert_eq!(err.to_string(), "credential service rejected lookup, code=4001");
        assert_eq!(err.kind(), "rejected");
    }

    #[test]
    fn test_decode_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ProfileError = serde_err.into();
        assert_eq!(err.kind(), "decode");
    }
}
