//! Error types for release tag discovery.

use thiserror::Error;

/// Main error type for tag discovery operations.
#[derive(Error, Debug)]
pub enum TagFinderError {
    // Cli args errors
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    // Release payload errors
    #[error("Malformed release record: missing or invalid field '{field}'")]
    MalformedRecord { field: String },

    // Forge errors
    #[error("Forge operation failed: {0}")]
    ForgeError(String),

    #[error("Git URL parse error: {0}")]
    GitUrlError(#[from] git_url_parse::GitUrlParseError),

    // Network/API errors
    #[error("Network request failed: {0}")]
    NetworkError(String),

    #[error("API authentication failed: {0}")]
    AuthenticationError(String),

    #[error("API rate limit exceeded")]
    RateLimitExceeded,

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),
}

/// Result type alias using TagFinderError
pub type Result<T> = std::result::Result<T, TagFinderError>;

impl TagFinderError {
    /// Create an invalid arguments error
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }

    /// Create a malformed record error naming the missing field
    pub fn malformed_record(field: impl Into<String>) -> Self {
        Self::MalformedRecord {
            field: field.into(),
        }
    }
}

// Implement From for reqwest errors (network/API)
impl From<reqwest::Error> for TagFinderError {
    fn from(err: reqwest::Error) -> Self {
        match err.status().map(|s| s.as_u16()) {
            Some(401) | Some(403) => Self::AuthenticationError(err.to_string()),
            Some(429) => Self::RateLimitExceeded,
            _ => Self::NetworkError(err.to_string()),
        }
    }
}

// Implement From for reqwest header errors (needs custom message)
impl From<reqwest::header::InvalidHeaderValue> for TagFinderError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Self::AuthenticationError(format!("Invalid header value: {}", err))
    }
}

// Implement From for octocrab errors (GitHub API)
impl From<octocrab::Error> for TagFinderError {
    fn from(err: octocrab::Error) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. }
                if source.message.contains("rate limit") =>
            {
                Self::RateLimitExceeded
            }
            octocrab::Error::GitHub { source, .. }
                if source.status_code.as_u16() == 401 =>
            {
                Self::AuthenticationError(source.message.clone())
            }
            _ => Self::ForgeError(format!("GitHub API error: {}", err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formats() {
        let err = TagFinderError::invalid_args("missing repo");
        assert_eq!(err.to_string(), "Invalid arguments: missing repo");

        let err = TagFinderError::malformed_record("draft");
        assert_eq!(
            err.to_string(),
            "Malformed release record: missing or invalid field 'draft'"
        );
    }

    #[test]
    fn test_error_helpers() {
        let err = TagFinderError::invalid_args("missing repo");
        assert!(matches!(err, TagFinderError::InvalidArgs(_)));

        let err = TagFinderError::malformed_record("tag_name");
        assert!(matches!(err, TagFinderError::MalformedRecord { .. }));
    }

    #[test]
    fn test_from_conversions() {
        let url_err = url::Url::parse("not a url").unwrap_err();
        let err: TagFinderError = url_err.into();
        assert!(matches!(err, TagFinderError::UrlError(_)));
    }
}
