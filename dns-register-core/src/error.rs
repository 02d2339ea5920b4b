//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use dns_register_provider::ProviderError;

/// Core layer error type
///
/// One value describes why a single input line did not lead to a record.
/// The `Display` text is exactly the status string reported back to the caller;
/// provider details stay in the source error and only reach the log.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The full domain failed the syntax check
    #[error("invalid domain format")]
    InvalidDomain(String),

    /// No type given and none inferred, or the given type is not supported
    #[error("invalid record type")]
    InvalidRecordType(String),

    /// Listing existing records under the full domain failed
    #[error("failed to fetch existing records, verify domain belongs to the account")]
    LookupFailed(#[source] ProviderError),

    /// The create call was rejected or did not complete
    #[error("registration failed")]
    CreateFailed(#[source] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidDomain(_) | Self::InvalidRecordType(_) => true,
            Self::LookupFailed(e) | Self::CreateFailed(e) => e.is_expected(),
        }
    }

    /// Underlying provider error, if any.
    pub fn provider_error(&self) -> Option<&ProviderError> {
        match self {
            Self::LookupFailed(e) | Self::CreateFailed(e) => Some(e),
            _ => None,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn timeout() -> ProviderError {
        ProviderError::Timeout {
            detail: "30s".to_string(),
        }
    }

    #[test]
    fn display_is_status_message() {
        assert_eq!(
            CoreError::InvalidDomain("x".to_string()).to_string(),
            "invalid domain format"
        );
        assert_eq!(
            CoreError::InvalidRecordType("SRV".to_string()).to_string(),
            "invalid record type"
        );
        assert_eq!(
            CoreError::LookupFailed(timeout()).to_string(),
            "failed to fetch existing records, verify domain belongs to the account"
        );
        assert_eq!(
            CoreError::CreateFailed(timeout()).to_string(),
            "registration failed"
        );
    }

    #[test]
    fn provider_detail_is_kept_as_source() {
        let err = CoreError::CreateFailed(timeout());
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("request timed out: 30s"));
        assert!(err.provider_error().is_some());
    }

    #[test]
    fn expected_follows_provider_error() {
        assert!(CoreError::InvalidDomain("x".to_string()).is_expected());
        assert!(!CoreError::LookupFailed(timeout()).is_expected());
        assert!(
            CoreError::LookupFailed(ProviderError::DomainNotFound {
                domain: "example.com".to_string(),
                raw_message: None,
            })
            .is_expected()
        );
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(CoreError::InvalidRecordType("SRV".to_string()))
            .unwrap_or_default();
        assert_eq!(json["code"], "InvalidRecordType");
        assert_eq!(json["details"], "SRV");
    }
}
