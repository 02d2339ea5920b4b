//! Provider 错误类型

use serde::Serialize;
use thiserror::Error;

/// Errors returned by the Aliyun DNS gateway.
///
/// Requests are sent once. A failure is reported as-is and the caller decides
/// whether it is worth another attempt.
#[derive(Debug, Clone, Error, Serialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// Connection failure, unreadable body or a gateway-class HTTP status.
    #[error("network error: {detail}")]
    NetworkError { detail: String },

    /// A credential field required to build the client is empty.
    #[error("missing credential: {field}")]
    MissingCredential { field: String },

    /// Access key rejected or signature mismatch.
    #[error("invalid credentials{}", api_message(.raw_message.as_deref()))]
    InvalidCredentials { raw_message: Option<String> },

    /// An identical record is already present in the zone.
    #[error("record '{record_name}' already exists")]
    RecordExists {
        record_name: String,
        raw_message: Option<String>,
    },

    /// A request field was refused by the API (bad value, bad RR, ...).
    #[error("invalid parameter '{param}': {detail}")]
    InvalidParameter { param: String, detail: String },

    /// Record type outside A / NS / MX / CNAME / TXT.
    #[error("unsupported record type: {record_type}")]
    UnsupportedRecordType { record_type: String },

    #[error("quota exceeded{}", api_message(.raw_message.as_deref()))]
    QuotaExceeded { raw_message: Option<String> },

    /// HTTP 429 or a `Throttling*` error code.
    #[error("rate limited{}", .retry_after.map(|s| format!(" (retry after {s}s)")).unwrap_or_default())]
    RateLimited {
        retry_after: Option<u64>,
        raw_message: Option<String>,
    },

    #[error("request timed out: {detail}")]
    Timeout { detail: String },

    /// The zone does not exist or does not belong to this account.
    #[error("domain '{domain}' not found{}", api_message(.raw_message.as_deref()))]
    DomainNotFound {
        domain: String,
        raw_message: Option<String>,
    },

    #[error("domain '{domain}' is locked{}", api_message(.raw_message.as_deref()))]
    DomainLocked {
        domain: String,
        raw_message: Option<String>,
    },

    #[error("permission denied{}", api_message(.raw_message.as_deref()))]
    PermissionDenied { raw_message: Option<String> },

    /// Response body is not the JSON we expected.
    #[error("unexpected response: {detail}")]
    ParseError { detail: String },

    /// Request parameters could not be flattened into a query string.
    #[error("cannot encode request: {detail}")]
    SerializationError { detail: String },

    /// API error code with no dedicated variant.
    #[error("{message}")]
    Unknown {
        raw_code: Option<String>,
        message: String,
    },
}

fn api_message(raw: Option<&str>) -> String {
    raw.map(|m| format!(": {m}")).unwrap_or_default()
}

impl ProviderError {
    /// 是否为预期内的失败（输入问题、资源不存在等），用于日志分级：
    /// `true` 记 `warn`，`false` 记 `error`。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::MissingCredential { .. }
                | Self::InvalidCredentials { .. }
                | Self::RecordExists { .. }
                | Self::InvalidParameter { .. }
                | Self::UnsupportedRecordType { .. }
                | Self::QuotaExceeded { .. }
                | Self::DomainNotFound { .. }
                | Self::DomainLocked { .. }
                | Self::PermissionDenied { .. }
        )
    }
}

/// `Result<T, ProviderError>`
pub type Result<T> = std::result::Result<T, ProviderError>;
