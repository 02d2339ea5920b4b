use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{DnsRecord, PaginatedResponse, PaginationParams, RecordSpec};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（如 `DomainRecordDuplicate`）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 记录名称（用于 `RecordExists`）
    pub record_name: Option<String>,
    /// 域名（用于 `DomainNotFound` / `DomainLocked`）
    pub domain: Option<String>,
}

impl ErrorContext {
    pub fn for_domain(domain: &str) -> Self {
        Self {
            domain: Some(domain.to_string()),
            ..Self::default()
        }
    }

    pub fn for_record(domain: &str, record_name: &str) -> Self {
        Self {
            record_name: Some(record_name.to_string()),
            domain: Some(domain.to_string()),
        }
    }
}

/// API 错误码 -> [`ProviderError`]（内部使用）
pub(crate) trait ProviderErrorMapper {
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;
}

impl From<RawApiError> for ProviderError {
    /// 没有专门变体的错误码
    fn from(raw: RawApiError) -> Self {
        Self::Unknown {
            raw_code: raw.code,
            message: raw.message,
        }
    }
}

/// DNS 提供商 Trait
///
/// The registration engine only needs to look up what already exists under a
/// fully-qualified name and to add one record to a zone.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 验证凭证是否有效
    async fn validate_credentials(&self) -> Result<bool>;

    /// 查询某个完整子域名下已有的解析记录（分页）
    ///
    /// `sub_domain` is the fully-qualified name, e.g. `www.example.com`.
    async fn describe_subdomain_records(
        &self,
        sub_domain: &str,
        params: &PaginationParams,
    ) -> Result<PaginatedResponse<DnsRecord>>;

    /// 在 `domain` 这个主域名下创建解析记录，返回记录 ID
    async fn create_record(&self, domain: &str, spec: &RecordSpec) -> Result<String>;
}
