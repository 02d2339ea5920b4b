//! 阿里云 DNS Provider

mod error;
mod http;
mod provider;
mod sign;
mod types;

use reqwest::Client;

use crate::error::{ProviderError, Result};
use crate::providers::common::create_http_client;

pub(crate) use types::{
    AddDomainRecordResponse, DescribeDomainsResponse, DescribeSubDomainRecordsResponse,
    serialize_to_query_string,
};

/// 默认地域（alidns.cn-hangzhou.aliyuncs.com）
pub(crate) const DEFAULT_REGION_ID: &str = "cn-hangzhou";
pub(crate) const ALIYUN_DNS_VERSION: &str = "2015-01-09";
/// 空 body 的 SHA256 hash (固定值)
pub(crate) const EMPTY_BODY_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
/// 阿里云 API 单页最大记录数
pub(crate) const MAX_PAGE_SIZE: u32 = 100;
/// MX 记录固定优先级（阿里云要求 MX 必须携带 Priority，取值 1-50）
pub(crate) const DEFAULT_MX_PRIORITY: u16 = 10;

/// Aliyun DNS provider implementation.
///
/// Authenticates via HMAC-SHA256 V3 signing with Access Key ID/Secret.
///
/// # Construction
///
/// ```rust,no_run
/// use dns_register_provider::AliyunProvider;
///
/// let provider = AliyunProvider::builder(
///     "your-access-key-id".to_string(),
///     "your-access-key-secret".to_string(),
/// )
/// .region("cn-shenzhen")
/// .build()?;
/// # Ok::<(), dns_register_provider::ProviderError>(())
/// ```
pub struct AliyunProvider {
    pub(crate) client: Client,
    pub(crate) access_key_id: String,
    pub(crate) access_key_secret: String,
    pub(crate) host: String,
}

/// Builder for [`AliyunProvider`].
pub struct AliyunProviderBuilder {
    access_key_id: String,
    access_key_secret: String,
    region_id: String,
}

impl AliyunProviderBuilder {
    fn new(access_key_id: String, access_key_secret: String) -> Self {
        Self {
            access_key_id,
            access_key_secret,
            region_id: DEFAULT_REGION_ID.to_string(),
        }
    }

    /// Set the region whose DNS endpoint is used (default: `cn-hangzhou`).
    ///
    /// An empty string keeps the default.
    pub fn region(mut self, region_id: impl Into<String>) -> Self {
        let region_id = region_id.into();
        if !region_id.trim().is_empty() {
            self.region_id = region_id.trim().to_string();
        }
        self
    }

    /// Build the [`AliyunProvider`] instance.
    ///
    /// Fails when either credential field is empty or the HTTP client cannot be created.
    pub fn build(self) -> Result<AliyunProvider> {
        if self.access_key_id.trim().is_empty() {
            return Err(ProviderError::MissingCredential {
                field: "access_key_id".to_string(),
            });
        }
        if self.access_key_secret.trim().is_empty() {
            return Err(ProviderError::MissingCredential {
                field: "access_key_secret".to_string(),
            });
        }

        Ok(AliyunProvider {
            client: create_http_client()?,
            access_key_id: self.access_key_id,
            access_key_secret: self.access_key_secret,
            host: format!("alidns.{}.aliyuncs.com", self.region_id),
        })
    }
}

impl AliyunProvider {
    /// Creates a new Aliyun provider against the default region.
    pub fn new(access_key_id: String, access_key_secret: String) -> Result<Self> {
        Self::builder(access_key_id, access_key_secret).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(access_key_id: String, access_key_secret: String) -> AliyunProviderBuilder {
        AliyunProviderBuilder::new(access_key_id, access_key_secret)
    }

    /// API endpoint host this provider signs for.
    pub fn host(&self) -> &str {
        &self.host
    }
}
