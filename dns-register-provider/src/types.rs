use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Default TTL (seconds) applied to every record created through this crate.
pub const DEFAULT_TTL: u32 = 600;

// ============ Pagination ============

/// Pagination parameters for list operations.
///
/// Pages are 1-indexed.
///
/// # Default
///
/// The default is `page = 1, page_size = 20`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of items per page.
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
        }
    }
}

impl PaginationParams {
    /// Clamp pagination values to valid ranges.
    ///
    /// - `page` is clamped to `>= 1`
    /// - `page_size` is clamped to `1..=max_page_size`
    #[must_use]
    pub fn validated(&self, max_page_size: u32) -> Self {
        Self {
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, max_page_size),
        }
    }
}

/// A paginated response wrapper.
///
/// Contains the current page of items along with pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Items in the current page.
    pub items: Vec<T>,
    /// Current page number.
    pub page: u32,
    /// Page size used for this request.
    pub page_size: u32,
    /// Total number of items across all pages.
    pub total_count: u32,
    /// Whether there are more pages after this one.
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response, automatically computing [`has_more`](Self::has_more).
    pub fn new(items: Vec<T>, page: u32, page_size: u32, total_count: u32) -> Self {
        let has_more = page.saturating_mul(page_size) < total_count;
        Self {
            items,
            page,
            page_size,
            total_count,
            has_more,
        }
    }
}

// ============ DNS Record Types ============

/// DNS record types that can be registered.
///
/// Serialized as uppercase strings (`"A"`, `"NS"`, `"MX"`, `"CNAME"`, `"TXT"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    /// Address record (IPv4 or IPv6 literal value).
    A,
    /// Name server record.
    Ns,
    /// Mail exchange record.
    Mx,
    /// Canonical name (alias) record.
    Cname,
    /// Text record.
    Txt,
}

impl DnsRecordType {
    /// Upper-case mnemonic as used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Ns => "NS",
            Self::Mx => "MX",
            Self::Cname => "CNAME",
            Self::Txt => "TXT",
        }
    }
}

impl std::fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DnsRecordType {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "NS" => Ok(Self::Ns),
            "MX" => Ok(Self::Mx),
            "CNAME" => Ok(Self::Cname),
            "TXT" => Ok(Self::Txt),
            _ => Err(ProviderError::UnsupportedRecordType {
                record_type: s.to_string(),
            }),
        }
    }
}

/// An existing DNS record as reported by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    /// Provider-specific record identifier.
    pub id: String,
    /// Host record relative to the zone (e.g., `"www"`).
    pub name: String,
    /// Record type as reported by the provider. Kept raw because existing zones may hold
    /// types this crate never creates (AAAA, SRV, ...).
    pub record_type: String,
    /// Record value.
    pub value: String,
    /// Time to live in seconds.
    pub ttl: u32,
    /// Resolution line / policy, if the provider has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    /// When the record was created, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Specification of a record to create.
///
/// Built by the caller right before [`create_record`](crate::DnsProvider::create_record);
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSpec {
    /// Host record relative to the zone (subdomain labels joined with `.`).
    pub name: String,
    /// Record value.
    pub value: String,
    /// Record type.
    pub record_type: DnsRecordType,
    /// Time to live in seconds.
    pub ttl: u32,
    /// Resolution policy (Aliyun "line"); `None` uses the provider default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<String>,
}

impl RecordSpec {
    /// Create a spec with the default TTL and no policy.
    pub fn new(name: impl Into<String>, value: impl Into<String>, record_type: DnsRecordType) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            record_type,
            ttl: DEFAULT_TTL,
            policy_type: None,
        }
    }
}

// ============ Credentials ============

/// Credentials used to build the DNS provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCredentials {
    /// Aliyun Access Key ID.
    pub access_key_id: String,
    /// Aliyun Access Key Secret.
    pub access_key_secret: String,
    /// Region whose DNS endpoint is used (e.g. `"cn-hangzhou"`). `None` uses the default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}
