//! 阿里云 API 类型定义和辅助函数

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write;

use crate::error::{ProviderError, Result};

// ============ RFC3986 URL 编码 ============

/// RFC3986 URL 编码
pub fn url_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(char::from(byte));
            }
            _ => {
                let _ = write!(result, "%{byte:02X}");
            }
        }
    }
    result
}

/// 将请求结构体序列化为按 key 排序的 query string
///
/// 阿里云 RPC 接口的参数都是扁平的标量，嵌套对象和数组不会出现。
pub fn serialize_to_query_string<T: Serialize>(params: &T) -> Result<String> {
    let value = serde_json::to_value(params).map_err(|e| ProviderError::SerializationError {
        detail: e.to_string(),
    })?;

    let serde_json::Value::Object(map) = value else {
        return Err(ProviderError::SerializationError {
            detail: "request parameters must serialize to an object".to_string(),
        });
    };

    let flat: BTreeMap<String, String> = map
        .into_iter()
        .filter_map(|(k, v)| {
            let v = match v {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some((k, v))
        })
        .collect();

    Ok(flat
        .iter()
        .map(|(k, v)| format!("{}={}", url_encode(k), url_encode(v)))
        .collect::<Vec<_>>()
        .join("&"))
}

// ============ 域名相关结构 ============

#[derive(Debug, Deserialize)]
pub struct DescribeDomainsResponse {
    #[serde(rename = "TotalCount")]
    pub total_count: Option<u32>,
}

// ============ 记录相关结构 ============

#[derive(Debug, Deserialize)]
pub struct DescribeSubDomainRecordsResponse {
    #[serde(rename = "TotalCount")]
    pub total_count: Option<u32>,
    #[serde(rename = "PageNumber")]
    pub page_number: Option<u32>,
    #[serde(rename = "PageSize")]
    pub page_size: Option<u32>,
    #[serde(rename = "DomainRecords")]
    pub domain_records: Option<DomainRecordsWrapper>,
}

#[derive(Debug, Deserialize)]
pub struct DomainRecordsWrapper {
    #[serde(rename = "Record")]
    pub record: Option<Vec<AliyunRecord>>,
}

#[derive(Debug, Deserialize)]
pub struct AliyunRecord {
    #[serde(rename = "RecordId")]
    pub record_id: String,
    #[serde(rename = "RR")]
    pub rr: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "TTL")]
    pub ttl: u32,
    #[serde(rename = "Line")]
    pub line: Option<String>,
    #[serde(rename = "CreateTimestamp")]
    pub create_timestamp: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct AddDomainRecordResponse {
    #[serde(rename = "RecordId")]
    pub record_id: String,
}
