//! 阿里云 DnsProvider trait 实现

use async_trait::async_trait;
use chrono::DateTime;
use serde::Serialize;

use crate::error::{ProviderError, Result};
use crate::providers::common::normalize_domain_name;
use crate::traits::{DnsProvider, ErrorContext};
use crate::types::{DnsRecord, DnsRecordType, PaginatedResponse, PaginationParams, RecordSpec};
use crate::utils::log_sanitizer::mask_access_key;

use super::{
    AddDomainRecordResponse, AliyunProvider, DEFAULT_MX_PRIORITY, DescribeDomainsResponse,
    DescribeSubDomainRecordsResponse, MAX_PAGE_SIZE,
};

#[derive(Debug, Serialize)]
pub(crate) struct DescribeDomainsRequest {
    #[serde(rename = "PageNumber")]
    page_number: u32,
    #[serde(rename = "PageSize")]
    page_size: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct DescribeSubDomainRecordsRequest {
    #[serde(rename = "SubDomain")]
    sub_domain: String,
    #[serde(rename = "PageNumber")]
    page_number: u32,
    #[serde(rename = "PageSize")]
    page_size: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct AddDomainRecordRequest {
    #[serde(rename = "DomainName")]
    domain_name: String,
    #[serde(rename = "RR")]
    rr: String,
    #[serde(rename = "Type")]
    record_type: String,
    #[serde(rename = "Value")]
    value: String,
    #[serde(rename = "TTL")]
    ttl: u32,
    /// 解析线路，缺省时使用阿里云默认线路
    #[serde(rename = "Line", skip_serializing_if = "Option::is_none")]
    line: Option<String>,
    /// 仅 MX 记录携带
    #[serde(rename = "Priority", skip_serializing_if = "Option::is_none")]
    priority: Option<u16>,
}

impl DescribeSubDomainRecordsRequest {
    pub(crate) fn new(sub_domain: &str, params: &PaginationParams) -> Self {
        let params = params.validated(MAX_PAGE_SIZE);
        Self {
            sub_domain: normalize_domain_name(sub_domain),
            page_number: params.page,
            page_size: params.page_size,
        }
    }
}

impl AddDomainRecordRequest {
    pub(crate) fn new(domain: &str, spec: &RecordSpec) -> Self {
        Self {
            domain_name: normalize_domain_name(domain),
            rr: spec.name.clone(),
            record_type: spec.record_type.as_str().to_string(),
            value: spec.value.clone(),
            ttl: spec.ttl,
            line: spec.policy_type.clone().filter(|l| !l.is_empty()),
            priority: (spec.record_type == DnsRecordType::Mx).then_some(DEFAULT_MX_PRIORITY),
        }
    }
}

/// 响应 -> 分页结果；分页信息以阿里云回显的为准，缺失时回落到请求值
fn records_page(
    response: DescribeSubDomainRecordsResponse,
    requested_page: u32,
    requested_size: u32,
) -> PaginatedResponse<DnsRecord> {
    let page = response.page_number.unwrap_or(requested_page);
    let page_size = response.page_size.unwrap_or(requested_size);
    let total_count = response.total_count.unwrap_or(0);

    let records = response
        .domain_records
        .and_then(|r| r.record)
        .unwrap_or_default()
        .into_iter()
        .map(|r| DnsRecord {
            id: r.record_id,
            name: r.rr,
            record_type: r.record_type,
            value: r.value,
            ttl: r.ttl,
            line: r.line,
            created_at: r.create_timestamp.and_then(DateTime::from_timestamp_millis),
        })
        .collect();

    PaginatedResponse::new(records, page, page_size, total_count)
}

#[async_trait]
impl DnsProvider for AliyunProvider {
    fn id(&self) -> &'static str {
        "aliyun"
    }

    async fn validate_credentials(&self) -> Result<bool> {
        let req = DescribeDomainsRequest {
            page_number: 1,
            page_size: 1,
        };

        match self
            .request::<DescribeDomainsResponse, _>("DescribeDomains", &req, ErrorContext::default())
            .await
        {
            Ok(resp) => {
                log::info!(
                    "[aliyun] credentials for {} accepted ({} domains)",
                    mask_access_key(&self.access_key_id),
                    resp.total_count.unwrap_or(0)
                );
                Ok(true)
            }
            Err(ProviderError::InvalidCredentials { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn describe_subdomain_records(
        &self,
        sub_domain: &str,
        params: &PaginationParams,
    ) -> Result<PaginatedResponse<DnsRecord>> {
        let req = DescribeSubDomainRecordsRequest::new(sub_domain, params);
        let (page, page_size) = (req.page_number, req.page_size);

        let response: DescribeSubDomainRecordsResponse = self
            .request(
                "DescribeSubDomainRecords",
                &req,
                ErrorContext::for_domain(sub_domain),
            )
            .await?;

        let result = records_page(response, page, page_size);
        log::debug!(
            "[aliyun] {sub_domain}: {} of {} existing records on page {}",
            result.items.len(),
            result.total_count,
            result.page
        );

        Ok(result)
    }

    async fn create_record(&self, domain: &str, spec: &RecordSpec) -> Result<String> {
        let req = AddDomainRecordRequest::new(domain, spec);

        let response: AddDomainRecordResponse = self
            .request(
                "AddDomainRecord",
                &req,
                ErrorContext::for_record(&req.domain_name, &spec.name),
            )
            .await?;

        log::info!(
            "[aliyun] created {} record {}.{} -> {} (id {})",
            spec.record_type,
            spec.name,
            req.domain_name,
            spec.value,
            response.record_id
        );

        Ok(response.record_id)
    }
}
