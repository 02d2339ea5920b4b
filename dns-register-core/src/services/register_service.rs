//! 批量注册服务
//!
//! 逐行处理输入：校验域名 -> 拆分 -> 查询已有记录 -> 确定类型 -> 按策略创建。

use std::sync::Arc;

use dns_register_provider::DnsProvider;

use crate::error::{CoreError, CoreResult};
use crate::services::infer_record_type;
use crate::traits::RecordProbe;
use crate::types::{
    DnsIntent, DnsRecordType, PaginationParams, RecordSpec, RegisterOutcome, ResultMap,
};
use crate::utils::{is_domain, parse_content, split_domain};

/// 查询已有记录时只看第一页
const EXISTING_RECORDS_PAGE_SIZE: u32 = 20;

/// 批量注册服务
pub struct RegisterService {
    provider: Arc<dyn DnsProvider>,
    probe: Arc<dyn RecordProbe>,
}

impl RegisterService {
    /// 创建注册服务实例
    #[must_use]
    pub fn new(provider: Arc<dyn DnsProvider>, probe: Arc<dyn RecordProbe>) -> Self {
        Self { provider, probe }
    }

    /// 当前使用的 provider 标识
    pub fn provider_id(&self) -> &'static str {
        self.provider.id()
    }

    /// 处理整段输入，返回 完整域名 -> 状态 的映射
    ///
    /// 行按输入顺序逐条处理，每条只尝试一次。格式不对的行直接丢弃；
    /// 没有子域名的域名跳过且不写入结果。
    pub async fn register(&self, raw: &str, single_record: bool) -> ResultMap {
        let intents = parse_content(raw);
        log::info!(
            "Registering {} line(s) via {} (single_record={single_record})",
            intents.len(),
            self.provider.id()
        );

        let mut results = ResultMap::new();
        for intent in intents {
            match self.register_intent(&intent, single_record).await {
                Ok(RegisterOutcome::NoSubdomain) => {
                    log::warn!("{} has no subdomain, skipped", intent.full_domain);
                }
                Ok(outcome) => {
                    log::info!("{}: {outcome}", intent.full_domain);
                    results.insert(intent.full_domain, outcome.to_string());
                }
                Err(e) => {
                    let detail = e
                        .provider_error()
                        .map_or_else(String::new, |pe| format!(" ({pe})"));
                    if e.is_expected() {
                        log::warn!("{}: {e}{detail}", intent.full_domain);
                    } else {
                        log::error!("{}: {e}{detail}", intent.full_domain);
                    }
                    results.insert(intent.full_domain, e.to_string());
                }
            }
        }

        results
    }

    /// 处理单条意图
    pub async fn register_intent(
        &self,
        intent: &DnsIntent,
        single_record: bool,
    ) -> CoreResult<RegisterOutcome> {
        let full_domain = intent.full_domain.as_str();

        if !is_domain(full_domain) {
            return Err(CoreError::InvalidDomain(full_domain.to_string()));
        }

        let split = split_domain(full_domain);
        if !split.has_subdomain() {
            return Ok(RegisterOutcome::NoSubdomain);
        }

        let params = PaginationParams {
            page: 1,
            page_size: EXISTING_RECORDS_PAGE_SIZE,
        };
        let existing = self
            .provider
            .describe_subdomain_records(full_domain, &params)
            .await
            .map_err(CoreError::LookupFailed)?;

        let record_type = self.resolve_record_type(intent).await?;

        if existing.total_count > 0 && !single_record {
            log::debug!(
                "{full_domain} already has {} record(s), not creating",
                existing.total_count
            );
            return Ok(RegisterOutcome::AlreadyExists);
        }

        let spec = RecordSpec::new(split.subdomain(), intent.value.clone(), record_type);
        let record_id = self
            .provider
            .create_record(&split.registrable_domain, &spec)
            .await
            .map_err(CoreError::CreateFailed)?;

        Ok(RegisterOutcome::Created { record_id })
    }

    /// 显式类型必须是支持的类型；未指定时通过 DNS 探测推断
    async fn resolve_record_type(&self, intent: &DnsIntent) -> CoreResult<DnsRecordType> {
        match intent.record_type.as_deref() {
            Some(explicit) => explicit
                .parse::<DnsRecordType>()
                .map_err(|_| CoreError::InvalidRecordType(explicit.to_string())),
            None => infer_record_type(&intent.value, self.probe.as_ref())
                .await
                .ok_or_else(|| CoreError::InvalidRecordType(intent.value.clone())),
        }
    }
}
