//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dns_register_provider::{
    DnsProvider, DnsRecord, PaginatedResponse, PaginationParams, ProviderError, RecordSpec,
    Result as ProviderResult,
};
use tokio::sync::Mutex;

use crate::traits::RecordProbe;
use crate::types::DnsRecordType;

/// 构造一条已有记录
pub fn existing_record(name: &str, record_type: &str, value: &str) -> DnsRecord {
    DnsRecord {
        id: format!("existing-{name}"),
        name: name.to_string(),
        record_type: record_type.to_string(),
        value: value.to_string(),
        ttl: 600,
        line: None,
        created_at: None,
    }
}

// ===== MockDnsProvider =====

/// 内存版 provider：记录所有调用，新建的记录会出现在后续查询里
pub struct MockDnsProvider {
    existing: Mutex<HashMap<String, Vec<DnsRecord>>>,
    record_ids: Mutex<VecDeque<String>>,
    describe_error: Option<ProviderError>,
    create_error: Option<ProviderError>,
    described: Mutex<Vec<String>>,
    created: Mutex<Vec<(String, RecordSpec)>>,
}

impl MockDnsProvider {
    pub fn new() -> Self {
        Self {
            existing: Mutex::new(HashMap::new()),
            record_ids: Mutex::new(VecDeque::new()),
            describe_error: None,
            create_error: None,
            described: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
        }
    }

    /// 预置某个完整域名下的已有记录
    pub fn with_existing(mut self, full_domain: &str, record: DnsRecord) -> Self {
        self.existing
            .get_mut()
            .entry(full_domain.to_string())
            .or_default()
            .push(record);
        self
    }

    /// 依次返回的记录 ID，用完后回落到 `rid<n>`
    pub fn with_record_ids<const N: usize>(mut self, ids: [&str; N]) -> Self {
        self.record_ids
            .get_mut()
            .extend(ids.iter().map(|id| (*id).to_string()));
        self
    }

    pub fn with_describe_error(mut self, err: ProviderError) -> Self {
        self.describe_error = Some(err);
        self
    }

    pub fn with_create_error(mut self, err: ProviderError) -> Self {
        self.create_error = Some(err);
        self
    }

    /// 查询过的完整域名（按调用顺序）
    pub async fn described(&self) -> Vec<String> {
        self.described.lock().await.clone()
    }

    /// 创建调用的 (主域名, 记录) 列表
    pub async fn created(&self) -> Vec<(String, RecordSpec)> {
        self.created.lock().await.clone()
    }
}

#[async_trait]
impl DnsProvider for MockDnsProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn validate_credentials(&self) -> ProviderResult<bool> {
        Ok(true)
    }

    async fn describe_subdomain_records(
        &self,
        sub_domain: &str,
        params: &PaginationParams,
    ) -> ProviderResult<PaginatedResponse<DnsRecord>> {
        self.described.lock().await.push(sub_domain.to_string());

        if let Some(err) = &self.describe_error {
            return Err(err.clone());
        }

        let items = self
            .existing
            .lock()
            .await
            .get(sub_domain)
            .cloned()
            .unwrap_or_default();
        let total = u32::try_from(items.len()).unwrap_or(u32::MAX);
        Ok(PaginatedResponse::new(
            items,
            params.page,
            params.page_size,
            total,
        ))
    }

    async fn create_record(&self, domain: &str, spec: &RecordSpec) -> ProviderResult<String> {
        if let Some(err) = &self.create_error {
            return Err(err.clone());
        }

        let mut created = self.created.lock().await;
        created.push((domain.to_string(), spec.clone()));

        let record_id = self
            .record_ids
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| format!("rid{}", created.len()));

        let full_domain = format!("{}.{domain}", spec.name);
        self.existing
            .lock()
            .await
            .entry(full_domain)
            .or_default()
            .push(DnsRecord {
                id: record_id.clone(),
                name: spec.name.clone(),
                record_type: spec.record_type.to_string(),
                value: spec.value.clone(),
                ttl: spec.ttl,
                line: spec.policy_type.clone(),
                created_at: None,
            });

        Ok(record_id)
    }
}

// ===== StaticProbe =====

/// 固定答案的 DNS 探测，统计调用次数
pub struct StaticProbe {
    answers: HashMap<DnsRecordType, HashSet<String>>,
    calls: AtomicUsize,
}

impl StaticProbe {
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// 让 `name` 在 `record_type` 对应的探测上命中
    pub fn with(mut self, record_type: DnsRecordType, name: &str) -> Self {
        self.answers
            .entry(record_type)
            .or_default()
            .insert(name.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn answer(&self, record_type: DnsRecordType, name: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answers
            .get(&record_type)
            .is_some_and(|names| names.contains(name))
    }
}

#[async_trait]
impl RecordProbe for StaticProbe {
    async fn has_ns(&self, name: &str) -> bool {
        self.answer(DnsRecordType::Ns, name)
    }

    async fn has_mx(&self, name: &str) -> bool {
        self.answer(DnsRecordType::Mx, name)
    }

    async fn has_canonical_name(&self, name: &str) -> bool {
        self.answer(DnsRecordType::Cname, name)
    }

    async fn has_txt(&self, name: &str) -> bool {
        self.answer(DnsRecordType::Txt, name)
    }
}
