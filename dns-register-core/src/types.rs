//! 类型定义模块

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// Re-export provider 库的公共类型
pub use dns_register_provider::{DnsRecordType, PaginationParams, RecordSpec};

/// 完整域名 -> 状态消息
///
/// 同一域名出现多次时，后处理的行覆盖先前的结果。
pub type ResultMap = HashMap<String, String>;

/// 一行输入解析出的注册意图
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsIntent {
    /// 记录值（IP、主机名或任意文本）
    pub value: String,
    /// 完整域名，例如 `www.api.example.com`
    pub full_domain: String,
    /// 显式指定的记录类型，原样保留，由注册流程负责校验
    pub record_type: Option<String>,
}

/// 完整域名拆分结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSplit {
    /// 主域名之前的标签，保持原顺序；为空表示没有子域名
    pub subdomain_labels: Vec<String>,
    /// 最后两个标签组成的主域名
    pub registrable_domain: String,
}

impl DomainSplit {
    /// 子域名部分（即阿里云的 RR）
    pub fn subdomain(&self) -> String {
        self.subdomain_labels.join(".")
    }

    pub fn has_subdomain(&self) -> bool {
        !self.subdomain_labels.is_empty()
    }
}

/// 单条意图的处理结果（非错误分支）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RegisterOutcome {
    /// 已创建，携带 provider 返回的记录 ID
    Created { record_id: String },
    /// 多记录模式下子域名已有记录，未调用创建
    AlreadyExists,
    /// 域名只有两个标签，跳过且不写入结果
    NoSubdomain,
}

impl fmt::Display for RegisterOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created { record_id } => {
                write!(f, "registration succeeded, recordId:{record_id}")
            }
            Self::AlreadyExists => f.write_str("DNS record already exists"),
            Self::NoSubdomain => f.write_str("no subdomain"),
        }
    }
}
