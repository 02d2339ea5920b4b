//! 集成测试公共部分：从环境变量读取真实账号

#![allow(dead_code)]

use std::env;
use std::fmt::Debug;
use std::sync::Arc;

use dns_register_provider::{DnsProvider, ProviderCredentials, create_provider};

pub const KEY_ID_VAR: &str = "ALIYUN_ACCESS_KEY_ID";
pub const SECRET_VAR: &str = "ALIYUN_ACCESS_KEY_SECRET";
pub const REGION_VAR: &str = "ALIYUN_REGION";
pub const DOMAIN_VAR: &str = "TEST_DOMAIN";
/// 设置后才允许真实创建记录
pub const ALLOW_CREATE_VAR: &str = "ALIYUN_ALLOW_CREATE";

/// 真实账号 + 用于测试的主域名
pub struct LiveAccount {
    pub provider: Arc<dyn DnsProvider>,
    pub domain: String,
}

impl LiveAccount {
    /// 缺少任一必需变量时返回 `None`，并说明缺了哪个
    pub fn from_env() -> Option<Self> {
        let missing: Vec<&str> = [KEY_ID_VAR, SECRET_VAR, DOMAIN_VAR]
            .into_iter()
            .filter(|var| !env::var(var).is_ok_and(|v| !v.trim().is_empty()))
            .collect();
        if !missing.is_empty() {
            eprintln!("skipped: missing {}", missing.join(", "));
            return None;
        }

        let credentials = ProviderCredentials {
            access_key_id: env::var(KEY_ID_VAR).ok()?,
            access_key_secret: env::var(SECRET_VAR).ok()?,
            region_id: env::var(REGION_VAR).ok(),
        };
        let provider = ok_or_fail(create_provider(credentials), "create_provider");
        let domain = env::var(DOMAIN_VAR).ok()?;
        Some(Self { provider, domain })
    }

    /// `<label>.<domain>`
    pub fn fqdn(&self, label: &str) -> String {
        format!("{label}.{}", self.domain)
    }
}

/// 环境不完整时直接结束当前测试
#[macro_export]
macro_rules! live_account_or_skip {
    () => {
        match common::LiveAccount::from_env() {
            Some(account) => account,
            None => return,
        }
    };
}

/// 不会与已有记录冲突的标签，如 `_dnsreg-1a2b3c4d`
pub fn unique_label() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("_dnsreg-{}", &id[..8])
}

pub fn ok_or_fail<T, E: Debug>(res: Result<T, E>, what: &str) -> T {
    match res {
        Ok(v) => v,
        Err(e) => panic!("{what} failed: {e:?}"),
    }
}
