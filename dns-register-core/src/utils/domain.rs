//! 域名校验与拆分

use std::sync::LazyLock;

use regex::Regex;

use crate::types::DomainSplit;

/// 至少两个标签，每个标签 1-63 个字母/数字/连字符，顶级域 2-63 个字母。
///
/// 不检查标签首尾的连字符，也不接受末尾的点。
const DOMAIN_PATTERN: &str = r"^(?:[a-zA-Z0-9-]{1,63}\.)+[a-zA-Z]{2,63}$";

static DOMAIN_RE: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(DOMAIN_PATTERN) {
    Ok(re) => Some(re),
    Err(e) => {
        log::error!("domain pattern failed to compile: {e}");
        None
    }
});

/// 校验完整域名格式
pub fn is_domain(s: &str) -> bool {
    DOMAIN_RE.as_ref().is_some_and(|re| re.is_match(s))
}

/// 把完整域名拆成子域名标签和主域名
///
/// 不超过两个标签时没有子域名，主域名即输入本身。
pub fn split_domain(full: &str) -> DomainSplit {
    let labels: Vec<&str> = full.split('.').collect();
    if labels.len() <= 2 {
        return DomainSplit {
            subdomain_labels: Vec::new(),
            registrable_domain: full.to_string(),
        };
    }

    let (sub, root) = labels.split_at(labels.len() - 2);
    DomainSplit {
        subdomain_labels: sub.iter().map(|s| (*s).to_string()).collect(),
        registrable_domain: root.join("."),
    }
}
