//! 记录类型推断

use std::net::IpAddr;

use crate::traits::RecordProbe;
use crate::types::DnsRecordType;

/// 根据记录值推断记录类型，按以下顺序取第一个命中的：
///
/// 1. IPv4/IPv6 字面量 -> `A`（不发起查询）
/// 2. 有 NS 记录 -> `NS`
/// 3. 有 MX 记录 -> `MX`
/// 4. 有规范名 -> `CNAME`
/// 5. 有 TXT 记录 -> `TXT`
///
/// 都不命中返回 `None`。
pub async fn infer_record_type(value: &str, probe: &dyn RecordProbe) -> Option<DnsRecordType> {
    // IPv6 同样按 A 处理
    if value.parse::<IpAddr>().is_ok() {
        return Some(DnsRecordType::A);
    }

    if probe.has_ns(value).await {
        return Some(DnsRecordType::Ns);
    }
    if probe.has_mx(value).await {
        return Some(DnsRecordType::Mx);
    }
    if probe.has_canonical_name(value).await {
        return Some(DnsRecordType::Cname);
    }
    if probe.has_txt(value).await {
        return Some(DnsRecordType::Txt);
    }

    log::debug!("no record type inferred for {value}");
    None
}
