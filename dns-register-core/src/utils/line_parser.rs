//! 输入行解析
//!
//! 每行格式为 `value domain [type]`，字段之间任意空白分隔。

use crate::types::DnsIntent;

/// 解析单行
///
/// 空行、字段数不是 2 或 3 的行返回 `None`，调用方直接丢弃。
pub fn parse_line(line: &str) -> Option<DnsIntent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    match fields.as_slice() {
        [value, domain] => Some(DnsIntent {
            value: (*value).to_string(),
            full_domain: (*domain).to_string(),
            record_type: None,
        }),
        [value, domain, record_type] => Some(DnsIntent {
            value: (*value).to_string(),
            full_domain: (*domain).to_string(),
            record_type: Some((*record_type).to_string()),
        }),
        _ => {
            log::debug!("ignoring line with {} fields", fields.len());
            None
        }
    }
}

/// 按行解析整段输入，保持原有顺序
pub fn parse_content(text: &str) -> Vec<DnsIntent> {
    text.split('\n').filter_map(parse_line).collect()
}
