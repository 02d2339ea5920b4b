//! 日志脱敏
//!
//! 响应体可能很长（TXT 内容、整页记录），AccessKey 不能明文出现在日志里。

use std::borrow::Cow;

/// 日志中保留的响应体最大字节数
const LOG_BODY_LIMIT: usize = 256;

/// AccessKey 保留的前缀字符数
const KEY_VISIBLE_CHARS: usize = 4;

/// 超过上限的内容截断到字符边界，并附上原始长度
pub fn truncate_for_log(s: &str) -> Cow<'_, str> {
    if s.len() <= LOG_BODY_LIMIT {
        return Cow::Borrowed(s);
    }
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= LOG_BODY_LIMIT)
        .last()
        .unwrap_or(0);
    Cow::Owned(format!("{}... ({} bytes total)", &s[..cut], s.len()))
}

/// `LTAI5tXXXX` -> `LTAI****`；不超过前缀长度的 key 全部打码
pub fn mask_access_key(key: &str) -> String {
    match key.char_indices().nth(KEY_VISIBLE_CHARS) {
        Some((idx, _)) => format!("{}****", &key[..idx]),
        None => "*".repeat(key.chars().count()),
    }
}
