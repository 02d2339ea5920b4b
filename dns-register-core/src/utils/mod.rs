//! 纯函数工具：域名校验/拆分、输入行解析

pub mod domain;
pub mod line_parser;

pub use domain::{is_domain, split_domain};
pub use line_parser::{parse_content, parse_line};
