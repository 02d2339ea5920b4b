//! Trait 定义
//!
//! 平台层（或测试）注入具体实现。

mod record_probe;

pub use record_probe::RecordProbe;
