//! DNS Provider 实现

pub(crate) mod common;

mod aliyun;

pub use aliyun::{AliyunProvider, AliyunProviderBuilder};
