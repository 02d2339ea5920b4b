//! DNS Register Core Library
//!
//! Platform-independent logic behind the bulk registration endpoint:
//! - line parsing (`value domain [type]`)
//! - domain validation and decomposition
//! - record-type inference through a pluggable [`RecordProbe`]
//! - reconciliation against the provider zone ([`RegisterService`])
//!
//! The provider and the probe are injected as trait objects, so the web layer
//! (or a test) decides what actually talks to Aliyun and to DNS.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{HickoryProbe, RegisterService, infer_record_type};
pub use traits::RecordProbe;
pub use types::{DnsIntent, DomainSplit, RegisterOutcome, ResultMap};
