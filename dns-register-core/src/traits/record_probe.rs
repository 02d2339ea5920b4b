//! DNS 探测 Trait

use async_trait::async_trait;

/// Live DNS lookups used to guess a record type from a value.
///
/// Every method answers "does this name have at least one such record?".
/// A failed or timed-out lookup is a plain `false`; nothing is propagated.
#[async_trait]
pub trait RecordProbe: Send + Sync {
    /// At least one NS record.
    async fn has_ns(&self, name: &str) -> bool;

    /// At least one MX record.
    async fn has_mx(&self, name: &str) -> bool;

    /// The name has a non-empty canonical name.
    ///
    /// True for a name that owns a CNAME record and for any name that resolves to
    /// addresses (its canonical name is then itself).
    async fn has_canonical_name(&self, name: &str) -> bool;

    /// At least one TXT record.
    async fn has_txt(&self, name: &str) -> bool;
}
