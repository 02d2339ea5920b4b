//! Provider factory.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::AliyunProvider;
use crate::traits::DnsProvider;
use crate::types::ProviderCredentials;

/// Creates a [`DnsProvider`] instance from the given credentials.
///
/// The returned provider is wrapped in `Arc<dyn DnsProvider>` so it can be
/// shared across request handlers. Empty credential fields are rejected with
/// [`ProviderError::MissingCredential`](crate::ProviderError::MissingCredential).
///
/// # Examples
///
/// ```rust,no_run
/// use dns_register_provider::{create_provider, ProviderCredentials};
///
/// let provider = create_provider(ProviderCredentials {
///     access_key_id: "your-access-key-id".to_string(),
///     access_key_secret: "your-access-key-secret".to_string(),
///     region_id: None,
/// })?;
/// # Ok::<(), dns_register_provider::ProviderError>(())
/// ```
pub fn create_provider(credentials: ProviderCredentials) -> Result<Arc<dyn DnsProvider>> {
    let ProviderCredentials {
        access_key_id,
        access_key_secret,
        region_id,
    } = credentials;

    let mut builder = AliyunProvider::builder(access_key_id, access_key_secret);
    if let Some(region_id) = region_id {
        builder = builder.region(region_id);
    }
    Ok(Arc::new(builder.build()?))
}
