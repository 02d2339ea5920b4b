//! # dns-register-provider
//!
//! Authoritative DNS backend used by the bulk registration service.
//!
//! Only [Aliyun DNS](https://www.aliyun.com/product/dns) is implemented. It is
//! reached through the RPC API (version `2015-01-09`) and authenticated with
//! ACS3-HMAC-SHA256 (V3) signing.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls. Recommended for static builds and cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns_register_provider::{
//!     create_provider, DnsRecordType, PaginationParams, ProviderCredentials, RecordSpec,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(ProviderCredentials {
//!         access_key_id: "your-access-key-id".to_string(),
//!         access_key_secret: "your-access-key-secret".to_string(),
//!         region_id: None,
//!     })?;
//!
//!     // What already exists under www.example.com?
//!     let existing = provider
//!         .describe_subdomain_records("www.example.com", &PaginationParams::default())
//!         .await?;
//!     println!("{} existing records", existing.total_count);
//!
//!     // Add an A record to the example.com zone.
//!     let spec = RecordSpec::new("www", "1.2.3.4", DnsRecordType::A);
//!     let record_id = provider.create_record("example.com", &spec).await?;
//!     println!("created {record_id}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//! Aliyun error codes are mapped onto structured variants, for example:
//!
//! - [`ProviderError::InvalidCredentials`]: authentication failed
//! - [`ProviderError::DomainNotFound`]: the zone is not in this account
//! - [`ProviderError::RecordExists`]: an identical record is already present
//! - [`ProviderError::RateLimited`]: API rate limit exceeded
//!
//! Requests are sent once; nothing is retried automatically.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

pub use error::{ProviderError, Result};

pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::DnsProvider;

pub use types::{
    DEFAULT_TTL, DnsRecord, DnsRecordType, PaginatedResponse, PaginationParams,
    ProviderCredentials, RecordSpec,
};

pub use utils::log_sanitizer::mask_access_key;

pub use providers::{AliyunProvider, AliyunProviderBuilder};
