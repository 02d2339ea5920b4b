//! hickory-resolver 实现的 [`RecordProbe`]

use async_trait::async_trait;
use hickory_resolver::{
    TokioResolver,
    config::{ResolverConfig, ResolverOpts},
    name_server::TokioConnectionProvider,
    proto::rr::RecordType,
};

use crate::traits::RecordProbe;

/// Probe backed by a hickory `TokioResolver`.
///
/// On Unix/Windows the resolver uses the host system configuration
/// (e.g. `/etc/resolv.conf`). If that cannot be loaded it falls back to
/// Hickory's default upstream set (Google Public DNS).
pub struct HickoryProbe {
    resolver: TokioResolver,
}

impl HickoryProbe {
    /// Build a probe from the host system DNS configuration (with fallback).
    pub fn system() -> Self {
        Self {
            resolver: build_system_resolver(),
        }
    }

    /// Wrap an already configured resolver.
    pub fn from_resolver(resolver: TokioResolver) -> Self {
        Self { resolver }
    }
}

impl Default for HickoryProbe {
    fn default() -> Self {
        Self::system()
    }
}

fn build_system_resolver() -> TokioResolver {
    #[cfg(any(unix, target_os = "windows"))]
    {
        match TokioResolver::builder_tokio() {
            Ok(builder) => return builder.build(),
            Err(e) => {
                log::warn!(
                    "Failed to load system DNS configuration, falling back to defaults: {e}"
                );
            }
        }
    }

    TokioResolver::builder_with_config(
        ResolverConfig::default(),
        TokioConnectionProvider::default(),
    )
    .with_options(ResolverOpts::default())
    .build()
}

#[async_trait]
impl RecordProbe for HickoryProbe {
    async fn has_ns(&self, name: &str) -> bool {
        match self.resolver.ns_lookup(name).await {
            Ok(response) => response.iter().next().is_some(),
            Err(e) => {
                log::trace!("NS lookup for {name} failed: {e}");
                false
            }
        }
    }

    async fn has_mx(&self, name: &str) -> bool {
        match self.resolver.mx_lookup(name).await {
            Ok(response) => response.iter().next().is_some(),
            Err(e) => {
                log::trace!("MX lookup for {name} failed: {e}");
                false
            }
        }
    }

    async fn has_canonical_name(&self, name: &str) -> bool {
        let owns_cname = self
            .resolver
            .lookup(name, RecordType::CNAME)
            .await
            .is_ok_and(|response| {
                response
                    .record_iter()
                    .any(|record| record.data().as_cname().is_some())
            });
        if owns_cname {
            return true;
        }

        // 能解析出地址的名字，规范名就是它自己
        match self.resolver.lookup_ip(name).await {
            Ok(response) => response.iter().next().is_some(),
            Err(e) => {
                log::trace!("address lookup for {name} failed: {e}");
                false
            }
        }
    }

    async fn has_txt(&self, name: &str) -> bool {
        match self.resolver.txt_lookup(name).await {
            Ok(response) => response.iter().next().is_some(),
            Err(e) => {
                log::trace!("TXT lookup for {name} failed: {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_probe_builds() {
        // Should not panic -- falls back to defaults without system config
        let _probe = HickoryProbe::system();
    }

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn reserved_name_has_nothing() {
        // .invalid 永远不会被解析（RFC 2606）
        let probe = HickoryProbe::system();
        assert!(!probe.has_ns("nothing.invalid").await);
        assert!(!probe.has_txt("nothing.invalid").await);
    }

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn public_zone_has_ns_and_mx() {
        let probe = HickoryProbe::system();
        assert!(probe.has_ns("google.com").await);
        assert!(probe.has_mx("google.com").await);
        assert!(probe.has_canonical_name("www.google.com").await);
    }
}
