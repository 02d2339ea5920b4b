//! Application configuration
//!
//! TOML file first, then environment overrides. Every field has a default, so a
//! missing file (or a missing section) is not an error.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use dns_register_provider::ProviderCredentials;
use serde::{Deserialize, Serialize};

/// Env var naming the config file
pub const CONFIG_PATH_ENV: &str = "DNS_REGISTER_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.toml";

mod defaults {
    pub fn host() -> String {
        "0.0.0.0".to_string()
    }
    pub fn port() -> u16 {
        8080
    }
    pub fn workers() -> usize {
        num_cpus::get()
    }
    pub fn region_id() -> String {
        "cn-hangzhou".to_string()
    }
    pub fn log_level() -> String {
        "info".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "defaults::host")]
    pub host: String,
    #[serde(default = "defaults::port")]
    pub port: u16,
    /// actix worker threads
    #[serde(default = "defaults::workers")]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::host(),
            port: defaults::port(),
            workers: defaults::workers(),
        }
    }
}

/// Aliyun DNS credentials and endpoint
#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub access_key_id: String,
    #[serde(default)]
    pub access_key_secret: String,
    #[serde(default = "defaults::region_id")]
    pub region_id: String,
    /// Call `DescribeDomains` once before accepting traffic
    #[serde(default)]
    pub validate_on_startup: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            access_key_id: String::new(),
            access_key_secret: String::new(),
            region_id: defaults::region_id(),
            validate_on_startup: false,
        }
    }
}

// 不打印 secret
impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field(
                "access_key_id",
                &dns_register_provider::mask_access_key(&self.access_key_id),
            )
            .field("access_key_secret", &"****")
            .field("region_id", &self.region_id)
            .field("validate_on_startup", &self.validate_on_startup)
            .finish()
    }
}

impl ProviderConfig {
    pub fn credentials(&self) -> ProviderCredentials {
        ProviderCredentials {
            access_key_id: self.access_key_id.clone(),
            access_key_secret: self.access_key_secret.clone(),
            region_id: Some(self.region_id.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` wins when set
    #[serde(default = "defaults::log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    /// Write daily-rolling files here instead of stdout
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
            format: LogFormat::Text,
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// File the values were read from, `None` when running on defaults
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl AppConfig {
    /// Load from `$DNS_REGISTER_CONFIG` (or `config.toml`) and apply env overrides.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

        let mut config = if path.exists() {
            Self::from_toml_file(&path)?
        } else {
            Self::default()
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Environment variables override file values. Blank values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("ALIYUN_ACCESS_KEY") {
            self.provider.access_key_id = v;
        }
        if let Some(v) = get("ALIYUN_SECRET") {
            self.provider.access_key_secret = v;
        }
        if let Some(v) = get("ALIYUN_REGION") {
            self.provider.region_id = v;
        }
        if let Some(v) = get("DNS_REGISTER_HOST") {
            self.server.host = v;
        }
        if let Some(v) = get("DNS_REGISTER_PORT") {
            self.server.port = v
                .trim()
                .parse()
                .with_context(|| format!("DNS_REGISTER_PORT must be a port number, got {v:?}"))?;
        }
        Ok(())
    }

    /// Checks that must pass before the server starts.
    pub fn validate(&self) -> Result<()> {
        if self.provider.access_key_id.trim().is_empty()
            || self.provider.access_key_secret.trim().is_empty()
        {
            bail!(
                "Aliyun credentials are missing: set [provider] access_key_id/access_key_secret \
                 or ALIYUN_ACCESS_KEY/ALIYUN_SECRET"
            );
        }
        if self.server.workers == 0 {
            bail!("[server] workers must be at least 1");
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }
}
