//! tracing 初始化
//!
//! 库 crate 通过 `log` 输出，这里由 tracing-subscriber 的 tracing-log 桥接统一收集。

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::time::ChronoLocal, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingConfig};

const LOG_FILE_PREFIX: &str = "dns-register.log";

/// `RUST_LOG` 优先，其次是配置里的 level
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directive) if !directive.trim().is_empty() => EnvFilter::try_new(&directive)
            .with_context(|| format!("invalid RUST_LOG directive {directive:?}")),
        _ => EnvFilter::try_new(&config.level)
            .with_context(|| format!("invalid [logging] level {:?}", config.level)),
    }
}

/// 安装全局 subscriber
///
/// The returned guard flushes the non-blocking writer on drop and must be held
/// for the lifetime of the process.
pub fn init(config: &LoggingConfig) -> Result<WorkerGuard> {
    let filter = build_filter(config)?;

    let (writer, guard, ansi) = match &config.directory {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (writer, guard, false)
        }
        None => {
            let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
            (writer, guard, true)
        }
    };

    let fmt_layer = match config.format {
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_timer(ChronoLocal::rfc_3339())
            .with_ansi(ansi)
            .with_target(true)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .with_timer(ChronoLocal::rfc_3339())
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}
