//! HTTP entry point for the bulk DNS registration service.
//!
//! Loads configuration, installs tracing, builds the Aliyun provider and the
//! DNS probe once, then serves the registration API with actix-web.

mod config;
mod handlers;
mod logging;
mod middleware;
mod response;
mod state;


use std::process::ExitCode;
use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use anyhow::{Context, Result, bail};
use dns_register_core::{HickoryProbe, RecordProbe, RegisterService};
use dns_register_provider::{create_provider, mask_access_key};

use config::AppConfig;
use middleware::RequestTracing;
use state::AppState;

#[actix_web::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    // guard 必须活到进程结束，否则缓冲中的日志会丢失
    let _log_guard = match logging::init(&config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("{e:#}");
        return ExitCode::FAILURE;
    }

    tracing::info!("Server stopped");
    ExitCode::SUCCESS
}

async fn run(config: AppConfig) -> Result<()> {
    match &config.source {
        Some(path) => tracing::info!("Loaded configuration from {}", path.display()),
        None => tracing::info!("No configuration file found, using defaults and environment"),
    }

    config.validate()?;

    tracing::info!(
        "Using Aliyun DNS in {} with access key {}",
        config.provider.region_id,
        mask_access_key(&config.provider.access_key_id)
    );
    let provider =
        create_provider(config.provider.credentials()).context("failed to create DNS provider")?;

    if config.provider.validate_on_startup {
        let valid = provider
            .validate_credentials()
            .await
            .context("credential validation request failed")?;
        if !valid {
            bail!("Aliyun rejected the configured credentials");
        }
        tracing::info!("Provider credentials validated");
    }

    let probe: Arc<dyn RecordProbe> = Arc::new(HickoryProbe::system());
    let service = Arc::new(RegisterService::new(provider, probe));
    let state = web::Data::new(AppState::new(service));

    let (host, port) = config.bind_addr();
    tracing::info!(
        "Starting HTTP server on {host}:{port} with {} workers",
        config.server.workers
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(RequestTracing)
            .configure(handlers::configure)
    })
    .workers(config.server.workers)
    .bind((host.as_str(), port))
    .with_context(|| format!("failed to bind {host}:{port}"))?
    .run()
    .await
    .context("HTTP server terminated with an error")?;

    Ok(())
}
