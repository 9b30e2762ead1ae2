use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use study_abroad_api::adapters::http::rate_limit::RateLimiter;
use study_abroad_api::domain::ports::Storage;
use study_abroad_api::utils::{logger, validation::Validate};
use study_abroad_api::{router, serve, AppConfig, AppState, CatalogService, CliArgs, MemStorage};
use tokio::net::TcpListener;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let mut config = match AppConfig::from_file_or_default(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    args.apply_overrides(&mut config);

    logger::init_logger(&config.logging.level, config.log_format(), args.verbose);
    tracing::info!("Starting study-abroad-api");
    if args.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let storage = Arc::new(MemStorage::with_seed(config.catalog.seed_sample_programs));
    storage.init().await.context("initializing storage")?;

    let state = AppState {
        service: CatalogService::new(Arc::clone(&storage)),
        limiter: Arc::new(RateLimiter::new(
            config.rate_limit.max_requests,
            config.rate_limit_window(),
        )),
        trust_forwarded_for: config.rate_limit.trust_forwarded_for,
    };
    let app = router(state, config.server.static_dir.as_ref().map(PathBuf::from));

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    tracing::info!("Listening on http://{}", addr);

    serve(listener, app, shutdown_signal())
        .await
        .context("serving HTTP")?;

    storage.close().await?;
    tracing::info!("Server stopped");
    Ok(())
}
