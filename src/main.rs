// src/main.rs
use anyhow::Result;
use slugtable::application::{ports::time::Clock, services::ApplicationServices};
use slugtable::config::AppConfig;
use slugtable::domain::{
    category::{CategoryReadRepository, CategoryWriteRepository},
    slug::SlugScope,
};
use slugtable::infrastructure::{
    database,
    repositories::{SqliteCategoryReadRepository, SqliteCategoryWriteRepository},
    time::SystemClock,
};
use slugtable::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let category_write_repo: Arc<dyn CategoryWriteRepository> =
        Arc::new(SqliteCategoryWriteRepository::new(Arc::clone(&pool)));
    let category_reader = Arc::new(SqliteCategoryReadRepository::new(Arc::clone(&pool)));
    let category_read_repo: Arc<dyn CategoryReadRepository> = category_reader.clone();
    let slug_scope: Arc<dyn SlugScope> = category_reader;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        category_write_repo,
        category_read_repo,
        slug_scope,
        clock,
        config.slug_config().clone(),
        config.table_config().clone(),
    ));

    let app = build_router(HttpState { services });

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        separator = %config.slug_config().separator(),
        strategy = %config.slug_config().strategy(),
        "listening on {address}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
