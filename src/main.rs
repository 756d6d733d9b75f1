use editorial_core::application::{ports::time::Clock, services::ApplicationServices};
use editorial_core::config::{AppConfig, ArticleStore};
use editorial_core::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use editorial_core::infrastructure::{
    database,
    repositories::{MemoryArticleRepository, PostgresArticleRepository},
    time::SystemClock,
};
use editorial_core::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
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

    let (article_write_repo, article_read_repo): (
        Arc<dyn ArticleWriteRepository>,
        Arc<dyn ArticleReadRepository>,
    ) = match config.article_store() {
        ArticleStore::Postgres => {
            let pool =
                database::init_pool(config.database_url(), config.database_max_connections())
                    .await?;
            database::run_migrations(&pool).await?;
            let repo = Arc::new(PostgresArticleRepository::new(pool));
            let write: Arc<dyn ArticleWriteRepository> = repo.clone();
            let read: Arc<dyn ArticleReadRepository> = repo;
            (write, read)
        }
        ArticleStore::Memory => {
            tracing::warn!("using in-memory article store, data is lost on shutdown");
            let repo = Arc::new(MemoryArticleRepository::new());
            let write: Arc<dyn ArticleWriteRepository> = repo.clone();
            let read: Arc<dyn ArticleReadRepository> = repo;
            (write, read)
        }
    };

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        clock,
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(store = ?config.article_store(), "listening on {address}");

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
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
