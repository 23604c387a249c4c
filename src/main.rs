use agent_directory::application::{
    ports::{time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use agent_directory::config::AppConfig;
use agent_directory::domain::{
    listing::{ListingReadRepository, ListingWriteRepository},
    slug::SlugIndex,
    taxonomy::TermRepository,
};
use agent_directory::infrastructure::{
    database,
    repositories::{
        SqliteListingReadRepository, SqliteListingWriteRepository, SqliteSlugIndex,
        SqliteTermRepository,
    },
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use agent_directory::presentation::http::{routes::build_router, state::HttpState};
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

    let pool =
        database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let listing_write_repo: Arc<dyn ListingWriteRepository> =
        Arc::new(SqliteListingWriteRepository::new(Arc::clone(&pool)));
    let listing_read_repo: Arc<dyn ListingReadRepository> =
        Arc::new(SqliteListingReadRepository::new(Arc::clone(&pool)));
    let term_repo: Arc<dyn TermRepository> = Arc::new(SqliteTermRepository::new(Arc::clone(&pool)));
    let slug_index: Arc<dyn SlugIndex> = Arc::new(SqliteSlugIndex::new(Arc::clone(&pool)));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::default());

    let services = Arc::new(ApplicationServices::new(
        listing_write_repo,
        listing_read_repo,
        term_repo,
        slug_index,
        clock,
        slugger,
        config.slug_options().clone(),
    )?);

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

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
            tracing::error!(error = %err, "failed to install CTRL+C handler");
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
