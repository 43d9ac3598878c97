use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{routing::get, Json, Router};
use clap::{Parser, Subcommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use star_catalog::api::rest::routes;
use star_catalog::contract::model::{FavoriteTarget, NewUser};
use star_catalog::domain::ports::CallerResolver;
use star_catalog::domain::service::Service;
use star_catalog::infra::identity::StaticCaller;
use star_catalog::infra::storage::migrations::{Migrator, MigratorTrait};
use star_catalog::infra::storage::sea_orm_repo::SeaOrmCatalogRepository;
use star_catalog::infra::upstream::client::SwapiClient;

mod config;
mod logging;

use config::AppConfig;

/// Holocron Server - galaxy catalog API
#[derive(Parser)]
#[command(name = "holocron-server")]
#[command(about = "Holocron Server - galaxy catalog API")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Print the effective configuration as YAML and exit
    Config,
    /// Insert a demo user (with favorites when the catalog has rows)
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.port);

    logging::init(&config.logging.level, cli.verbose)?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Config => {
            println!("{}", config.to_yaml()?);
            Ok(())
        }
        Commands::Seed => seed(config).await,
    }
}

/// Connect to the configured store and bring the schema up to date.
async fn connect(config: &AppConfig) -> Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(config.database.url.clone());
    opts.max_connections(config.database.max_conns)
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    tracing::info!("Connecting to database: {}", config.database.url);
    let db = Database::connect(opts)
        .await
        .with_context(|| format!("failed to connect to {}", config.database.url))?;

    Migrator::up(&db, None)
        .await
        .context("failed to run migrations")?;
    Ok(db)
}

fn build_service(db: DatabaseConnection, config: &AppConfig) -> Result<Arc<Service>> {
    let repo = Arc::new(SeaOrmCatalogRepository::new(db));
    let upstream = Arc::new(SwapiClient::new(&config.catalog.upstream)?);
    Ok(Arc::new(Service::new(repo, upstream)))
}

async fn run_server(config: AppConfig) -> Result<()> {
    tracing::info!("Holocron server starting");

    let db = connect(&config).await?;
    let service = build_service(db, &config)?;
    let caller: Arc<dyn CallerResolver> = Arc::new(StaticCaller::new(config.catalog.caller.user_id));

    let app = Router::new()
        .route("/health", get(health))
        .merge(routes::router(service, caller))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Listening on http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
    tracing::info!("Shutdown signal received");
}

/// Insert a demo user so the favorites endpoint has something to show.
/// Favorites are only added when the catalog already holds rows; run the
/// population endpoints first for a fully populated demo.
async fn seed(config: AppConfig) -> Result<()> {
    let db = connect(&config).await?;
    let service = build_service(db, &config)?;

    let user = service
        .create_user(NewUser {
            email: "luke@rebellion.example".to_string(),
            password: "changeme".to_string(),
            is_active: true,
        })
        .await?;
    println!("Seeded user {} (id {})", user.email, user.id);

    if let Some(person) = service.list_people().await?.into_iter().next() {
        service
            .add_favorite(user.id, FavoriteTarget::Person(person.id))
            .await?;
        println!("Favorited person '{}'", person.name);
    } else {
        println!("Catalog has no people yet; GET /people/population to import some");
    }

    if let Some(planet) = service.list_planets().await?.into_iter().next() {
        service
            .add_favorite(user.id, FavoriteTarget::Planet(planet.id))
            .await?;
        println!("Favorited planet '{}'", planet.name);
    } else {
        println!("Catalog has no planets yet; GET /planet/population to import some");
    }

    Ok(())
}
