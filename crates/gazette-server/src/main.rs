use std::time::Duration;

use anyhow::Result;
use axum::ServiceExt;
use clap::{Parser, Subcommand};
use gazette_db::{migrator, ArticleStore};
use gazette_server::app::{self, AppState};
use gazette_server::config::ServerConfig;
use sea_orm::{ConnectOptions, Database};

#[derive(Parser, Debug)]
#[command(name = "gazette", version, about = "A small server-rendered blog")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the blog over HTTP (the default).
    Serve,
    /// Apply pending schema migrations.
    Migrate,
    /// Roll back the most recent migration batch.
    Rollback,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::from_env()?;

    let mut options = ConnectOptions::new(&config.database_url);
    options
        .max_connections(10)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .sqlx_logging(false);
    let conn = Database::connect(options).await?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Migrate => {
            let count = migrator::apply_pending(&conn).await?;
            tracing::info!(count, "migrations applied");
        }
        Commands::Rollback => {
            let count = migrator::rollback_last_batch(&conn).await?;
            tracing::info!(count, "migrations rolled back");
        }
        Commands::Serve => {
            let state = AppState::new(ArticleStore::new(conn))?;
            let addr = config.bind_addr();
            let listener = tokio::net::TcpListener::bind(addr).await?;
            tracing::info!(%addr, "listening");
            axum::serve(listener, app::service(state).into_make_service()).await?;
        }
    }
    Ok(())
}
