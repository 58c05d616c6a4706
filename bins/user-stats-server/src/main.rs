use anyhow::Result;
use clap::Parser;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_stats_routes::{create_router, AppConfig, AppState};
use user_stats_storage::{CommentStore, MemoryCommentStore, PostgresCommentStore, StorageConfig};

/// User Stats Server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server host
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Server port
    #[arg(long, default_value = "3000")]
    port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting User Stats Server");

    let config = load_config(&args)?;

    let store: Arc<dyn CommentStore> = match config.storage_config.backend_type.as_str() {
        "memory" => {
            info!("Using in-memory comment store");
            Arc::new(MemoryCommentStore::new())
        }
        _ => Arc::new(PostgresCommentStore::new(&config.storage_config).await?),
    };

    // Start server - use config port from environment variable or args
    let port = if env::var("SERVER_PORT").is_ok() {
        config.server_port
    } else {
        args.port
    };
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let app = create_router(AppState::new(store, config));

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn load_config(args: &Args) -> Result<AppConfig> {
    let dev_mode = env::var("DEV_MODE").unwrap_or_else(|_| "false".to_string()) == "true";

    let jwt_secret = match env::var("JWT_SECRET") {
        Ok(secret) => secret,
        Err(_) if dev_mode => {
            info!("DEV MODE: using built-in JWT secret");
            "dev-secret".to_string()
        }
        Err(_) => anyhow::bail!(
            "JWT_SECRET environment variable must be set outside dev mode"
        ),
    };

    Ok(AppConfig {
        server_host: env::var("SERVER_HOST").unwrap_or_else(|_| args.host.clone()),
        server_port: env::var("SERVER_PORT")
            .unwrap_or_else(|_| args.port.to_string())
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid SERVER_PORT"))?,
        jwt_secret,
        storage_config: StorageConfig {
            backend_type: env::var("STORAGE_BACKEND").unwrap_or_else(|_| "postgres".to_string()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgresql://localhost/user_stats".to_string()),
            max_connections: 10,
        },
    })
}
