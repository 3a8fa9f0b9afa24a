//! Darshan HTTP Server Binary
//!
//! This is the main entry point for the darshan REST API server.
//! It initializes the temple roster repository, sets up the HTTP router, and
//! starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin darshan-server --features http-server
//!
//! # With an external roster file
//! TEMPLE_ROSTER=/etc/darshan/roster.toml cargo run --bin darshan-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `TEMPLE_ROSTER`: Path to a TOML roster file (optional; built-in roster otherwise)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use darshan_rust::db::{roster, LocalRepository, TempleRepository};
use darshan_rust::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Darshan HTTP Server");

    // Built-in roster by default; TEMPLE_ROSTER file replaces it when set
    let repository = LocalRepository::with_seed_roster();
    if let Some(temples) = roster::roster_from_env()? {
        info!("Loading roster from {} file", roster::ROSTER_ENV_VAR);
        repository.replace_roster(temples).await?;
    }
    let repository: Arc<dyn TempleRepository> = Arc::new(repository);
    let temple_count = repository.list_temples().await?.len();
    info!("Repository initialized with {} temples", temple_count);

    // Create application state
    let state = AppState::new(repository);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
