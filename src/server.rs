//! HTTP server initialization and runtime setup.
//!
//! Handles store client lifecycle, state construction, and the Axum server.

use crate::application::services::UserService;
use crate::config::Config;
use crate::domain::repositories::UserRepository;
use crate::infrastructure::persistence::{InMemoryUserRepository, MongoUserRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use bson::doc;
use mongodb::Client;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - MongoDB client (or the in-memory fallback store)
/// - Axum HTTP server with graceful ctrl-c shutdown
///
/// The store client is constructed here and shut down explicitly after the
/// server stops; there is no global connection state.
///
/// # Errors
///
/// Returns an error if:
/// - The configured store does not answer a ping at startup
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (client, repository): (Option<Client>, Arc<dyn UserRepository>) =
        if let Some(url) = &config.mongodb_url {
            let client = Client::with_uri_str(url).await?;
            let database = client.database(&config.database_name);

            // The driver connects lazily; ping so misconfiguration fails at
            // startup instead of on the first request.
            database.run_command(doc! { "ping": 1 }).await?;
            tracing::info!(database = %config.database_name, "Connected to MongoDB");

            (Some(client), Arc::new(MongoUserRepository::new(&database)))
        } else {
            tracing::warn!("MongoDB not configured; using in-memory store, data is lost on restart");
            (None, Arc::new(InMemoryUserRepository::new()))
        };

    let state = AppState::new(UserService::new(repository));
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(client) = client {
        client.shutdown().await;
        tracing::info!("Store connection closed");
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
