#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
// easier to use when using the functions as callback of foreign functions
#![allow(clippy::needless_pass_by_value)]

use std::net::SocketAddr;

use anyhow::Result;
use axum::Extension;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::prelude::*;

use crate::api::router;
#[cfg(test)]
use crate::storage::Memory;
use crate::storage::Postgres;
use crate::storage::Storage;
use crate::utils::env_var;
use crate::utils::env_var_or_else;

pub use crate::storage::Config as StorageConfig;

mod api;
mod graceful_shutdown;
mod items;
mod storage;
#[cfg(test)]
mod tests;
mod utils;

const DEFAULT_RUST_LOG: &str = "todo_items=debug,tower_http=debug";
const DEFAULT_ADDRESS: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<()> {
    setup_environment();
    setup_tracing();

    let app = setup_app(StorageConfig::DetectConfig).await?;

    let address = setup_address()?;
    let listener = TcpListener::bind(address).await?;
    tracing::info!("Listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(graceful_shutdown::handler())
        .await?;

    Ok(())
}

/// Create and setup the app with its dependencies
///
/// # Errors
///
/// Will return `Err` if the storage can not be set up:
/// - Missing `DATABASE_URL`
/// - Database connection
/// - Migrations
pub async fn setup_app(config: StorageConfig) -> Result<Router> {
    let app = match config {
        StorageConfig::DetectConfig => create_router(Postgres::new().await?),
        StorageConfig::ExistingConnection(pool) => {
            create_router(Postgres::new_with_pool(pool).await?)
        }
        #[cfg(test)]
        StorageConfig::Memory => create_router(Memory::new()),
    };

    Ok(app)
}

/// Create the router with the storage every handler receives
fn create_router<S: Storage>(storage: S) -> Router {
    router::<S>()
        .layer(TraceLayer::new_for_http())
        .layer(Extension(storage))
}

fn setup_environment() {
    dotenvy::dotenv().ok();
}

fn setup_tracing() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::registry;

    registry()
        .with(EnvFilter::new(env_var_or_else("RUST_LOG", || {
            DEFAULT_RUST_LOG.into()
        })))
        .with(fmt::layer())
        .init();
}

fn setup_address() -> Result<SocketAddr> {
    let mut address =
        env_var_or_else("ADDRESS", || String::from(DEFAULT_ADDRESS)).parse::<SocketAddr>()?;

    // optional override of just the port
    if let Some(port) = env_var("PORT") {
        address.set_port(port.parse::<u16>()?);
    }

    Ok(address)
}
