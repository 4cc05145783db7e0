//! HTTP JSON surface over the provider client.
//!
//! | Route                        | Operation                         |
//! |------------------------------|-----------------------------------|
//! | `POST /repos`                | create a repository               |
//! | `DELETE /repos/{name}`       | delete a repository               |
//! | `GET /repos`                 | list repository names             |
//! | `GET /repos/{name}/pulls?n=` | list up to `n` open pull requests |
//!
//! Every failure answers with `{"error": <message>}`: 400 for invalid input,
//! 500 for provider failures.

mod error;
mod handlers;

use std::future::Future;
use std::io;

use axum::Router;
use axum::routing::{delete, get, post};
use tokio::net::TcpListener;
use tracing::{info, warn};

pub use error::ApiError;

use crate::github::ProviderClient;

/// Builds the router serving the repository routes with `client` as state.
pub fn router(client: ProviderClient) -> Router {
    Router::new()
        .route(
            "/repos",
            post(handlers::create_repository).get(handlers::list_repositories),
        )
        .route(
            "/repos/",
            delete(|| async { ApiError::MissingRepositoryName }),
        )
        .route("/repos/{name}", delete(handlers::delete_repository))
        .route("/repos/{name}/pulls", get(handlers::list_pull_requests))
        .with_state(client)
}

/// Serves the router on `listener` until `shutdown` resolves, then drains
/// in-flight requests.
///
/// # Errors
///
/// Returns the I/O error that stopped the accept loop.
pub async fn serve<F>(listener: TcpListener, client: ProviderClient, shutdown: F) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(client))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves when the process receives Ctrl-C.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested, draining connections"),
        Err(error) => {
            warn!(error = %error, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    }
}
