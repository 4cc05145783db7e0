//! Octo-manager server entrypoint.

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use octo_manager::server::shutdown_signal;
use octo_manager::telemetry::init_logging;
use octo_manager::{OctoManagerConfig, OctocrabGateway, ProviderClient, ProviderError, serve};
use ortho_config::OrthoConfig;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{error, info};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: std::net::SocketAddr,
        source: io::Error,
    },

    #[error("server stopped: {0}")]
    Serve(io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(startup_error) => {
            error!(error = %startup_error, "octo-manager exited");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = load_config()?;
    let settings = config.resolve()?;

    let gateway = OctocrabGateway::for_token(&settings.token, settings.api_base_url.as_str())?;
    let client = ProviderClient::new(
        Arc::new(gateway),
        settings.owner.clone(),
        settings.request_timeout,
    );

    let listener = TcpListener::bind(settings.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: settings.bind_address,
            source,
        })?;

    info!(
        address = %settings.bind_address,
        owner = %settings.owner.owner(),
        owner_kind = settings.owner.kind().as_str(),
        "octo-manager listening"
    );

    serve(listener, client, shutdown_signal())
        .await
        .map_err(StartupError::Serve)
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ProviderError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<OctoManagerConfig, ProviderError> {
    OctoManagerConfig::load().map_err(|error| ProviderError::Configuration {
        message: error.to_string(),
    })
}
