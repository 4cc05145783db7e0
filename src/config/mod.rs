//! Server configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in server defaults
//! 2. **Configuration file** – `.octo-manager.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `OCTO_MANAGER_*`, with `GITHUB_TOKEN` and
//!    `GITHUB_OWNER` as fallbacks for the token and owner
//! 4. **Command-line arguments** – `--token`/`-t`, `--owner`/`-o`,
//!    `--bind-address`/`-b` and friends
//!
//! # Configuration File
//!
//! ```toml
//! token = "ghp_example"
//! owner = "octocat"
//! owner_kind = "user"
//! bind_address = "127.0.0.1:8080"
//! api_base_url = "https://api.github.com"
//! request_timeout_seconds = 30
//! ```

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::github::error::ProviderError;
use crate::github::gateway::GITHUB_API_BASE;
use crate::github::locator::{OwnerKind, OwnerLocator, PersonalAccessToken, RepositoryOwner};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Server configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use octo_manager::OctoManagerConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = OctoManagerConfig::load().expect("failed to load configuration");
/// let settings = config.resolve().expect("configuration should be complete");
/// assert_eq!(settings.request_timeout.as_secs(), config.request_timeout_seconds);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "OCTO_MANAGER",
    discovery(
        dotfile_name = ".octo-manager.toml",
        config_file_name = "octo-manager.toml",
        app_name = "octo-manager"
    )
)]
pub struct OctoManagerConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `OCTO_MANAGER_TOKEN` or `GITHUB_TOKEN`
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Account or organisation owning the managed repositories.
    ///
    /// Can be provided via:
    /// - CLI: `--owner <OWNER>` or `-o <OWNER>`
    /// - Environment: `OCTO_MANAGER_OWNER` or `GITHUB_OWNER`
    /// - Config file: `owner = "..."`
    #[ortho_config(cli_short = 'o')]
    pub owner: Option<String>,

    /// Whether `owner` is the authenticated user or an organisation.
    ///
    /// Accepts `user` or `organization` (also `org`). Defaults to `user`.
    #[ortho_config()]
    pub owner_kind: String,

    /// Socket address the HTTP server listens on.
    ///
    /// Defaults to `0.0.0.0:8080`.
    #[ortho_config(cli_short = 'b')]
    pub bind_address: String,

    /// Base URL of the GitHub REST API.
    ///
    /// Point this at `https://<host>/api/v3` for GitHub Enterprise.
    #[ortho_config()]
    pub api_base_url: String,

    /// Deadline for each provider operation, in seconds.
    #[ortho_config()]
    pub request_timeout_seconds: u64,
}

impl Default for OctoManagerConfig {
    fn default() -> Self {
        Self {
            token: None,
            owner: None,
            owner_kind: OwnerKind::User.as_str().to_owned(),
            bind_address: DEFAULT_BIND_ADDRESS.to_owned(),
            api_base_url: GITHUB_API_BASE.to_owned(),
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
        }
    }
}

/// Validated settings the server starts from.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// Token used for every upstream call.
    pub token: PersonalAccessToken,
    /// Owner every operation is scoped to.
    pub owner: OwnerLocator,
    /// Address to listen on.
    pub bind_address: SocketAddr,
    /// GitHub API base URL.
    pub api_base_url: Url,
    /// Per-operation deadline.
    pub request_timeout: Duration,
}

impl OctoManagerConfig {
    /// Resolves the token from configuration or the `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingToken`] when no source provides a
    /// non-blank value.
    pub fn resolve_token(&self) -> Result<PersonalAccessToken, ProviderError> {
        let raw = self
            .token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(ProviderError::MissingToken)?;
        PersonalAccessToken::new(raw)
    }

    /// Resolves the owner from configuration or the `GITHUB_OWNER`
    /// environment variable, combined with the configured owner kind.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingOwner`] when no owner is configured,
    /// [`ProviderError::InvalidOwner`] when it is blank, and
    /// [`ProviderError::Configuration`] for an unknown owner kind.
    pub fn resolve_owner(&self) -> Result<OwnerLocator, ProviderError> {
        let raw = self
            .owner
            .clone()
            .or_else(|| env::var("GITHUB_OWNER").ok())
            .ok_or(ProviderError::MissingOwner)?;
        let kind: OwnerKind = self.owner_kind.parse()?;
        Ok(OwnerLocator::new(RepositoryOwner::new(&raw)?, kind))
    }

    /// Parses the listen address.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Configuration`] when the address is not a
    /// `host:port` socket address.
    pub fn bind_address(&self) -> Result<SocketAddr, ProviderError> {
        self.bind_address
            .parse()
            .map_err(|error| ProviderError::Configuration {
                message: format!("invalid bind address `{}`: {error}", self.bind_address),
            })
    }

    /// Parses the API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidUrl`] when the value is not an
    /// absolute HTTP(S) URL.
    pub fn api_base_url(&self) -> Result<Url, ProviderError> {
        let url = Url::parse(&self.api_base_url)
            .map_err(|error| ProviderError::InvalidUrl(format!("{}: {error}", self.api_base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ProviderError::InvalidUrl(format!(
                "{}: scheme must be http or https",
                self.api_base_url
            )));
        }
        Ok(url)
    }

    /// Returns the per-operation deadline.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Configuration`] when the timeout is zero.
    pub fn request_timeout(&self) -> Result<Duration, ProviderError> {
        if self.request_timeout_seconds == 0 {
            return Err(ProviderError::Configuration {
                message: "request_timeout_seconds must be greater than zero".to_owned(),
            });
        }
        Ok(Duration::from_secs(self.request_timeout_seconds))
    }

    /// Validates every field and returns the settings the server needs.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure among the token, owner, bind
    /// address, API base URL and timeout.
    pub fn resolve(&self) -> Result<ServerSettings, ProviderError> {
        Ok(ServerSettings {
            token: self.resolve_token()?,
            owner: self.resolve_owner()?,
            bind_address: self.bind_address()?,
            api_base_url: self.api_base_url()?,
            request_timeout: self.request_timeout()?,
        })
    }
}

#[cfg(test)]
mod tests;
