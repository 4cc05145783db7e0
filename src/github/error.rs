//! Error types exposed by the GitHub provider layer.

use thiserror::Error;

use super::rate_limit::RateLimitInfo;

/// Errors surfaced while validating input or communicating with GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// The authentication token was missing.
    #[error("personal access token is required")]
    MissingToken,

    /// The owner account or organisation was not configured.
    #[error("repository owner is required")]
    MissingOwner,

    /// An owner name failed validation.
    #[error("repository owner must not be empty")]
    InvalidOwner,

    /// A repository name failed validation.
    #[error("repository name must not be empty")]
    InvalidRepositoryName,

    /// A repository name would change the shape of the upstream route.
    #[error("repository name `{name}` cannot be used in a GitHub route")]
    UnroutableRepositoryName {
        /// Name as supplied by the caller.
        name: String,
    },

    /// The configured API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// The repository does not exist for the configured owner.
    #[error("repository not found")]
    RepositoryNotFound,

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The operation did not complete before its deadline.
    #[error("{operation} timed out after {seconds}s")]
    Timeout {
        /// Name of the operation that expired.
        operation: &'static str,
        /// Deadline that was applied, in seconds.
        seconds: u64,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Rate limit exceeded - the API returned 403/429 with rate limit message.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Rate limit info if available from the rate limit endpoint.
        rate_limit: Option<RateLimitInfo>,
        /// Error message from GitHub.
        message: String,
    },

    /// The upstream kept returning further pages past the page guard.
    #[error("invalid pagination: {message}")]
    InvalidPagination {
        /// Description of the pagination failure.
        message: String,
    },
}
