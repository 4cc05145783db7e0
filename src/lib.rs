//! Octo-manager library crate providing a small HTTP front-end over GitHub.
//!
//! The library wraps Octocrab to create, delete and list repositories and to
//! list open pull requests for one configured owner, and exposes those
//! operations as JSON routes through an axum router.

pub mod config;
pub mod github;
pub mod server;
pub mod telemetry;

pub use config::{OctoManagerConfig, ServerSettings};
pub use github::{
    OctocrabGateway, OwnerKind, OwnerLocator, PersonalAccessToken, ProviderClient, ProviderError,
    PullRequestLimit, RepositoryName,
};
pub use server::{ApiError, router, serve};
