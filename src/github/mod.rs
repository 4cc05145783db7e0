//! GitHub repository management.
//!
//! This module wraps Octocrab behind the [`HostingGateway`] trait and exposes
//! an owner-scoped [`ProviderClient`] that creates, deletes and lists
//! repositories and lists open pull requests. Upstream failures are mapped
//! into [`ProviderError`] so callers never see Octocrab internals.

pub mod client;
pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod pagination;
pub mod rate_limit;

pub use client::{DEFAULT_REQUEST_TIMEOUT, ProviderClient};
pub use error::ProviderError;
#[cfg(any(test, feature = "test-support"))]
pub use gateway::InMemoryGateway;
pub use gateway::{GITHUB_API_BASE, HostingGateway, OctocrabGateway};
pub use locator::{OwnerKind, OwnerLocator, PersonalAccessToken, RepositoryName, RepositoryOwner};
pub use models::{PullRequest, Repository};
pub use pagination::{PageCursor, PullRequestLimit, ResultPage};

#[cfg(test)]
pub use gateway::MockHostingGateway;
