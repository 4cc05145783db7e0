//! Gateways for repository and pull request operations against GitHub.
//!
//! [`HostingGateway`] is the seam between the provider client and the
//! upstream API. The Octocrab implementation handles real HTTP requests; the
//! in-memory implementation backs tests and local runs without a token.

mod client;
mod error_mapping;
#[cfg(any(test, feature = "test-support"))]
mod in_memory;
mod live;

#[cfg(any(test, feature = "test-support"))]
pub use in_memory::InMemoryGateway;
pub use live::{GITHUB_API_BASE, OctocrabGateway};

use async_trait::async_trait;

use crate::github::error::ProviderError;
use crate::github::locator::{OwnerLocator, RepositoryName};
use crate::github::models::{PullRequest, Repository};
use crate::github::pagination::{PageCursor, ResultPage};

/// Raw upstream operations, scoped by an explicit owner.
///
/// Listing methods return a single page; following cursors is the caller's
/// job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostingGateway: Send + Sync {
    /// Create a repository under the owner.
    async fn create_repository(
        &self,
        owner: &OwnerLocator,
        name: &RepositoryName,
    ) -> Result<Repository, ProviderError>;

    /// Delete a repository of the owner.
    ///
    /// Implementations report an absent repository as
    /// [`ProviderError::RepositoryNotFound`].
    async fn delete_repository(
        &self,
        owner: &OwnerLocator,
        name: &RepositoryName,
    ) -> Result<(), ProviderError>;

    /// Fetch one page of the owner's repositories.
    async fn list_repositories_page(
        &self,
        owner: &OwnerLocator,
        cursor: PageCursor,
    ) -> Result<ResultPage<Repository>, ProviderError>;

    /// Fetch one page of a repository's open pull requests.
    async fn list_pull_requests_page(
        &self,
        owner: &OwnerLocator,
        name: &RepositoryName,
        cursor: PageCursor,
    ) -> Result<ResultPage<PullRequest>, ProviderError>;
}
