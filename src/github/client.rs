//! Provider client exposing the four repository operations.
//!
//! The client binds a gateway to one owner, follows pagination cursors until
//! the listing is exhausted and applies a deadline to every operation.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::error::ProviderError;
use super::gateway::HostingGateway;
use super::locator::{OwnerLocator, RepositoryName};
use super::models::{PullRequest, Repository};
use super::pagination::{MAX_PAGES, PageCursor, PullRequestLimit, ResultPage};

/// Deadline applied to each operation unless configured otherwise.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Owner-scoped handle over a [`HostingGateway`].
///
/// Cloning is cheap; clones share the gateway.
#[derive(Clone)]
pub struct ProviderClient {
    gateway: Arc<dyn HostingGateway>,
    owner: OwnerLocator,
    timeout: Duration,
}

impl ProviderClient {
    /// Creates a client for `owner` backed by `gateway`.
    #[must_use]
    pub fn new(gateway: Arc<dyn HostingGateway>, owner: OwnerLocator, timeout: Duration) -> Self {
        Self {
            gateway,
            owner,
            timeout,
        }
    }

    /// Create a repository named `name`.
    ///
    /// # Errors
    ///
    /// Returns the gateway's error, or `ProviderError::Timeout` when the
    /// deadline expires.
    pub async fn create_repository(
        &self,
        name: &RepositoryName,
    ) -> Result<Repository, ProviderError> {
        self.with_deadline(
            "create repository",
            self.gateway.create_repository(&self.owner, name),
        )
        .await
    }

    /// Delete the repository named `name`.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::RepositoryNotFound` when the repository does
    /// not exist, any other gateway error, or `ProviderError::Timeout`.
    pub async fn delete_repository(&self, name: &RepositoryName) -> Result<(), ProviderError> {
        self.with_deadline(
            "delete repository",
            self.gateway.delete_repository(&self.owner, name),
        )
        .await
    }

    /// List every repository of the owner in upstream order.
    ///
    /// # Errors
    ///
    /// Fails as a whole when any page fails, when the listing exceeds
    /// [`MAX_PAGES`], or when the deadline expires.
    pub async fn list_repositories(&self) -> Result<Vec<Repository>, ProviderError> {
        let operation = "list repositories";
        self.with_deadline(
            operation,
            collect_pages(operation, |cursor| {
                self.gateway.list_repositories_page(&self.owner, cursor)
            }),
        )
        .await
    }

    /// List the open pull requests of `name`, keeping at most `limit` of
    /// them in upstream order.
    ///
    /// # Errors
    ///
    /// Fails as a whole when any page fails, when the listing exceeds
    /// [`MAX_PAGES`], or when the deadline expires.
    pub async fn list_pull_requests(
        &self,
        name: &RepositoryName,
        limit: PullRequestLimit,
    ) -> Result<Vec<PullRequest>, ProviderError> {
        let operation = "list pull requests";
        let pull_requests = self
            .with_deadline(
                operation,
                collect_pages(operation, |cursor| {
                    self.gateway
                        .list_pull_requests_page(&self.owner, name, cursor)
                }),
            )
            .await?;
        Ok(limit.apply(pull_requests))
    }

    async fn with_deadline<T, F>(&self, operation: &'static str, work: F) -> Result<T, ProviderError>
    where
        F: Future<Output = Result<T, ProviderError>>,
    {
        tokio::time::timeout(self.timeout, work)
            .await
            .unwrap_or_else(|_| {
                Err(ProviderError::Timeout {
                    operation,
                    seconds: self.timeout.as_secs(),
                })
            })
    }
}

/// Follows cursors from the first page until the gateway reports no more.
async fn collect_pages<T, F, Fut>(operation: &str, mut fetch: F) -> Result<Vec<T>, ProviderError>
where
    F: FnMut(PageCursor) -> Fut,
    Fut: Future<Output = Result<ResultPage<T>, ProviderError>>,
{
    let mut items = Vec::new();
    let mut cursor = PageCursor::first();

    for _ in 0..MAX_PAGES {
        let page = fetch(cursor).await?;
        debug!(
            operation,
            page = cursor.page_number(),
            items = page.items.len(),
            "fetched page"
        );
        items.extend(page.items);

        match page.next {
            Some(next) => cursor = next,
            None => return Ok(items),
        }
    }

    Err(ProviderError::InvalidPagination {
        message: format!("{operation} returned more than {MAX_PAGES} pages"),
    })
}
