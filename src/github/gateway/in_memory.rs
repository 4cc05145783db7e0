//! In-memory gateway used by tests and local runs without a token.
//!
//! Repositories are kept in insertion order together with their open pull
//! requests. Listing honours a configurable page size so callers exercise the
//! same cursor loop as against GitHub.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::github::error::ProviderError;
use crate::github::locator::{OwnerLocator, RepositoryName};
use crate::github::models::{PullRequest, Repository};
use crate::github::pagination::{PER_PAGE, PageCursor, ResultPage};

use super::HostingGateway;

#[derive(Debug, Clone)]
struct StoredRepository {
    name: String,
    pull_requests: Vec<PullRequest>,
}

/// Gateway backed by a name-keyed list of repositories.
///
/// The owner passed to each call is ignored; one instance models one owner.
#[derive(Debug)]
pub struct InMemoryGateway {
    repositories: Mutex<Vec<StoredRepository>>,
    page_size: usize,
    failure: Option<ProviderError>,
}

impl Default for InMemoryGateway {
    fn default() -> Self {
        Self {
            repositories: Mutex::new(Vec::new()),
            page_size: usize::from(PER_PAGE),
            failure: None,
        }
    }
}

impl InMemoryGateway {
    /// Creates an empty gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a repository without pull requests.
    #[must_use]
    pub fn with_repository(self, name: &str) -> Self {
        self.with_pull_requests(name, Vec::new())
    }

    /// Adds a repository with the given open pull requests, replacing any
    /// existing entry of the same name.
    #[must_use]
    pub fn with_pull_requests(self, name: &str, pull_requests: Vec<PullRequest>) -> Self {
        {
            let mut repositories = self.lock();
            repositories.retain(|stored| stored.name != name);
            repositories.push(StoredRepository {
                name: name.to_owned(),
                pull_requests,
            });
        }
        self
    }

    /// Sets how many items each listing page holds.
    ///
    /// A size of zero is treated as one.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Makes every call fail with `error`.
    #[must_use]
    pub fn failing_with(mut self, error: ProviderError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Names of stored repositories in insertion order.
    #[must_use]
    pub fn repository_names(&self) -> Vec<String> {
        self.lock()
            .iter()
            .map(|stored| stored.name.clone())
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<StoredRepository>> {
        self.repositories
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn check_failure(&self) -> Result<(), ProviderError> {
        self.failure.clone().map_or(Ok(()), Err)
    }

    fn page_of<T: Clone>(&self, items: &[T], cursor: PageCursor) -> ResultPage<T> {
        let index = usize::try_from(cursor.page_number().saturating_sub(1)).unwrap_or(usize::MAX);
        let start = index.saturating_mul(self.page_size).min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        let page = items.get(start..end).unwrap_or_default().to_vec();

        if end < items.len() {
            ResultPage::with_next(page, cursor.next())
        } else {
            ResultPage::last(page)
        }
    }
}

#[async_trait]
impl HostingGateway for InMemoryGateway {
    async fn create_repository(
        &self,
        _owner: &OwnerLocator,
        name: &RepositoryName,
    ) -> Result<Repository, ProviderError> {
        self.check_failure()?;
        let mut repositories = self.lock();
        if repositories
            .iter()
            .any(|stored| stored.name == name.as_str())
        {
            return Err(ProviderError::Api {
                message: format!(
                    "create repository failed with status 422 Unprocessable Entity: \
                     name already exists on this account: {name}"
                ),
            });
        }

        repositories.push(StoredRepository {
            name: name.as_str().to_owned(),
            pull_requests: Vec::new(),
        });
        Ok(Repository::named(name.as_str()))
    }

    async fn delete_repository(
        &self,
        _owner: &OwnerLocator,
        name: &RepositoryName,
    ) -> Result<(), ProviderError> {
        self.check_failure()?;
        let mut repositories = self.lock();
        let position = repositories
            .iter()
            .position(|stored| stored.name == name.as_str())
            .ok_or(ProviderError::RepositoryNotFound)?;
        repositories.remove(position);
        Ok(())
    }

    async fn list_repositories_page(
        &self,
        _owner: &OwnerLocator,
        cursor: PageCursor,
    ) -> Result<ResultPage<Repository>, ProviderError> {
        self.check_failure()?;
        let repositories: Vec<Repository> = self
            .lock()
            .iter()
            .map(|stored| Repository::named(&stored.name))
            .collect();
        Ok(self.page_of(&repositories, cursor))
    }

    async fn list_pull_requests_page(
        &self,
        _owner: &OwnerLocator,
        name: &RepositoryName,
        cursor: PageCursor,
    ) -> Result<ResultPage<PullRequest>, ProviderError> {
        self.check_failure()?;
        let pull_requests = self
            .lock()
            .iter()
            .find(|stored| stored.name == name.as_str())
            .map(|stored| stored.pull_requests.clone())
            .ok_or_else(|| ProviderError::Api {
                message: format!("list pulls failed with status 404 Not Found: {name}"),
            })?;
        Ok(self.page_of(&pull_requests, cursor))
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::InMemoryGateway;
    use crate::github::error::ProviderError;
    use crate::github::gateway::HostingGateway;
    use crate::github::locator::{OwnerLocator, RepositoryName};
    use crate::github::models::PullRequest;
    use crate::github::pagination::PageCursor;

    #[fixture]
    fn owner() -> OwnerLocator {
        OwnerLocator::for_user("octocat").expect("owner should be valid")
    }

    fn name(value: &str) -> RepositoryName {
        RepositoryName::new(value).expect("name should be valid")
    }

    #[rstest]
    #[tokio::test]
    async fn create_rejects_duplicate_names(owner: OwnerLocator) {
        let gateway = InMemoryGateway::new().with_repository("taken");

        let result = gateway.create_repository(&owner, &name("taken")).await;

        assert!(
            matches!(result, Err(ProviderError::Api { .. })),
            "expected Api error, got {result:?}"
        );
        assert_eq!(gateway.repository_names(), vec!["taken".to_owned()]);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_of_absent_repository_leaves_set_unchanged(owner: OwnerLocator) {
        let gateway = InMemoryGateway::new().with_repository("kept");

        let result = gateway.delete_repository(&owner, &name("missing")).await;

        assert_eq!(result, Err(ProviderError::RepositoryNotFound));
        assert_eq!(gateway.repository_names(), vec!["kept".to_owned()]);
    }

    #[rstest]
    #[tokio::test]
    async fn pages_follow_configured_size(owner: OwnerLocator) {
        let pulls = (1..=5)
            .map(|number| PullRequest::titled(number, &format!("PR {number}")))
            .collect();
        let gateway = InMemoryGateway::new()
            .with_pull_requests("repo", pulls)
            .with_page_size(2);

        let first = gateway
            .list_pull_requests_page(&owner, &name("repo"), PageCursor::first())
            .await
            .expect("first page should load");
        let third = gateway
            .list_pull_requests_page(&owner, &name("repo"), PageCursor::first().next().next())
            .await
            .expect("third page should load");

        assert_eq!(first.items.len(), 2);
        assert_eq!(first.next, Some(PageCursor::first().next()));
        assert_eq!(
            third.items.iter().map(|pull| pull.number).collect::<Vec<_>>(),
            vec![5]
        );
        assert_eq!(third.next, None);
    }

    #[rstest]
    #[tokio::test]
    async fn injected_failure_applies_to_every_call(owner: OwnerLocator) {
        let failure = ProviderError::Network {
            message: "connection reset".to_owned(),
        };
        let gateway = InMemoryGateway::new()
            .with_repository("repo")
            .failing_with(failure.clone());

        let result = gateway
            .list_repositories_page(&owner, PageCursor::first())
            .await;

        assert_eq!(result, Err(failure));
    }
}
