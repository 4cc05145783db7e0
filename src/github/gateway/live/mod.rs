//! Octocrab-backed gateway talking to the GitHub REST API.

use async_trait::async_trait;
use octocrab::{Octocrab, Page};
use serde::de::DeserializeOwned;

use crate::github::error::ProviderError;
use crate::github::locator::{OwnerKind, OwnerLocator, PersonalAccessToken, RepositoryName};
use crate::github::models::{ApiCreateRepository, ApiRepository, PullRequest, Repository};
use crate::github::pagination::{PER_PAGE, PageCursor, ResultPage};
use crate::github::rate_limit::RateLimitInfo;

use super::HostingGateway;
use super::client::build_octocrab_client;
use super::error_mapping::{is_not_found, is_rate_limit_error, map_octocrab_error};

/// Default GitHub API base URL.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Octocrab-backed gateway.
pub struct OctocrabGateway {
    client: Octocrab,
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an authenticated gateway for the API at `api_base`.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidUrl` when the base URI cannot be parsed or
    /// `ProviderError::Api` when Octocrab fails to construct a client.
    pub fn for_token(token: &PersonalAccessToken, api_base: &str) -> Result<Self, ProviderError> {
        let octocrab = build_octocrab_client(token, api_base)?;
        Ok(Self::new(octocrab))
    }

    async fn fetch_page<T>(
        &self,
        operation: &str,
        path: &str,
        query: &[(&str, String)],
        cursor: PageCursor,
    ) -> Result<ResultPage<T>, ProviderError>
    where
        T: DeserializeOwned,
    {
        let page: Page<T> = match self.client.get(path, Some(&query)).await {
            Ok(page) => page,
            Err(error) => {
                return Err(self
                    .map_octocrab_error_with_rate_limit(operation, &error)
                    .await);
            }
        };

        let next = page.next.is_some().then(|| cursor.next());
        Ok(ResultPage {
            items: page.items,
            next,
        })
    }

    async fn map_octocrab_error_with_rate_limit(
        &self,
        operation: &str,
        error: &octocrab::Error,
    ) -> ProviderError {
        match error {
            octocrab::Error::GitHub { source, .. } if is_rate_limit_error(source) => {
                let rate_limit = self.fetch_rate_limit_info().await;
                let base_message =
                    format!("{operation} failed: {message}", message = source.message);
                let message = match &rate_limit {
                    Some(info) => format!(
                        "{base_message} ({remaining}/{limit} requests left, resets at {reset})",
                        remaining = info.remaining(),
                        limit = info.limit(),
                        reset = info.reset_at()
                    ),
                    None => base_message,
                };

                ProviderError::RateLimitExceeded {
                    rate_limit,
                    message,
                }
            }
            _ => map_octocrab_error(operation, error),
        }
    }

    async fn fetch_rate_limit_info(&self) -> Option<RateLimitInfo> {
        let rate = self.client.ratelimit().get().await.ok()?.rate;
        let Ok(limit) = u32::try_from(rate.limit) else {
            return None;
        };
        let Ok(remaining) = u32::try_from(rate.remaining) else {
            return None;
        };
        Some(RateLimitInfo::new(limit, remaining, rate.reset))
    }
}

fn page_query(cursor: PageCursor) -> Vec<(&'static str, String)> {
    vec![
        ("per_page", PER_PAGE.to_string()),
        ("page", cursor.page_number().to_string()),
    ]
}

#[async_trait]
impl HostingGateway for OctocrabGateway {
    async fn create_repository(
        &self,
        owner: &OwnerLocator,
        name: &RepositoryName,
    ) -> Result<Repository, ProviderError> {
        let body = ApiCreateRepository {
            name: name.as_str(),
        };

        let created: ApiRepository = match self
            .client
            .post(owner.repositories_path(), Some(&body))
            .await
        {
            Ok(created) => created,
            Err(error) => {
                return Err(self
                    .map_octocrab_error_with_rate_limit("create repository", &error)
                    .await);
            }
        };

        Ok(created.into())
    }

    async fn delete_repository(
        &self,
        owner: &OwnerLocator,
        name: &RepositoryName,
    ) -> Result<(), ProviderError> {
        match self
            .client
            .repos(owner.owner().as_str(), name.as_str())
            .delete()
            .await
        {
            Ok(()) => Ok(()),
            Err(error) if is_not_found(&error) => Err(ProviderError::RepositoryNotFound),
            Err(error) => Err(self
                .map_octocrab_error_with_rate_limit("delete repository", &error)
                .await),
        }
    }

    async fn list_repositories_page(
        &self,
        owner: &OwnerLocator,
        cursor: PageCursor,
    ) -> Result<ResultPage<Repository>, ProviderError> {
        let mut query = page_query(cursor);
        if owner.kind() == OwnerKind::User {
            query.push(("affiliation", "owner".to_owned()));
        }

        let page: ResultPage<ApiRepository> = self
            .fetch_page(
                "list repositories",
                &owner.repositories_path(),
                &query,
                cursor,
            )
            .await?;

        Ok(ResultPage {
            items: page.items.into_iter().map(ApiRepository::into).collect(),
            next: page.next,
        })
    }

    async fn list_pull_requests_page(
        &self,
        owner: &OwnerLocator,
        name: &RepositoryName,
        cursor: PageCursor,
    ) -> Result<ResultPage<PullRequest>, ProviderError> {
        let mut query = page_query(cursor);
        query.push(("state", "open".to_owned()));

        self.fetch_page("list pulls", &owner.pulls_path(name), &query, cursor)
            .await
    }
}
