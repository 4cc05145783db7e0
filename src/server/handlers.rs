//! Route handlers translating HTTP requests into provider client calls.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::github::{ProviderClient, ProviderError, PullRequest, PullRequestLimit, RepositoryName};

use super::error::ApiError;

/// Body accepted by `POST /repos`.
#[derive(Debug, Deserialize)]
pub(super) struct CreateRepositoryRequest {
    name: String,
}

/// Query accepted by `GET /repos/{name}/pulls`.
#[derive(Debug, Deserialize)]
pub(super) struct PullRequestQuery {
    n: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct RepositoryCreated {
    message: &'static str,
    name: String,
}

#[derive(Debug, Serialize)]
pub(super) struct RepositoryDeleted {
    message: &'static str,
    repo: String,
}

#[derive(Debug, Serialize)]
pub(super) struct RepositoryList {
    repositories: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct PullRequestList {
    repository: String,
    pull_requests: Vec<PullRequest>,
    count: usize,
}

fn provider_failure(operation: &'static str, error: ProviderError) -> ApiError {
    warn!(operation, error = %error, "provider call failed");
    ApiError::Provider(error)
}

/// Decodes and validates the `{name}` segment.
fn repository_name(
    segment: Result<Path<String>, PathRejection>,
) -> Result<(String, RepositoryName), ApiError> {
    let Path(raw) = segment.map_err(|_| ApiError::InvalidRepositoryName)?;
    let name = RepositoryName::new(&raw).map_err(|error| match error {
        ProviderError::InvalidRepositoryName => ApiError::MissingRepositoryName,
        _ => ApiError::InvalidRepositoryName,
    })?;
    Ok((raw, name))
}

pub(super) async fn create_repository(
    State(client): State<ProviderClient>,
    payload: Result<Json<CreateRepositoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RepositoryCreated>), ApiError> {
    let Json(request) = payload.map_err(|_| ApiError::InvalidRequest)?;
    let name = RepositoryName::new(&request.name).map_err(|_| ApiError::InvalidRequest)?;

    let created = client
        .create_repository(&name)
        .await
        .map_err(|error| provider_failure("create repository", error))?;

    Ok((
        StatusCode::CREATED,
        Json(RepositoryCreated {
            message: "Repository created",
            name: created.name.unwrap_or(request.name),
        }),
    ))
}

pub(super) async fn delete_repository(
    State(client): State<ProviderClient>,
    segment: Result<Path<String>, PathRejection>,
) -> Result<Json<RepositoryDeleted>, ApiError> {
    let (raw_name, name) = repository_name(segment)?;

    client
        .delete_repository(&name)
        .await
        .map_err(|error| provider_failure("delete repository", error))?;

    Ok(Json(RepositoryDeleted {
        message: "Repository deleted",
        repo: raw_name,
    }))
}

pub(super) async fn list_repositories(
    State(client): State<ProviderClient>,
) -> Result<Json<RepositoryList>, ApiError> {
    let repositories = client
        .list_repositories()
        .await
        .map_err(|error| provider_failure("list repositories", error))?;

    Ok(Json(RepositoryList {
        repositories: repositories
            .into_iter()
            .filter_map(|repository| repository.name)
            .collect(),
    }))
}

pub(super) async fn list_pull_requests(
    State(client): State<ProviderClient>,
    segment: Result<Path<String>, PathRejection>,
    query_params: Result<Query<PullRequestQuery>, QueryRejection>,
) -> Result<Json<PullRequestList>, ApiError> {
    let (raw_name, name) = repository_name(segment)?;
    let Query(query) = query_params.map_err(|_| ApiError::InvalidCount)?;
    let limit = query
        .n
        .as_deref()
        .map_or(Ok(PullRequestLimit::Unlimited), str::parse)
        .map_err(|_| ApiError::InvalidCount)?;

    let pull_requests = client
        .list_pull_requests(&name, limit)
        .await
        .map_err(|error| provider_failure("list pull requests", error))?;

    Ok(Json(PullRequestList {
        repository: raw_name,
        count: pull_requests.len(),
        pull_requests,
    }))
}
