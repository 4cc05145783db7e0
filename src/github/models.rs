//! Data models for repositories and pull requests returned by GitHub.
//!
//! Types prefixed with `Api` are internal deserialisation targets that
//! convert into public domain types. Pull requests are kept close to the
//! wire shape because HTTP callers receive them unmodified.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Repository as reported by GitHub.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Repository {
    /// Repository name, unique within the owner.
    pub name: Option<String>,
    /// `owner/name` form.
    pub full_name: Option<String>,
    /// HTML URL for displaying to a user.
    pub html_url: Option<String>,
    /// Whether the repository is private.
    pub private: Option<bool>,
}

impl Repository {
    /// Builds a repository that carries only its name.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_owned()),
            ..Default::default()
        }
    }
}

/// Pull request with every upstream field preserved.
///
/// Only `number` and `title` are interpreted; everything else GitHub sends
/// is carried in `fields` and serialised back alongside them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PullRequest {
    /// Pull request number.
    pub number: u64,
    /// Title of the pull request.
    #[serde(default)]
    pub title: Option<String>,
    /// Remaining upstream fields, passed through untouched.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl PullRequest {
    /// Builds a pull request with a number and title and no other fields.
    #[must_use]
    pub fn titled(number: u64, title: &str) -> Self {
        Self {
            number,
            title: Some(title.to_owned()),
            fields: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiRepository {
    pub(crate) name: Option<String>,
    pub(crate) full_name: Option<String>,
    pub(crate) html_url: Option<String>,
    pub(crate) private: Option<bool>,
}

/// Request body for repository creation.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ApiCreateRepository<'name> {
    pub(crate) name: &'name str,
}

impl From<ApiRepository> for Repository {
    fn from(value: ApiRepository) -> Self {
        Self {
            name: value.name,
            full_name: value.full_name,
            html_url: value.html_url,
            private: value.private,
        }
    }
}
