//! Identity wrappers and upstream route construction for an owner.

use std::fmt;
use std::str::FromStr;

use super::error::ProviderError;

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    /// Validates that the owner is non-empty.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidOwner` when the value is blank.
    pub fn new(value: &str) -> Result<Self, ProviderError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ProviderError::InvalidOwner);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RepositoryOwner {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Characters that would split, terminate or re-encode a route segment.
const ROUTE_BREAKING_CHARACTERS: [char; 5] = ['/', '\\', '?', '#', '%'];

/// Repository name wrapper to prevent parameter mix-ups.
///
/// Names are kept exactly as supplied; GitHub decides uniqueness and any
/// normalisation. A name is always spliced into `/repos/{owner}/{name}`, so
/// anything that would address a different route is refused up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Validates that the name is non-empty and stays a single route segment.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidRepositoryName` when the value is empty
    /// and `ProviderError::UnroutableRepositoryName` when it contains a path
    /// separator, query or fragment marker, percent sign or control character,
    /// or is a dot segment.
    pub fn new(value: &str) -> Result<Self, ProviderError> {
        if value.is_empty() {
            return Err(ProviderError::InvalidRepositoryName);
        }
        let is_dot_segment = matches!(value, "." | "..");
        let breaks_route = value.chars().any(|character| {
            ROUTE_BREAKING_CHARACTERS.contains(&character) || character.is_control()
        });
        if is_dot_segment || breaks_route {
            return Err(ProviderError::UnroutableRepositoryName {
                name: value.to_owned(),
            });
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RepositoryName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, ProviderError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ProviderError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl fmt::Debug for PersonalAccessToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("PersonalAccessToken(***)")
    }
}

/// Kind of account that owns the managed repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OwnerKind {
    /// The user the token authenticates as.
    #[default]
    User,
    /// An organisation the token can administer.
    Organization,
}

impl OwnerKind {
    /// Returns the configuration spelling of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Organization => "organization",
        }
    }
}

impl FromStr for OwnerKind {
    type Err = ProviderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Self::User),
            "org" | "organization" | "organisation" => Ok(Self::Organization),
            other => Err(ProviderError::Configuration {
                message: format!("unknown owner kind `{other}` (expected user or organization)"),
            }),
        }
    }
}

/// Owner context bound to every upstream call.
///
/// Builds the REST routes for the owner so that gateways never assemble
/// paths by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerLocator {
    owner: RepositoryOwner,
    kind: OwnerKind,
}

impl OwnerLocator {
    /// Creates a locator for the owner.
    #[must_use]
    pub const fn new(owner: RepositoryOwner, kind: OwnerKind) -> Self {
        Self { owner, kind }
    }

    /// Creates a user-owned locator from a raw owner string.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidOwner` when the owner is blank.
    pub fn for_user(owner: &str) -> Result<Self, ProviderError> {
        Ok(Self::new(RepositoryOwner::new(owner)?, OwnerKind::User))
    }

    /// Creates an organisation-owned locator from a raw owner string.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidOwner` when the owner is blank.
    pub fn for_organization(owner: &str) -> Result<Self, ProviderError> {
        Ok(Self::new(
            RepositoryOwner::new(owner)?,
            OwnerKind::Organization,
        ))
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Owner kind.
    #[must_use]
    pub const fn kind(&self) -> OwnerKind {
        self.kind
    }

    /// Route used both to create and to list the owner's repositories.
    pub(crate) fn repositories_path(&self) -> String {
        match self.kind {
            OwnerKind::User => "/user/repos".to_owned(),
            OwnerKind::Organization => format!("/orgs/{}/repos", self.owner.as_str()),
        }
    }

    /// Route listing pull requests of a repository.
    pub(crate) fn pulls_path(&self, name: &RepositoryName) -> String {
        format!("/repos/{}/{}/pulls", self.owner.as_str(), name.as_str())
    }
}
