//! Authenticated Octocrab client for the configured API base.

use http::Uri;
use octocrab::Octocrab;

use crate::github::error::ProviderError;
use crate::github::locator::PersonalAccessToken;

use super::error_mapping::map_octocrab_error;

/// Builds a client that sends `token` with every request to `api_base`.
///
/// A trailing slash on the base is dropped so routes such as `/user/repos`
/// are not requested as `//user/repos`.
///
/// # Errors
///
/// Returns `ProviderError::InvalidUrl` when the base cannot be parsed as a URI
/// and `ProviderError::Api` when Octocrab refuses the configuration.
pub(super) fn build_octocrab_client(
    token: &PersonalAccessToken,
    api_base: &str,
) -> Result<Octocrab, ProviderError> {
    let base_uri: Uri = api_base
        .trim_end_matches('/')
        .parse::<Uri>()
        .map_err(|error| ProviderError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .personal_token(token.as_ref())
        .base_uri(base_uri)
        .map_err(|error| ProviderError::Api {
            message: format!("configure GitHub client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build GitHub client", &error))
}
