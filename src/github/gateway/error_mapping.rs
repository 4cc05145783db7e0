//! Translation of Octocrab failures into [`ProviderError`] values.
//!
//! Every message starts with the repository operation that failed so the
//! HTTP caller can tell a failed delete from a failed listing.

use http::StatusCode;

use crate::github::error::ProviderError;

/// 401 and 403 answers that are not rate limiting mean the token was refused.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Transport failures where GitHub never produced an answer.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

/// GitHub answered 404, which for a delete means the repository is absent.
pub(super) fn is_not_found(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::GitHub { source, .. } if source.status_code == StatusCode::NOT_FOUND
    )
}

/// GitHub reports quota exhaustion as 403 or 429 and names the rate limit in
/// either the message or the documentation link.
pub(super) fn is_rate_limit_error(source: &octocrab::GitHubError) -> bool {
    let quota_status = matches!(
        source.status_code,
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
    );
    let mentions_rate_limit = source.message.to_lowercase().contains("rate limit")
        || source
            .documentation_url
            .as_deref()
            .is_some_and(|url| url.contains("rate-limit"));

    quota_status && mentions_rate_limit
}

/// Maps a failure that is not rate limiting.
pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> ProviderError {
    match error {
        octocrab::Error::GitHub { source, .. } if is_auth_failure(source.status_code) => {
            ProviderError::Authentication {
                message: format!(
                    "{operation} failed: GitHub returned {status} {message}",
                    status = source.status_code,
                    message = source.message
                ),
            }
        }
        octocrab::Error::GitHub { source, .. } => ProviderError::Api {
            message: format!(
                "{operation} failed with status {status}: {message}",
                status = source.status_code,
                message = source.message
            ),
        },
        _ if is_network_error(error) => ProviderError::Network {
            message: format!("{operation} failed: {error}"),
        },
        _ => ProviderError::Api {
            message: format!("{operation} failed: {error}"),
        },
    }
}
