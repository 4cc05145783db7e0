//! Structured logging for the server.
//!
//! Events are written by a `tracing-subscriber` fmt layer. `RUST_LOG`
//! overrides the default filter.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "octo_manager=info";

/// Builds the event filter from `RUST_LOG`, falling back to
/// [`DEFAULT_LOG_FILTER`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the global subscriber.
///
/// Calling this more than once leaves the first subscriber in place.
pub fn init_logging() {
    if tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .try_init()
        .is_err()
    {
        tracing::debug!("global subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{DEFAULT_LOG_FILTER, env_filter, init_logging};

    #[rstest]
    fn falls_back_to_default_filter() {
        let _guard = env_lock::lock_env([("RUST_LOG", None::<&str>)]);

        assert_eq!(env_filter().to_string(), DEFAULT_LOG_FILTER);
    }

    #[rstest]
    fn honours_rust_log() {
        let _guard = env_lock::lock_env([("RUST_LOG", Some("octo_manager=debug"))]);

        assert_eq!(env_filter().to_string(), "octo_manager=debug");
    }

    #[rstest]
    fn repeated_initialisation_is_harmless() {
        init_logging();
        init_logging();
        tracing::info!("logging initialised twice");
    }
}
