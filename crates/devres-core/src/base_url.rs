//! Base URL of the live asset server.
//!
//! Lookup is pure: the environment is only one possible `lookup`, so callers
//! and tests can pass their own.

use crate::config::DevresConfig;

/// Environment key holding the live asset server origin (scheme, host, optional port).
pub const BASE_URL_KEY: &str = "EVERIT_DEV_RESOURCE_PROVIDER_URL";

/// Origin used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9990";

/// Resolve the base URL through `lookup`, falling back to [`DEFAULT_BASE_URL`].
///
/// The value is not validated; a malformed origin shows up later as a fetch failure.
pub fn resolve_with<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(BASE_URL_KEY).unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Resolve the base URL from the process environment.
pub fn resolve() -> String {
    resolve_with(|key| std::env::var(key).ok())
}

/// Environment first, then `base_url` from the config file, then the default.
pub fn resolve_layered(cfg: &DevresConfig) -> String {
    resolve_layered_with(cfg, |key| std::env::var(key).ok())
}

pub(crate) fn resolve_layered_with<F>(cfg: &DevresConfig, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    resolve_with(|key| lookup(key).or_else(|| cfg.base_url.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_matches_deployed_variable() {
        assert_eq!(BASE_URL_KEY, "EVERIT_DEV_RESOURCE_PROVIDER_URL");
        let url = resolve_with(|key| {
            (key == "EVERIT_DEV_RESOURCE_PROVIDER_URL").then(|| "http://h:1".to_string())
        });
        assert_eq!(url, "http://h:1");
    }

    #[test]
    fn unset_key_yields_default() {
        assert_eq!(resolve_with(|_| None), "http://localhost:9990");
    }

    #[test]
    fn set_key_is_returned_verbatim() {
        let url = resolve_with(|key| {
            assert_eq!(key, BASE_URL_KEY);
            Some("http://127.0.0.1:3000".to_string())
        });
        assert_eq!(url, "http://127.0.0.1:3000");
    }

    #[test]
    fn malformed_value_is_not_validated() {
        assert_eq!(resolve_with(|_| Some("not a url".into())), "not a url");
    }

    #[test]
    fn layered_env_wins_over_config() {
        let cfg = DevresConfig {
            base_url: Some("http://from-config:1".into()),
            ..DevresConfig::default()
        };
        let url = resolve_layered_with(&cfg, |_| Some("http://from-env:2".into()));
        assert_eq!(url, "http://from-env:2");
    }

    #[test]
    fn layered_config_used_when_env_unset() {
        let cfg = DevresConfig {
            base_url: Some("http://from-config:1".into()),
            ..DevresConfig::default()
        };
        assert_eq!(resolve_layered_with(&cfg, |_| None), "http://from-config:1");
        assert_eq!(
            resolve_layered_with(&DevresConfig::default(), |_| None),
            DEFAULT_BASE_URL
        );
    }
}
