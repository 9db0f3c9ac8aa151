use crate::constants::{DEFAULT_API_PREFIX, DEFAULT_ENCODING, DEFAULT_VERSION, LEGACY_VERSIONS};
use crate::credential::Credential;
use crate::{Error, Result};
use std::time::Duration;

/// Config carries all the options accepted at client construction.
///
/// Only `url`, `consumer_key` and `consumer_secret` are required; every other
/// field falls back to a documented default during [`Config::resolve`].
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Store URL, e.g. `https://yourstore.dev`. Required.
    pub url: Option<String>,
    /// Consumer key. Required.
    pub consumer_key: Option<String>,
    /// Consumer secret. Required.
    pub consumer_secret: Option<String>,
    /// Informational only: the TLS mode is derived from the `url` scheme,
    /// never from this field.
    pub ssl: Option<bool>,
    /// Use the WordPress REST API integration, routing requests through
    /// [`Config::wp_api_prefix`] instead of the fixed `wp-json` namespace.
    pub wp_api: bool,
    /// Namespace prefix used when `wp_api` is enabled.
    ///
    /// - default to `wp-json`
    pub wp_api_prefix: Option<String>,
    /// API version path segment.
    ///
    /// - default to `v3`
    pub version: Option<String>,
    /// Verify the server certificate on TLS connections.
    ///
    /// - default to `true`
    pub verify_ssl: Option<bool>,
    /// Text encoding reported to the server.
    ///
    /// - default to `utf8`
    pub encoding: Option<String>,
    /// On TLS connections, deliver the key pair in the query string instead
    /// of a basic-auth header.
    pub query_string_auth: bool,
    /// Port appended to the host when set.
    pub port: Option<u16>,
    /// Request timeout forwarded to the transport.
    pub timeout: Option<Duration>,
}

impl Config {
    /// Validate the options and resolve them into an immutable [`ClientConfig`].
    pub fn resolve(self) -> Result<ClientConfig> {
        let url = self
            .url
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("url is required"))?;
        let consumer_key = self
            .consumer_key
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("consumerKey is required"))?;
        let consumer_secret = self
            .consumer_secret
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("consumerSecret is required"))?;

        let use_tls = url
            .get(..5)
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case("https"));

        Ok(ClientConfig {
            url,
            use_tls,
            wp_api: self.wp_api,
            wp_api_prefix: self
                .wp_api_prefix
                .unwrap_or_else(|| DEFAULT_API_PREFIX.to_string()),
            version: self.version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            credential: Credential::new(&consumer_key, &consumer_secret),
            verify_tls: self.verify_ssl.unwrap_or(true),
            encoding: self
                .encoding
                .unwrap_or_else(|| DEFAULT_ENCODING.to_string()),
            query_string_auth: self.query_string_auth,
            port: self.port,
            timeout: self.timeout,
        })
    }
}

/// Resolved client configuration. Immutable after construction; a single
/// value may back any number of concurrent requests.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Store URL as supplied by the caller.
    pub url: String,
    /// Whether the URL scheme is `https`. Selects between basic/query-string
    /// credential delivery (true) and OAuth 1.0a signing (false).
    pub use_tls: bool,
    /// Whether the WordPress REST API integration is enabled.
    pub wp_api: bool,
    /// Namespace prefix, only consulted when `wp_api` is set.
    pub wp_api_prefix: String,
    /// API version path segment.
    pub version: String,
    /// Consumer key pair.
    pub credential: Credential,
    /// Whether the transport must verify the server certificate.
    pub verify_tls: bool,
    /// Text encoding reported to the server.
    pub encoding: String,
    /// Deliver credentials in the query string on TLS connections.
    pub query_string_auth: bool,
    /// Port inserted after the host when set.
    pub port: Option<u16>,
    /// Request timeout forwarded to the transport.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Whether this version predates the WC REST namespaces and must be
    /// signed with the legacy key shape.
    pub fn is_legacy_version(&self) -> bool {
        LEGACY_VERSIONS.contains(&self.version.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use pretty_assertions::assert_eq;

    fn base_config() -> Config {
        Config {
            url: Some("https://yourstore.dev".to_string()),
            consumer_key: Some("ck_test".to_string()),
            consumer_secret: Some("cs_test".to_string()),
            ..Config::default()
        }
    }

    #[test]
    fn test_resolve_applies_defaults() {
        let cfg = base_config().resolve().expect("must resolve");

        assert!(cfg.use_tls);
        assert!(!cfg.wp_api);
        assert_eq!(cfg.wp_api_prefix, "wp-json");
        assert_eq!(cfg.version, "v3");
        assert!(cfg.verify_tls);
        assert_eq!(cfg.encoding, "utf8");
        assert!(!cfg.query_string_auth);
        assert_eq!(cfg.port, None);
        assert_eq!(cfg.timeout, None);
    }

    #[test]
    fn test_resolve_requires_url() {
        let err = Config {
            url: None,
            ..base_config()
        }
        .resolve()
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert_eq!(err.to_string(), "url is required");

        let err = Config {
            url: Some(String::new()),
            ..base_config()
        }
        .resolve()
        .unwrap_err();
        assert_eq!(err.to_string(), "url is required");
    }

    #[test]
    fn test_resolve_requires_key_pair() {
        let err = Config {
            consumer_key: None,
            ..base_config()
        }
        .resolve()
        .unwrap_err();
        assert_eq!(err.to_string(), "consumerKey is required");

        let err = Config {
            consumer_secret: None,
            ..base_config()
        }
        .resolve()
        .unwrap_err();
        assert_eq!(err.to_string(), "consumerSecret is required");
    }

    #[test]
    fn test_use_tls_derived_from_scheme() {
        for (url, expected) in [
            ("https://yourstore.dev", true),
            ("HTTPS://yourstore.dev", true),
            ("http://yourstore.dev", false),
            ("HTTP://yourstore.dev", false),
        ] {
            let cfg = Config {
                url: Some(url.to_string()),
                ..base_config()
            }
            .resolve()
            .expect("must resolve");
            assert_eq!(cfg.use_tls, expected, "url: {url}");
        }
    }

    #[test]
    fn test_ssl_option_is_informational() {
        let cfg = Config {
            ssl: Some(true),
            url: Some("http://yourstore.dev".to_string()),
            ..base_config()
        }
        .resolve()
        .expect("must resolve");
        assert!(!cfg.use_tls);
    }

    #[test]
    fn test_legacy_version_detection() {
        for (version, legacy) in [("v1", true), ("v2", true), ("v3", false), ("wc/v2", false)] {
            let cfg = Config {
                version: Some(version.to_string()),
                ..base_config()
            }
            .resolve()
            .expect("must resolve");
            assert_eq!(cfg.is_legacy_version(), legacy, "version: {version}");
        }
    }
}
