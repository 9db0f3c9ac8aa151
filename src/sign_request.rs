//! Endpoint URL assembly and per-request authorization.

use crate::config::ClientConfig;
use crate::constants::{CONSUMER_KEY, CONSUMER_SECRET, DEFAULT_API_PREFIX, QUERY_ENCODE_SET};
use crate::oauth::OAuth1;
use crate::{Error, Result};
use http::Method;
use log::debug;
use percent_encoding::utf8_percent_encode;
use serde_json::Value;

/// Request payload and query mapping, shared between the signing join and
/// the JSON body.
pub type Params = serde_json::Map<String, Value>;

/// A fully resolved request, ready for the transport collaborator.
///
/// For a fixed configuration, method, endpoint and payload the URL is
/// deterministic up to the OAuth nonce and timestamp.
#[derive(Clone, Debug)]
pub struct SignedRequest {
    /// Fully qualified request URL, query string included.
    pub url: String,
    /// HTTP method to issue.
    pub method: Method,
    /// OAuth parameter set. Only present on the non-TLS path; the same
    /// parameters are already merged into `url`.
    pub auth_params: Option<Vec<(String, String)>>,
    /// Credential pair to attach as HTTP basic auth. Only present on the
    /// TLS path when query-string auth is disabled.
    pub basic_auth: Option<(String, String)>,
}

/// Builds and authorizes requests against a resolved [`ClientConfig`].
#[derive(Clone, Debug)]
pub struct RequestSigner {
    config: ClientConfig,
    oauth: OAuth1,
}

impl RequestSigner {
    /// Create a signer for the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        let oauth = OAuth1::new(&config.credential, !config.is_legacy_version());
        Self { config, oauth }
    }

    /// Pin the OAuth nonce. Only use this function for testing.
    #[cfg(test)]
    pub fn with_nonce(mut self, nonce: &str) -> Self {
        self.oauth = self.oauth.with_nonce(nonce);
        self
    }

    /// Pin the OAuth timestamp. Only use this function for testing.
    #[cfg(test)]
    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.oauth = self.oauth.with_timestamp(timestamp);
        self
    }

    /// The resolved configuration backing this signer.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the signed request for `method` on `endpoint`.
    ///
    /// `data` is the request mapping: query parameters for GET-shaped calls,
    /// the JSON body for the rest. Either way it participates in the OAuth
    /// signature on the non-TLS path.
    pub fn build(
        &self,
        method: Method,
        endpoint: &str,
        data: Option<&Params>,
    ) -> Result<SignedRequest> {
        if endpoint.is_empty() {
            return Err(Error::config_invalid("endpoint is required"));
        }

        let url = self.endpoint_url(endpoint);
        let get_shaped = method == Method::GET || method == Method::OPTIONS;

        let signed = if self.config.use_tls {
            let mut query: Vec<(String, String)> = Vec::new();
            let mut basic_auth = None;

            if self.config.query_string_auth {
                query.push((
                    CONSUMER_KEY.to_string(),
                    self.config.credential.consumer_key.clone(),
                ));
                query.push((
                    CONSUMER_SECRET.to_string(),
                    self.config.credential.consumer_secret.clone(),
                ));
            } else {
                basic_auth = Some((
                    self.config.credential.consumer_key.clone(),
                    self.config.credential.consumer_secret.clone(),
                ));
            }

            if get_shaped {
                if let Some(data) = data {
                    query.extend(data.iter().map(|(k, v)| (k.clone(), render_value(v))));
                }
            }

            SignedRequest {
                url: append_query(url, &query),
                method,
                auth_params: None,
                basic_auth,
            }
        } else {
            // The raw payload join rides after `?` so its pairs enter the
            // signature base string. An empty mapping still appends the
            // bare `?`, which parses back to zero parameters.
            let signing_url = format!("{}?{}", url, join_pairs(data));
            let auth_params = self.oauth.authorize(&method, &signing_url);

            let mut query = auth_params.clone();
            if get_shaped {
                if let Some(data) = data {
                    query.extend(data.iter().map(|(k, v)| (k.clone(), render_value(v))));
                }
            }

            SignedRequest {
                url: append_query(url, &query),
                method,
                auth_params: Some(auth_params),
                basic_auth: None,
            }
        };

        debug!("built request: {} {}", signed.method, signed.url);
        Ok(signed)
    }

    /// Assemble the unsigned endpoint URL:
    /// `{url}/{prefix}/{version}/{endpoint}`, inserting the port after the
    /// host when configured.
    fn endpoint_url(&self, endpoint: &str) -> String {
        let mut url = self.config.url.clone();
        if !url.ends_with('/') {
            url.push('/');
        }

        let prefix = if self.config.wp_api {
            self.config.wp_api_prefix.as_str()
        } else {
            DEFAULT_API_PREFIX
        };
        url.push_str(prefix);
        url.push('/');
        url.push_str(&self.config.version);
        url.push('/');
        url.push_str(endpoint);

        match self.config.port {
            Some(port) => insert_port(&url, port),
            None => url,
        }
    }
}

/// Insert `:port` after the host, before the first path separator that
/// follows the scheme.
fn insert_port(url: &str, port: u16) -> String {
    let host_start = url.find("://").map(|i| i + 3).unwrap_or(0);
    let host_end = url[host_start..]
        .find('/')
        .map(|i| host_start + i)
        .unwrap_or(url.len());
    format!("{}:{}{}", &url[..host_end], port, &url[host_end..])
}

/// Join the mapping as unescaped `key=value` pairs. This exact join feeds
/// the OAuth signature base string; percent-encoding happens later, in the
/// canonical query-string step.
fn join_pairs(data: Option<&Params>) -> String {
    data.map(|d| {
        d.iter()
            .map(|(k, v)| format!("{}={}", k, render_value(v)))
            .collect::<Vec<_>>()
            .join("&")
    })
    .unwrap_or_default()
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Append the canonical query string: every name and value component-encoded
/// (with `%5B`/`%5D` restored to `[`/`]` in names, so array-style parameters
/// like `filter[limit]` stay bracketed on the wire), sorted ascending by
/// encoded name, joined with `&`. No parameters, no `?`.
fn append_query(url: String, pairs: &[(String, String)]) -> String {
    if pairs.is_empty() {
        return url;
    }

    let mut encoded: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| (restore_brackets(&encode(k)), encode(v)))
        .collect();
    encoded.sort();

    let query = encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!("{url}?{query}")
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, &QUERY_ENCODE_SET).to_string()
}

fn restore_brackets(key: &str) -> String {
    key.replace("%5B", "[").replace("%5D", "]")
}
