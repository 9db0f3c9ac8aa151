//! The transport seam: trait for the HTTP exchange plus the default
//! reqwest-backed implementation.

use crate::config::ClientConfig;
use crate::{Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use std::fmt::Debug;

/// HttpSend performs the network exchange for a built request.
///
/// The client hands over a complete `http::Request` (URL, method, headers,
/// body) and expects the raw response back; status interpretation is left to
/// the caller. Implement this to swap in a custom client or a test double.
#[async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send the http request and return the response.
    async fn http_send(&self, req: http::Request<Bytes>) -> anyhow::Result<http::Response<Bytes>>;
}

/// Default [`HttpSend`] implementation backed by [`reqwest::Client`].
#[derive(Debug, Default)]
pub struct ReqwestHttpSend {
    client: reqwest::Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build a client honoring the configuration's TLS-verification and
    /// timeout settings.
    pub(crate) fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if !config.verify_tls {
            builder = builder.danger_accept_invalid_certs(true);
        }
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::transport_failed("failed to build http client").with_source(e))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> anyhow::Result<http::Response<Bytes>> {
        let req = reqwest::Request::try_from(req)?;
        let resp: http::Response<_> = self.client.execute(req).await?.into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body).await.map(|buf| buf.to_bytes())?;
        Ok(http::Response::from_parts(parts, bs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use std::time::Duration;

    fn config(verify_ssl: Option<bool>, timeout: Option<Duration>) -> ClientConfig {
        Config {
            url: Some("https://yourstore.dev".to_string()),
            consumer_key: Some("ck_test".to_string()),
            consumer_secret: Some("cs_test".to_string()),
            verify_ssl,
            timeout,
            ..Config::default()
        }
        .resolve()
        .expect("must resolve")
    }

    #[test]
    fn test_from_config_with_defaults() {
        ReqwestHttpSend::from_config(&config(None, None)).expect("must build");
    }

    #[test]
    fn test_from_config_honors_verify_tls_and_timeout() {
        let cfg = config(Some(false), Some(Duration::from_secs(5)));
        assert!(!cfg.verify_tls);
        assert_eq!(cfg.timeout, Some(Duration::from_secs(5)));

        ReqwestHttpSend::from_config(&cfg).expect("must build");
    }
}
