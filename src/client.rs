//! The public client: verb methods over the signer and transport.

use crate::config::Config;
use crate::hash::base64_encode;
use crate::sign_request::{Params, RequestSigner};
use crate::transport::{HttpSend, ReqwestHttpSend};
use crate::{Error, Result};
use bytes::Bytes;
use http::header::{ACCEPT, AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE, USER_AGENT};
use http::{HeaderMap, Method, Request};
use serde_json::Value;
use std::sync::Arc;

const USER_AGENT_VALUE: &str = concat!("WooCommerce REST Rust/", env!("CARGO_PKG_VERSION"));
const APPLICATION_JSON: &str = "application/json";

/// WooCommerce REST API client.
///
/// Construction resolves and freezes the configuration; afterwards the
/// client is read-only and may issue any number of concurrent requests.
#[derive(Clone, Debug)]
pub struct Client {
    signer: RequestSigner,
    http: Arc<dyn HttpSend>,
}

impl Client {
    /// Create a client from construction options.
    ///
    /// Fails with a configuration error when `url`, `consumer_key` or
    /// `consumer_secret` is missing. The default transport honors the
    /// `verify_ssl` and `timeout` options.
    pub fn new(options: Config) -> Result<Self> {
        let config = options.resolve()?;
        let http = Arc::new(ReqwestHttpSend::from_config(&config)?);
        Ok(Self {
            signer: RequestSigner::new(config),
            http,
        })
    }

    /// Replace the transport implementation.
    pub fn with_http_send(mut self, http: impl HttpSend) -> Self {
        self.http = Arc::new(http);
        self
    }

    /// Issue a GET request and return the parsed body.
    pub async fn get(&self, endpoint: &str, params: Option<&Params>) -> Result<Value> {
        let (_, body) = self.request(Method::GET, endpoint, params).await?;
        Ok(body)
    }

    /// Issue a GET request and return both the response headers and the
    /// parsed body.
    pub async fn get_with_headers(
        &self,
        endpoint: &str,
        params: Option<&Params>,
    ) -> Result<(HeaderMap, Value)> {
        self.request(Method::GET, endpoint, params).await
    }

    /// Issue a POST request carrying `data` as a JSON body.
    pub async fn post(&self, endpoint: &str, data: &Params) -> Result<Value> {
        let (_, body) = self.request(Method::POST, endpoint, Some(data)).await?;
        Ok(body)
    }

    /// Issue a PUT request carrying `data` as a JSON body.
    pub async fn put(&self, endpoint: &str, data: &Params) -> Result<Value> {
        let (_, body) = self.request(Method::PUT, endpoint, Some(data)).await?;
        Ok(body)
    }

    /// Issue a DELETE request.
    pub async fn delete(&self, endpoint: &str) -> Result<Value> {
        let (_, body) = self.request(Method::DELETE, endpoint, None).await?;
        Ok(body)
    }

    /// Issue an OPTIONS request. Shaped like a GET: no body, query-delivered
    /// authorization.
    pub async fn options(&self, endpoint: &str) -> Result<Value> {
        let (_, body) = self.request(Method::OPTIONS, endpoint, None).await?;
        Ok(body)
    }

    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        data: Option<&Params>,
    ) -> Result<(HeaderMap, Value)> {
        let signed = self.signer.build(method, endpoint, data)?;

        let mut builder = Request::builder()
            .method(signed.method.clone())
            .uri(&signed.url)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header(ACCEPT, APPLICATION_JSON)
            .header(CACHE_CONTROL, "no-cache");

        if let Some((user, password)) = &signed.basic_auth {
            let token = base64_encode(format!("{user}:{password}").as_bytes());
            builder = builder.header(AUTHORIZATION, format!("Basic {token}"));
        }

        let carries_body = signed.method == Method::POST
            || signed.method == Method::PUT
            || signed.method == Method::DELETE;
        let body = if carries_body {
            builder = builder.header(CONTENT_TYPE, APPLICATION_JSON);
            match data {
                Some(data) => {
                    let bs = serde_json::to_vec(&Value::Object(data.clone())).map_err(|e| {
                        Error::request_invalid("failed to serialize request body").with_source(e)
                    })?;
                    Bytes::from(bs)
                }
                None => Bytes::new(),
            }
        } else {
            Bytes::new()
        };

        let req = builder.body(body)?;
        let resp = self
            .http
            .http_send(req)
            .await
            .map_err(|e| Error::transport_failed(e.to_string()).with_source(e))?;

        let (parts, body) = resp.into_parts();
        let value: Value = serde_json::from_slice(&body).map_err(|e| {
            Error::protocol_invalid("failed to decode response body as JSON").with_source(e)
        })?;

        Ok((parts.headers, value))
    }
}
