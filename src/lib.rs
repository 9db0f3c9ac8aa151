//! WooCommerce REST API client.
//!
//! Builds endpoint URLs from a resolved configuration, authorizes each
//! request (HTTP basic auth or query-string credentials over TLS, OAuth
//! 1.0a HMAC-SHA256 query signing over plain HTTP), and exchanges JSON with
//! the store through a pluggable transport.
//!
//! ## Overview
//!
//! Three pieces, used in sequence per request:
//!
//! - [`Config`] / [`ClientConfig`]: caller options validated and frozen into
//!   an immutable configuration.
//! - [`RequestSigner`]: pure computation turning `(method, endpoint, data)`
//!   into a [`SignedRequest`]: final URL, canonical query string, and OAuth
//!   parameter set when the transport is not encrypted.
//! - [`Client`]: thin verb methods (`get`, `post`, `put`, `delete`,
//!   `options`) that hand the signed request to an [`HttpSend`]
//!   implementation and parse the JSON response.
//!
//! ## Example
//!
//! ```no_run
//! use woocommerce_rest::{Client, Config};
//!
//! # async fn example() -> woocommerce_rest::Result<()> {
//! let client = Client::new(Config {
//!     url: Some("https://yourstore.dev".to_string()),
//!     consumer_key: Some("ck_xxx".to_string()),
//!     consumer_secret: Some("cs_xxx".to_string()),
//!     wp_api: true,
//!     version: Some("wc/v2".to_string()),
//!     ..Config::default()
//! })?;
//!
//! let products = client.get("products", None).await?;
//! println!("{products}");
//! # Ok(())
//! # }
//! ```
//!
//! The client performs no retries and no status-code branching: every
//! transport or decoding failure surfaces verbatim as an [`Error`].

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;
mod hash;
mod oauth;

mod error;
pub use error::{Error, ErrorKind, Result};

mod config;
pub use config::{ClientConfig, Config};

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::{Params, RequestSigner, SignedRequest};

mod transport;
pub use transport::{HttpSend, ReqwestHttpSend};

mod client;
pub use client::Client;
