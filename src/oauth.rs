//! OAuth 1.0a parameter set generation with HMAC-SHA256 signatures.
//!
//! WooCommerce delivers the authorization parameters in the query string
//! rather than an `Authorization` header, so this module only produces the
//! parameter mapping; URL assembly happens in [`crate::RequestSigner`].

use crate::constants::{
    OAUTH_CONSUMER_KEY, OAUTH_ENCODE_SET, OAUTH_NONCE, OAUTH_SIGNATURE, OAUTH_SIGNATURE_METHOD,
    OAUTH_TIMESTAMP, OAUTH_VERSION, OAUTH_VERSION_1_0, SIGNATURE_METHOD_HMAC_SHA256,
};
use crate::credential::Credential;
use crate::hash::base64_hmac_sha256;
use http::Method;
use log::debug;
use percent_encoding::{percent_decode_str, utf8_percent_encode};
use rand::distributions::Alphanumeric;
use rand::Rng;

const NONCE_LEN: usize = 32;

/// OAuth 1.0a signer for a single consumer key pair.
#[derive(Clone, Debug)]
pub(crate) struct OAuth1 {
    credential: Credential,
    /// Whether the signing key carries the trailing `&` that separates the
    /// consumer secret from the (absent) token secret. The legacy `v1`/`v2`
    /// endpoints expect the bare secret; do not "fix" this.
    last_ampersand: bool,

    nonce: Option<String>,
    timestamp: Option<i64>,
}

impl OAuth1 {
    /// Create a signer for the given credential.
    pub fn new(credential: &Credential, last_ampersand: bool) -> Self {
        Self {
            credential: credential.clone(),
            last_ampersand,
            nonce: None,
            timestamp: None,
        }
    }

    /// Pin the nonce.
    ///
    /// # Note
    ///
    /// Nonces must be freshly generated per request. Only use this function
    /// for testing.
    #[cfg(test)]
    pub fn with_nonce(mut self, nonce: &str) -> Self {
        self.nonce = Some(nonce.to_string());
        self
    }

    /// Pin the timestamp. Only use this function for testing.
    #[cfg(test)]
    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    fn nonce(&self) -> String {
        self.nonce.clone().unwrap_or_else(|| {
            rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .take(NONCE_LEN)
                .map(char::from)
                .collect()
        })
    }

    fn timestamp(&self) -> i64 {
        self.timestamp
            .unwrap_or_else(|| chrono::Utc::now().timestamp())
    }

    /// Produce the OAuth parameter set authorizing `method` on `url`.
    ///
    /// `url` is the signing URL: the unsigned endpoint URL with the raw
    /// `key=value` payload join after `?`. Query pairs found there are
    /// percent-decoded and folded into the signature base string alongside
    /// the protocol parameters.
    pub fn authorize(&self, method: &Method, url: &str) -> Vec<(String, String)> {
        let (base_url, query) = url.split_once('?').unwrap_or((url, ""));

        let mut params: Vec<(String, String)> = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
                (
                    percent_decode_str(k).decode_utf8_lossy().into_owned(),
                    percent_decode_str(v).decode_utf8_lossy().into_owned(),
                )
            })
            .collect();

        let mut oauth = vec![
            (
                OAUTH_CONSUMER_KEY.to_string(),
                self.credential.consumer_key.clone(),
            ),
            (OAUTH_NONCE.to_string(), self.nonce()),
            (
                OAUTH_SIGNATURE_METHOD.to_string(),
                SIGNATURE_METHOD_HMAC_SHA256.to_string(),
            ),
            (OAUTH_TIMESTAMP.to_string(), self.timestamp().to_string()),
            (OAUTH_VERSION.to_string(), OAUTH_VERSION_1_0.to_string()),
        ];
        params.extend(oauth.iter().cloned());

        let base_string = base_string(method, base_url, params);
        debug!("calculated signature base string: {base_string}");

        let signature =
            base64_hmac_sha256(self.signing_key().as_bytes(), base_string.as_bytes());
        oauth.push((OAUTH_SIGNATURE.to_string(), signature));

        oauth
    }

    fn signing_key(&self) -> String {
        let mut key = encode(&self.credential.consumer_secret);
        if self.last_ampersand {
            key.push('&');
        }
        key
    }
}

/// Build the signature base string: `METHOD&enc(base_url)&enc(param_string)`,
/// where the parameter string holds every parameter with key and value
/// RFC 3986 encoded, sorted by encoded key, joined `k=v` with `&`.
fn base_string(method: &Method, base_url: &str, params: Vec<(String, String)>) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (encode(k), encode(v)))
        .collect();
    encoded.sort();

    let param_string = encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.as_str(),
        encode(base_url),
        encode(&param_string)
    )
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, &OAUTH_ENCODE_SET).to_string()
}
