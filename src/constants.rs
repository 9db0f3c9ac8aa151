use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Defaults applied while resolving configuration.
pub const DEFAULT_API_PREFIX: &str = "wp-json";
pub const DEFAULT_VERSION: &str = "v3";
pub const DEFAULT_ENCODING: &str = "utf8";

// Legacy API versions signed without the trailing ampersand in the key.
pub const LEGACY_VERSIONS: [&str; 2] = ["v1", "v2"];

// OAuth 1.0a protocol parameter names.
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const OAUTH_NONCE: &str = "oauth_nonce";
pub const OAUTH_SIGNATURE: &str = "oauth_signature";
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_VERSION: &str = "oauth_version";

pub const SIGNATURE_METHOD_HMAC_SHA256: &str = "HMAC-SHA256";
pub const OAUTH_VERSION_1_0: &str = "1.0";

// Query-string auth parameter names used on the TLS path.
pub const CONSUMER_KEY: &str = "consumer_key";
pub const CONSUMER_SECRET: &str = "consumer_secret";

/// AsciiSet for strict RFC 3986 percent encoding, as OAuth 1.0a requires for
/// every component of the signature base string.
///
/// - Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z',
///   '0'-'9', '-', '.', '_', and '~'.
pub static OAUTH_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// AsciiSet matching a standard URI component encoder, used for the canonical
/// query string that is actually transmitted.
///
/// Leaves '!', '*', '\'', '(' and ')' unescaped in addition to the RFC 3986
/// unreserved set, which is what WooCommerce's gateway expects on the wire.
pub static QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');
