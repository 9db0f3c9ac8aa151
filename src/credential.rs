use std::fmt::{Debug, Formatter};

/// Consumer key pair issued by the WooCommerce store.
#[derive(Clone, Default)]
pub struct Credential {
    /// Consumer key, the `ck_`-prefixed identifier.
    pub consumer_key: String,
    /// Consumer secret, the `cs_`-prefixed signing secret.
    pub consumer_secret: String,
}

impl Credential {
    /// Create a new credential from a key pair.
    pub fn new(consumer_key: &str, consumer_secret: &str) -> Self {
        Self {
            consumer_key: consumer_key.to_string(),
            consumer_secret: consumer_secret.to_string(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("consumer_key", &redact(&self.consumer_key))
            .field("consumer_secret", &redact(&self.consumer_secret))
            .finish()
    }
}

/// Keep the first and last three characters so users can tell credentials
/// apart without the log leaking anything usable.
fn redact(value: &str) -> String {
    if value.len() < 12 {
        "***".to_string()
    } else {
        format!("{}***{}", &value[..3], &value[value.len() - 3..])
    }
}
