//! API key credentials for Coinbase
//!
//! Implements HMAC-SHA256 signing as required by Coinbase's API-key
//! authentication.
//!
//! # Security
//!
//! The API secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use tracing::debug;

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

const API_KEY_VAR: &str = "COINBASE_API_KEY";
const API_SECRET_VAR: &str = "COINBASE_API_SECRET";

/// Compute `hex(HMAC-SHA256(secret, message))` in lowercase.
pub fn sign(secret: &str, message: &str) -> AuthResult<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| AuthError::InvalidCredentials(format!("Unusable API secret: {}", e)))?;
    mac.update(message.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Build the canonical message that gets signed.
///
/// `request_path` must include the query string, if any. `body` is the exact
/// serialized request body, or empty for GET.
pub fn canonical_message(timestamp: &str, method: &str, request_path: &str, body: &str) -> String {
    format!("{}{}{}{}", timestamp, method, request_path, body)
}

/// Current time as whole seconds since the Unix epoch.
pub fn unix_timestamp() -> String {
    chrono::Utc::now().timestamp().to_string()
}

/// API key credentials for authenticated requests
///
/// The secret is zeroized when the Credentials are dropped.
pub struct Credentials {
    /// API key (public)
    api_key: String,
    /// API secret (zeroized on drop)
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Build credentials only when both halves of the pair are present.
    ///
    /// A key without a secret (or the reverse) is treated the same as no
    /// credentials at all: requests go out unsigned.
    pub fn from_parts(api_key: Option<String>, api_secret: Option<String>) -> Option<Self> {
        match (api_key, api_secret) {
            (Some(key), Some(secret)) => Some(Self::new(key, secret)),
            _ => None,
        }
    }

    /// Create credentials from environment variables
    ///
    /// Reads `COINBASE_API_KEY` and `COINBASE_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = read_var(API_KEY_VAR)?;
        let api_secret = read_var(API_SECRET_VAR)?;
        debug!("Loaded API credentials from environment");
        Ok(Self::new(api_key, api_secret))
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign a request
    ///
    /// # Arguments
    /// * `timestamp` - Whole epoch seconds, as sent in `CB-ACCESS-TIMESTAMP`
    /// * `method` - Upper-case HTTP method
    /// * `request_path` - Path plus query string (e.g. "/v2/accounts?limit=100")
    /// * `body` - Serialized JSON body, empty for GET
    ///
    /// # Returns
    /// Lowercase hex signature for `CB-ACCESS-SIGN`
    pub fn sign(
        &self,
        timestamp: &str,
        method: &str,
        request_path: &str,
        body: &str,
    ) -> AuthResult<String> {
        let message = canonical_message(timestamp, method, request_path, body);
        sign(self.api_secret.expose_secret(), &message)
    }
}

fn read_var(name: &str) -> AuthResult<String> {
    let value = std::env::var(name).map_err(|_| AuthError::EnvVarNotSet(name.to_string()))?;
    if value.trim().is_empty() {
        return Err(AuthError::InvalidCredentials(format!("{} is empty", name)));
    }
    Ok(value)
}

impl Clone for Credentials {
    /// Clone credentials (creates a new SecretString with the same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretString::from(self.api_secret.expose_secret().to_owned()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.api_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", prefix))
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Request signer for building authenticated requests
///
/// Captures a single timestamp so the `CB-ACCESS-TIMESTAMP` header and the
/// signed message always agree.
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    timestamp: String,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer stamped with the current time
    pub fn new(credentials: &'a Credentials) -> Self {
        Self::with_timestamp(credentials, unix_timestamp())
    }

    /// Create a request signer with a fixed timestamp
    pub fn with_timestamp(credentials: &'a Credentials, timestamp: impl Into<String>) -> Self {
        Self {
            credentials,
            timestamp: timestamp.into(),
        }
    }

    /// Get the timestamp for this request
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Sign the request
    pub fn sign(&self, method: &str, request_path: &str, body: &str) -> AuthResult<String> {
        self.credentials
            .sign(&self.timestamp, method, request_path, body)
    }
}
