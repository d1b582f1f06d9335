//! API key credentials and request signing for the Coinbase v2 REST API
//!
//! Coinbase authenticates API-key requests with three headers:
//!
//! - `CB-ACCESS-KEY` - the API key
//! - `CB-ACCESS-TIMESTAMP` - whole seconds since the Unix epoch
//! - `CB-ACCESS-SIGN` - lowercase hex HMAC-SHA256 of the canonical message
//!
//! The canonical message is `timestamp + METHOD + request_path + body`, where
//! `request_path` includes the query string and `body` is empty for GET.
//!
//! # Example
//!
//! ```no_run
//! use coinbase_auth::{Credentials, RequestSigner};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!     let signer = RequestSigner::new(&creds);
//!     let signature = signer.sign("GET", "/v2/accounts?limit=100", "")?;
//!     println!("{} {}", signer.timestamp(), signature);
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;

pub use credentials::{canonical_message, sign, unix_timestamp, Credentials, RequestSigner};
pub use error::{AuthError, AuthResult};
