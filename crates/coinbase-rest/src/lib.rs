//! REST API client for the Coinbase v2 API
//!
//! This crate provides a typed async client for the Coinbase wallet API:
//! accounts, addresses, transactions, buys, users, notifications, and the
//! public data endpoints (currencies, exchange rates, prices, time).
//!
//! # Features
//!
//! - **Signing**: HMAC-SHA256 over `timestamp + METHOD + path + body`
//! - **Envelopes**: `{data}` responses are unwrapped, `{error}` responses
//!   become [`RestError::Api`]
//! - **Pagination**: list endpoints follow `next_uri` cursors and return
//!   every item
//! - **Transport**: pluggable through [`HttpTransport`]; reqwest by default
//!
//! # Authentication
//!
//! Credentials are optional. Without them, reads are sent unsigned and
//! state-changing calls fail with [`RestError::AuthRequired`].
//!
//! # Example
//!
//! ```no_run
//! use coinbase_rest::{ClientConfig, CoinbaseClient, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new()
//!         .with_credentials(Credentials::from_env()?)
//!         .with_timeout(10);
//!     let client = CoinbaseClient::with_config(config)?;
//!
//!     let me = client.users().get_self().await?;
//!     println!("Signed in as {:?}", me.user.name);
//!
//!     let rates = client.exchange_rates().get_exchange_rates(Some("BTC")).await?;
//!     println!("1 BTC = {:?} USD", rates.rate("USD"));
//!
//!     Ok(())
//! }
//! ```

mod base;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod transport;

// Re-export main types
pub use base::{unwrap_envelope, QueryParams, DEFAULT_PAGE_LIMIT};
pub use client::{ClientConfig, CoinbaseClient};
pub use coinbase_auth::Credentials;
pub use endpoints::{
    AccountEndpoints, AddressEndpoints, BuyEndpoints, CurrencyEndpoints, ExchangeRateEndpoints,
    NotificationEndpoints, PriceEndpoints, TimeEndpoints, TransactionEndpoints, UserEndpoints,
};
pub use error::{RestError, RestResult};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportError};

#[cfg(any(test, feature = "test-utils"))]
pub use transport::MockTransport;

// Re-export record types
pub use coinbase_types as types;
pub use coinbase_types::{
    Account, AccountUpdate, Address, AddressCreate, AddressTransaction, Buy, Currency,
    ExchangeRates, MoneyMovement, NewTransaction, Notification, Price, PriceKind, SendMoney,
    ServerTime, Transaction, User, UserSelf, UserUpdate,
};
