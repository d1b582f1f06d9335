//! Shared types for the Coinbase v2 REST API
//!
//! This crate provides the record shapes returned by the API and the
//! response envelope every payload is wrapped in. It has minimal
//! dependencies and can be used independently of the HTTP client.
//!
//! # Key Types
//!
//! - [`Envelope`], [`Pagination`] - Response wrapper and cursor metadata
//! - [`Money`], [`ResourceRef`] - Shared building blocks
//! - [`Account`], [`Address`], [`Transaction`], [`Buy`] - Wallet records
//! - [`User`], [`UserSelf`] - Profiles
//! - [`Notification`] - Webhook notifications
//! - [`Currency`], [`ExchangeRates`], [`Price`], [`ServerTime`] - Data API
//!
//! All monetary amounts are decimal strings on the wire and are parsed into
//! [`Decimal`]; timestamps are kept as the ISO-8601 strings the API sends.

pub mod account;
pub mod address;
pub mod buy;
pub mod common;
pub mod envelope;
pub mod market;
pub mod notification;
pub mod transaction;
pub mod user;

// Re-export commonly used types
pub use account::*;
pub use address::*;
pub use buy::*;
pub use common::*;
pub use envelope::*;
pub use market::*;
pub use notification::*;
pub use transaction::*;
pub use user::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
