//! Building blocks shared by several records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in a given currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Decimal amount, sent as a string on the wire
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Currency code (e.g. "BTC", "USD")
    pub currency: String,
}

impl Money {
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

/// Reference to another resource (`{id, resource, resource_path}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    #[serde(default)]
    pub id: Option<String>,
    /// Resource kind (e.g. "user", "account", "transaction")
    pub resource: String,
    #[serde(default)]
    pub resource_path: Option<String>,
}

/// Blockchain network state of a transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInfo {
    pub status: String,
    #[serde(default)]
    pub status_description: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub hash: Option<String>,
}
