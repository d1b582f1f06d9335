//! Wallet accounts

use serde::{Deserialize, Serialize};

use crate::common::Money;

/// Kind of account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Wallet,
    Fiat,
    Vault,
    /// Any type this client does not know about yet
    #[serde(other)]
    Other,
}

/// Currency details embedded in an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountCurrency {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub sort_index: Option<u32>,
    #[serde(default)]
    pub exponent: Option<u32>,
    #[serde(rename = "type")]
    pub currency_type: String,
    #[serde(default)]
    pub address_regex: Option<String>,
    #[serde(default)]
    pub asset_id: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// A Coinbase account (one per currency wallet, vault or fiat balance)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub primary: bool,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub currency: AccountCurrency,
    pub balance: Money,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    pub resource: String,
    pub resource_path: String,
    #[serde(default)]
    pub allow_deposits: bool,
    #[serde(default)]
    pub allow_withdrawals: bool,
}

/// Fields that can be changed on an account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AccountUpdate {
    /// Rename the account
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Check if the update carries no changes
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}
