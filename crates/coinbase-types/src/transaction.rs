//! Account transactions
//!
//! A [`Transaction`] carries the fields every transaction has, plus a
//! [`TransactionKind`] discriminated by the `type` field with the payload
//! specific to buys, sells, sends and money requests. Any other `type`
//! (e.g. `transfer`, `fiat_deposit`) is kept as [`TransactionKind::Other`].

use rust_decimal::Decimal;
use serde::de::{Deserializer, Error as _};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::common::{Money, NetworkInfo, ResourceRef};

/// Human readable description of a transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionDetails {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Recipient of a money request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecipient {
    /// Always "email"
    pub resource: String,
    pub email: String,
}

/// Type-specific part of a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionKind {
    /// Purchase of cryptocurrency
    Buy { buy: ResourceRef },
    /// Sale of cryptocurrency
    Sell { sell: ResourceRef },
    /// Outgoing or incoming transfer
    Send {
        network: Option<NetworkInfo>,
        to: Option<ResourceRef>,
        from: Option<ResourceRef>,
    },
    /// Money request sent by email
    Request { to: EmailRecipient },
    /// Any other type; the remaining fields are kept as sent
    Other {
        kind: String,
        fields: Map<String, Value>,
    },
}

const KNOWN_KINDS: [&str; 4] = ["buy", "sell", "send", "request"];

/// Wire form of the modelled kinds
#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum KnownKind {
    Buy {
        buy: ResourceRef,
    },
    Sell {
        sell: ResourceRef,
    },
    Send {
        #[serde(default)]
        network: Option<NetworkInfo>,
        #[serde(default)]
        to: Option<ResourceRef>,
        #[serde(default)]
        from: Option<ResourceRef>,
    },
    Request {
        to: EmailRecipient,
    },
}

impl From<KnownKind> for TransactionKind {
    fn from(kind: KnownKind) -> Self {
        match kind {
            KnownKind::Buy { buy } => Self::Buy { buy },
            KnownKind::Sell { sell } => Self::Sell { sell },
            KnownKind::Send { network, to, from } => Self::Send { network, to, from },
            KnownKind::Request { to } => Self::Request { to },
        }
    }
}

impl TransactionKind {
    /// The `type` discriminator as sent by the API
    pub fn as_str(&self) -> &str {
        match self {
            Self::Buy { .. } => "buy",
            Self::Sell { .. } => "sell",
            Self::Send { .. } => "send",
            Self::Request { .. } => "request",
            Self::Other { kind, .. } => kind,
        }
    }

    fn to_known(&self) -> Option<KnownKind> {
        Some(match self.clone() {
            Self::Buy { buy } => KnownKind::Buy { buy },
            Self::Sell { sell } => KnownKind::Sell { sell },
            Self::Send { network, to, from } => KnownKind::Send { network, to, from },
            Self::Request { to } => KnownKind::Request { to },
            Self::Other { .. } => return None,
        })
    }
}

impl<'de> Deserialize<'de> for TransactionKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;
        let kind = match fields.get("type") {
            Some(Value::String(kind)) => kind.clone(),
            Some(_) => return Err(D::Error::custom("transaction `type` is not a string")),
            None => return Err(D::Error::missing_field("type")),
        };

        if KNOWN_KINDS.contains(&kind.as_str()) {
            return KnownKind::deserialize(Value::Object(fields))
                .map(Self::from)
                .map_err(D::Error::custom);
        }

        fields.remove("type");
        Ok(Self::Other { kind, fields })
    }
}

impl Serialize for TransactionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Some(known) = self.to_known() {
            return known.serialize(serializer);
        }

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", self.as_str())?;
        if let Self::Other { fields, .. } = self {
            for (key, value) in fields {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

/// A transaction on an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub status: String,
    pub amount: Money,
    pub native_amount: Money,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    pub resource: String,
    pub resource_path: String,
    #[serde(default)]
    pub details: Option<TransactionDetails>,
    #[serde(flatten)]
    pub kind: TransactionKind,
}

impl Transaction {
    /// The `type` discriminator as sent by the API
    pub fn type_name(&self) -> &str {
        self.kind.as_str()
    }
}

/// Send funds to an email, crypto address or another user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMoney {
    /// Email, crypto address or account id of the recipient
    pub to: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_notifications: Option<bool>,
    /// Miner fee override
    #[serde(
        default,
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub fee: Option<Decimal>,
    /// Idempotency token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idem: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_financial_institution: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_institution_website: Option<String>,
}

impl SendMoney {
    pub fn new(to: impl Into<String>, amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            amount,
            currency: currency.into(),
            description: None,
            skip_notifications: None,
            fee: None,
            idem: None,
            to_financial_institution: None,
            financial_institution_website: None,
        }
    }

    /// Set a note shown to the recipient
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set an idempotency token so a retried send is not duplicated
    pub fn with_idem(mut self, idem: impl Into<String>) -> Self {
        self.idem = Some(idem.into());
        self
    }

    /// Override the network fee
    pub fn with_fee(mut self, fee: Decimal) -> Self {
        self.fee = Some(fee);
        self
    }

    /// Suppress notification emails
    pub fn with_skip_notifications(mut self, skip: bool) -> Self {
        self.skip_notifications = Some(skip);
        self
    }
}

/// Move funds between two accounts of the same user, or request funds
/// from an email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyMovement {
    /// Target account id (transfer) or email (request)
    pub to: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MoneyMovement {
    pub fn new(to: impl Into<String>, amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            amount,
            currency: currency.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Body of `POST /v2/accounts/{id}/transactions`, keyed by `type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NewTransaction {
    Send(SendMoney),
    Transfer(MoneyMovement),
    Request(MoneyMovement),
}
