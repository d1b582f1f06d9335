//! Webhook notifications

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

use crate::common::{Money, ResourceRef};

/// Event that triggered a notification
///
/// Types this client does not know about are preserved in [`Other`].
///
/// [`Other`]: NotificationType::Other
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NotificationType {
    Ping,
    AddressNewPayment,
    BuyCreated,
    BuyCompleted,
    BuyCanceled,
    SellCreated,
    SellCompleted,
    SellCanceled,
    DepositCreated,
    DepositCompleted,
    DepositCanceled,
    WithdrawalCreated,
    WithdrawalCompleted,
    WithdrawalCanceled,
    Other(String),
}

impl NotificationType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ping => "ping",
            Self::AddressNewPayment => "wallet:addresses:new-payment",
            Self::BuyCreated => "wallet:buys:created",
            Self::BuyCompleted => "wallet:buys:completed",
            Self::BuyCanceled => "wallet:buys:canceled",
            Self::SellCreated => "wallet:sells:created",
            Self::SellCompleted => "wallet:sells:completed",
            Self::SellCanceled => "wallet:sells:canceled",
            Self::DepositCreated => "wallet:deposit:created",
            Self::DepositCompleted => "wallet:deposit:completed",
            Self::DepositCanceled => "wallet:deposit:canceled",
            Self::WithdrawalCreated => "wallet:withdrawal:created",
            Self::WithdrawalCompleted => "wallet:withdrawal:completed",
            Self::WithdrawalCanceled => "wallet:withdrawal:canceled",
            Self::Other(other) => other,
        }
    }
}

impl From<String> for NotificationType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ping" => Self::Ping,
            "wallet:addresses:new-payment" => Self::AddressNewPayment,
            "wallet:buys:created" => Self::BuyCreated,
            "wallet:buys:completed" => Self::BuyCompleted,
            "wallet:buys:canceled" => Self::BuyCanceled,
            "wallet:sells:created" => Self::SellCreated,
            "wallet:sells:completed" => Self::SellCompleted,
            "wallet:sells:canceled" => Self::SellCanceled,
            "wallet:deposit:created" => Self::DepositCreated,
            "wallet:deposit:completed" => Self::DepositCompleted,
            "wallet:deposit:canceled" => Self::DepositCanceled,
            "wallet:withdrawal:created" => Self::WithdrawalCreated,
            "wallet:withdrawal:completed" => Self::WithdrawalCompleted,
            "wallet:withdrawal:canceled" => Self::WithdrawalCanceled,
            _ => Self::Other(value),
        }
    }
}

impl From<NotificationType> for String {
    fn from(value: NotificationType) -> Self {
        match value {
            NotificationType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource the notification is about (a buy, sell, deposit, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationData {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub payment_method: Option<ResourceRef>,
    #[serde(default)]
    pub transaction: Option<ResourceRef>,
    #[serde(default)]
    pub amount: Option<Money>,
    #[serde(default)]
    pub total: Option<Money>,
    #[serde(default)]
    pub subtotal: Option<Money>,
    #[serde(default)]
    pub fee: Option<Money>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub resource_path: Option<String>,
    #[serde(default)]
    pub committed: Option<bool>,
    #[serde(default)]
    pub instant: Option<bool>,
    #[serde(default)]
    pub payout_at: Option<String>,
}

/// Outcome of the last webhook delivery attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    pub status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscriber {
    #[serde(rename = "type")]
    pub subscriber_type: String,
    #[serde(default)]
    pub client_id: Option<String>,
}

/// A webhook notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    #[serde(default)]
    pub data: Option<NotificationData>,
    #[serde(default)]
    pub additional_data: HashMap<String, Value>,
    #[serde(default)]
    pub delivered_at: Option<String>,
    #[serde(default)]
    pub delivery_response: Option<DeliveryResponse>,
    #[serde(default)]
    pub subscriber: Option<Subscriber>,
    #[serde(default)]
    pub user: Option<ResourceRef>,
    #[serde(default)]
    pub account: Option<ResourceRef>,
    #[serde(default)]
    pub delivery_attempts: u32,
    #[serde(default)]
    pub created_at: Option<String>,
    pub resource: String,
    pub resource_path: String,
}
