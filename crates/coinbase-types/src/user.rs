//! User profiles

use serde::{Deserialize, Serialize};

/// Public profile of a Coinbase user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub profile_location: Option<String>,
    #[serde(default)]
    pub profile_bio: Option<String>,
    #[serde(default)]
    pub profile_url: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub resource: String,
    pub resource_path: String,
    /// Only visible on the API key owner's own profile
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub is_in_europe: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nationality {
    pub code: String,
    pub name: String,
}

/// Verification tier of the API key owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tiers {
    #[serde(default)]
    pub completed_description: Option<String>,
    #[serde(default)]
    pub upgrade_button_text: Option<String>,
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralMoney {
    pub amount: String,
    pub currency: String,
    #[serde(default)]
    pub currency_symbol: Option<String>,
    #[serde(default)]
    pub referral_threshold: Option<String>,
}

/// Full profile of the API key owner (`GET /v2/user`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSelf {
    #[serde(flatten)]
    pub user: User,
    #[serde(default)]
    pub legacy_id: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub native_currency: Option<String>,
    #[serde(default)]
    pub bitcoin_unit: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<Country>,
    #[serde(default)]
    pub nationality: Option<Nationality>,
    #[serde(default)]
    pub region_supports_fiat_transfers: Option<bool>,
    #[serde(default)]
    pub region_supports_crypto_to_crypto_transfers: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub supports_rewards: Option<bool>,
    #[serde(default)]
    pub tiers: Option<Tiers>,
    #[serde(default)]
    pub referral_money: Option<ReferralMoney>,
    #[serde(default)]
    pub has_blocking_buy_restrictions: Option<bool>,
    #[serde(default)]
    pub has_made_a_purchase: Option<bool>,
    #[serde(default)]
    pub has_buy_deposit_payment_methods: Option<bool>,
    #[serde(default)]
    pub has_unverified_buy_deposit_payment_methods: Option<bool>,
    #[serde(default)]
    pub needs_kyc_remediation: Option<bool>,
    #[serde(default)]
    pub show_instant_ach_ux: Option<bool>,
    #[serde(default)]
    pub user_type: Option<String>,
}

/// Fields that can be changed on the API key owner's profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_currency: Option<String>,
}

impl UserUpdate {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }

    pub fn with_native_currency(mut self, currency: impl Into<String>) -> Self {
        self.native_currency = Some(currency.into());
        self
    }

    /// Check if the update carries no changes
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.time_zone.is_none() && self.native_currency.is_none()
    }
}
