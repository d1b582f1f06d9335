//! Receive addresses and the transactions sent to them

use serde::{Deserialize, Serialize};

use crate::common::{Money, NetworkInfo, ResourceRef};

/// A receive address belonging to an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: String,
    pub address: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub network: Option<String>,
    pub resource: String,
    pub resource_path: String,
}

/// A transaction received on an address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressTransaction {
    pub id: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
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
    pub network: Option<NetworkInfo>,
    #[serde(default)]
    pub from: Option<ResourceRef>,
}

/// Options for creating a new address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressCreate {
    /// Address label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AddressCreate {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_deserialization() {
        let address: Address = serde_json::from_str(
            r#"{
                "id": "dd3183eb-af1d-5f5d-a90d-cbff946435ff",
                "address": "mswUGcPHp1YnkLCgF1TtoryqSc5E9Q8xFa",
                "name": null,
                "created_at": "2015-01-31T20:49:02Z",
                "updated_at": "2015-03-31T17:25:29-07:00",
                "network": "bitcoin",
                "resource": "address",
                "resource_path": "/v2/accounts/2bbf394c/addresses/dd3183eb"
            }"#,
        )
        .unwrap();
        assert!(address.name.is_none());
        assert_eq!(address.network.as_deref(), Some("bitcoin"));
    }

    #[test]
    fn test_address_create_serialization() {
        assert_eq!(serde_json::to_string(&AddressCreate::default()).unwrap(), "{}");
        assert_eq!(
            serde_json::to_string(&AddressCreate::named("deposits")).unwrap(),
            r#"{"name":"deposits"}"#
        );
    }
}
