//! Buy orders

use serde::{Deserialize, Serialize};

use crate::common::{Money, ResourceRef};

/// A purchase of cryptocurrency with a payment method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buy {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub payment_method: Option<ResourceRef>,
    #[serde(default)]
    pub transaction: Option<ResourceRef>,
    pub amount: Money,
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
    pub resource: String,
    pub resource_path: String,
    #[serde(default)]
    pub committed: bool,
    #[serde(default)]
    pub instant: bool,
    #[serde(default)]
    pub payout_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_buy_deserialization() {
        let buy: Buy = serde_json::from_str(
            r#"{
                "id": "67e0eaec-07d7-54c4-a72c-2e92826897df",
                "status": "completed",
                "payment_method": {
                    "id": "83562370-3e5c-51db-87da-752af5ab9559",
                    "resource": "payment_method",
                    "resource_path": "/v2/payment-methods/83562370"
                },
                "transaction": {
                    "id": "441b9494-b3f0-5b98-b9b0-4d82c21c252a",
                    "resource": "transaction",
                    "resource_path": "/v2/accounts/2bbf394c/transactions/441b9494"
                },
                "amount": {"amount": "1.00000000", "currency": "BTC"},
                "total": {"amount": "10.25", "currency": "USD"},
                "subtotal": {"amount": "10.10", "currency": "USD"},
                "created_at": "2015-01-31T20:49:02Z",
                "updated_at": "2015-02-11T16:54:02-08:00",
                "resource": "buy",
                "resource_path": "/v2/accounts/2bbf394c/buys/67e0eaec",
                "committed": true,
                "instant": false,
                "fee": {"amount": "0.15", "currency": "USD"},
                "payout_at": "2015-02-18T16:54:00-08:00"
            }"#,
        )
        .unwrap();
        assert_eq!(buy.total.unwrap().amount, dec!(10.25));
        assert_eq!(buy.fee.unwrap().amount, dec!(0.15));
        assert!(buy.committed);
        assert_eq!(buy.transaction.unwrap().resource, "transaction");
    }
}
