//! Data API records: currencies, exchange rates, prices, server time

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A currency supported by Coinbase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Currency code (e.g. "USD")
    pub id: String,
    pub name: String,
    /// Minimum amount that can be transacted
    #[serde(with = "rust_decimal::serde::str")]
    pub min_size: Decimal,
}

/// Exchange rates from a base currency to every other currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRates {
    /// Base currency
    pub currency: String,
    /// Units of each target currency per unit of the base currency
    pub rates: BTreeMap<String, Decimal>,
}

impl ExchangeRates {
    /// Get the rate to a target currency
    pub fn rate(&self, currency: &str) -> Option<Decimal> {
        self.rates.get(currency).copied()
    }
}

/// Kind of price quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceKind {
    Buy,
    Sell,
    Spot,
}

impl PriceKind {
    /// Path segment used by the prices endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Spot => "spot",
        }
    }
}

/// A price quote for a currency pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Quote currency
    pub currency: String,
    /// Base currency, when the API includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
}

/// Coinbase server time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerTime {
    /// ISO-8601 timestamp
    pub iso: String,
    /// Seconds since the Unix epoch
    pub epoch: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_deserialization() {
        let currency: Currency =
            serde_json::from_str(r#"{"id": "AED", "name": "United Arab Emirates Dirham", "min_size": "0.01000000"}"#)
                .unwrap();
        assert_eq!(currency.min_size, dec!(0.01));
    }

    #[test]
    fn test_exchange_rates() {
        let rates: ExchangeRates = serde_json::from_str(
            r#"{"currency": "BTC", "rates": {"USD": "43123.45", "EUR": "39876.1"}}"#,
        )
        .unwrap();
        assert_eq!(rates.rate("USD"), Some(dec!(43123.45)));
        assert_eq!(rates.rate("JPY"), None);
    }

    #[test]
    fn test_price_and_kind() {
        let price: Price =
            serde_json::from_str(r#"{"amount": "1010.25", "currency": "USD", "base": "BTC"}"#).unwrap();
        assert_eq!(price.amount, dec!(1010.25));
        assert_eq!(price.base.as_deref(), Some("BTC"));
        assert_eq!(PriceKind::Spot.as_str(), "spot");
    }

    #[test]
    fn test_server_time() {
        let time: ServerTime =
            serde_json::from_str(r#"{"iso": "2015-06-23T18:02:51Z", "epoch": 1435082571}"#).unwrap();
        assert_eq!(time.epoch, 1_435_082_571);
    }
}
