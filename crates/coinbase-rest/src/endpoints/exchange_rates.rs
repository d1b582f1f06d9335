//! Exchange rates

use coinbase_types::ExchangeRates;
use tracing::instrument;

use crate::base::{BaseClient, QueryParams};
use crate::client::ClientConfig;
use crate::error::RestResult;

/// Base currency used when none is given
pub const DEFAULT_CURRENCY: &str = "USD";

/// `/v2/exchange-rates`
#[derive(Debug, Clone)]
pub struct ExchangeRateEndpoints {
    api: BaseClient,
}

impl ExchangeRateEndpoints {
    pub fn new(config: &ClientConfig) -> RestResult<Self> {
        Ok(Self {
            api: BaseClient::from_config(config)?,
        })
    }

    /// Get the current exchange rates for a base currency
    ///
    /// # Arguments
    /// * `currency` - Base currency (defaults to USD)
    #[instrument(skip(self))]
    pub async fn get_exchange_rates(&self, currency: Option<&str>) -> RestResult<ExchangeRates> {
        let query = QueryParams::new().with("currency", currency.unwrap_or(DEFAULT_CURRENCY));
        self.api.get("/v2/exchange-rates", Some(&query)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::test_support::mock_config;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[tokio::test]
    async fn test_exchange_rates_default_currency() {
        let (config, mock) = mock_config(false);
        mock.push_json(json!({"data": {"currency": "USD", "rates": {"BTC": "0.0000157", "EUR": "0.92"}}}));

        let rates = ExchangeRateEndpoints::new(&config)
            .unwrap()
            .get_exchange_rates(None)
            .await
            .unwrap();
        assert_eq!(rates.currency, "USD");
        assert_eq!(rates.rate("EUR"), Some(dec!(0.92)));
        assert_eq!(
            mock.last_request().unwrap().url,
            "https://api.test/v2/exchange-rates?currency=USD"
        );
    }

    #[tokio::test]
    async fn test_exchange_rates_for_currency() {
        let (config, mock) = mock_config(false);
        mock.push_json(json!({"data": {"currency": "BTC", "rates": {"USD": "63500.12"}}}));

        let rates = ExchangeRateEndpoints::new(&config)
            .unwrap()
            .get_exchange_rates(Some("BTC"))
            .await
            .unwrap();
        assert_eq!(rates.rate("USD"), Some(dec!(63500.12)));
        assert!(mock.last_request().unwrap().url.ends_with("?currency=BTC"));
    }
}
