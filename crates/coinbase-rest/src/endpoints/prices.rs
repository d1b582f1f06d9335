//! Price quotes for currency pairs

use chrono::NaiveDate;
use coinbase_types::{Price, PriceKind};
use tracing::instrument;

use crate::base::{BaseClient, QueryParams};
use crate::client::ClientConfig;
use crate::error::RestResult;

/// `/v2/prices/{pair}/{buy,sell,spot}`
#[derive(Debug, Clone)]
pub struct PriceEndpoints {
    api: BaseClient,
}

impl PriceEndpoints {
    pub fn new(config: &ClientConfig) -> RestResult<Self> {
        Ok(Self {
            api: BaseClient::from_config(config)?,
        })
    }

    /// Get the price of a currency pair
    ///
    /// # Arguments
    /// * `pair` - Currency pair (e.g. "BTC-USD")
    /// * `kind` - Buy, sell or spot
    #[instrument(skip(self))]
    pub async fn get_price(&self, pair: &str, kind: PriceKind) -> RestResult<Price> {
        self.api
            .get(&format!("/v2/prices/{}/{}", pair, kind.as_str()), None)
            .await
    }

    /// Total price to buy one unit of the base currency
    pub async fn get_buy_price(&self, pair: &str) -> RestResult<Price> {
        self.get_price(pair, PriceKind::Buy).await
    }

    /// Total price to sell one unit of the base currency
    pub async fn get_sell_price(&self, pair: &str) -> RestResult<Price> {
        self.get_price(pair, PriceKind::Sell).await
    }

    /// Current spot price, or the spot price on a past UTC date
    #[instrument(skip(self))]
    pub async fn get_spot_price(&self, pair: &str, date: Option<NaiveDate>) -> RestResult<Price> {
        let query = date.map(|date| {
            QueryParams::new().with("date", date.format("%Y-%m-%d").to_string())
        });
        self.api
            .get(
                &format!("/v2/prices/{}/{}", pair, PriceKind::Spot.as_str()),
                query.as_ref(),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::test_support::mock_config;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[tokio::test]
    async fn test_buy_and_sell_price() {
        let (config, mock) = mock_config(false);
        mock.push_json(json!({"data": {"amount": "1020.25", "currency": "USD"}}));
        mock.push_json(json!({"data": {"amount": "1010.25", "currency": "USD", "base": "BTC"}}));

        let prices = PriceEndpoints::new(&config).unwrap();
        let buy = prices.get_buy_price("BTC-USD").await.unwrap();
        let sell = prices.get_sell_price("BTC-USD").await.unwrap();

        assert_eq!(buy.amount, dec!(1020.25));
        assert_eq!(sell.base.as_deref(), Some("BTC"));

        let urls: Vec<_> = mock.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            [
                "https://api.test/v2/prices/BTC-USD/buy",
                "https://api.test/v2/prices/BTC-USD/sell"
            ]
        );
    }

    #[tokio::test]
    async fn test_spot_price_with_date() {
        let (config, mock) = mock_config(false);
        mock.push_json(json!({"data": {"amount": "1015.00", "currency": "USD"}}));
        mock.push_json(json!({"data": {"amount": "980.10", "currency": "USD"}}));

        let prices = PriceEndpoints::new(&config).unwrap();
        prices.get_spot_price("BTC-USD", None).await.unwrap();
        let dated = prices
            .get_spot_price("BTC-USD", NaiveDate::from_ymd_opt(2024, 1, 5))
            .await
            .unwrap();
        assert_eq!(dated.amount, dec!(980.10));

        let requests = mock.requests();
        assert_eq!(requests[0].url, "https://api.test/v2/prices/BTC-USD/spot");
        assert_eq!(
            requests[1].url,
            "https://api.test/v2/prices/BTC-USD/spot?date=2024-01-05"
        );
    }
}
