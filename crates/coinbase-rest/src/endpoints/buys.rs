//! Buy endpoints

use coinbase_types::Buy;
use tracing::instrument;

use crate::base::{BaseClient, QueryParams};
use crate::client::ClientConfig;
use crate::error::RestResult;

/// `/v2/accounts/{id}/buys`
#[derive(Debug, Clone)]
pub struct BuyEndpoints {
    api: BaseClient,
}

impl BuyEndpoints {
    pub fn new(config: &ClientConfig) -> RestResult<Self> {
        Ok(Self {
            api: BaseClient::from_config(config)?,
        })
    }

    /// List the buys of an account
    #[instrument(skip(self))]
    pub async fn list_buys(
        &self,
        account_id: &str,
        query: Option<&QueryParams>,
    ) -> RestResult<Vec<Buy>> {
        self.api
            .paginated_get(&format!("/v2/accounts/{}/buys", account_id), query)
            .await
    }

    /// Get a buy by its id
    #[instrument(skip(self))]
    pub async fn get_buy(&self, account_id: &str, buy_id: &str) -> RestResult<Buy> {
        self.api
            .get(&format!("/v2/accounts/{}/buys/{}", account_id, buy_id), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::test_support::mock_config;
    use rust_decimal_macros::dec;
    use serde_json::{json, Value};

    fn buy(id: &str) -> Value {
        json!({
            "id": id,
            "status": "created",
            "payment_method": {"id": "83562370", "resource": "payment_method", "resource_path": "/v2/payment-methods/83562370"},
            "transaction": {"id": "4117f7d6", "resource": "transaction", "resource_path": "/v2/accounts/2bbf394c/transactions/4117f7d6"},
            "amount": {"amount": "1.00000000", "currency": "BTC"},
            "total": {"amount": "10.25", "currency": "USD"},
            "subtotal": {"amount": "10.10", "currency": "USD"},
            "currency_symbol": "BTC",
            "resource": "buy",
            "resource_path": format!("/v2/accounts/2bbf394c/buys/{}", id)
        })
    }

    #[tokio::test]
    async fn test_list_and_get_buys() {
        let (config, mock) = mock_config(true);
        mock.push_json(json!({"pagination": {"limit": 100}, "data": [buy("67e0eaec"), buy("5a1c7b1c")]}));
        mock.push_json(json!({"data": buy("67e0eaec")}));

        let buys = BuyEndpoints::new(&config).unwrap();
        let all = buys.list_buys("2bbf394c", None).await.unwrap();
        assert_eq!(all.len(), 2);

        let one = buys.get_buy("2bbf394c", "67e0eaec").await.unwrap();
        assert_eq!(one.total.unwrap().amount, dec!(10.25));
        assert_eq!(
            mock.last_request().unwrap().url,
            "https://api.test/v2/accounts/2bbf394c/buys/67e0eaec"
        );
    }
}
