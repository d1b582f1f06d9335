//! Account endpoints
//!
//! Listing and reading work unsigned; update and delete require credentials.

use coinbase_types::{Account, AccountUpdate};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::base::{non_empty_update, BaseClient, QueryParams};
use crate::client::ClientConfig;
use crate::error::RestResult;

/// `/v2/accounts`
#[derive(Debug, Clone)]
pub struct AccountEndpoints {
    api: BaseClient,
}

impl AccountEndpoints {
    pub fn new(config: &ClientConfig) -> RestResult<Self> {
        Ok(Self {
            api: BaseClient::from_config(config)?,
        })
    }

    /// List every account of the API key owner, following all pages
    ///
    /// # Arguments
    /// * `query` - Extra query parameters (e.g. `order`, `limit`)
    #[instrument(skip(self))]
    pub async fn list_accounts(&self, query: Option<&QueryParams>) -> RestResult<Vec<Account>> {
        debug!("Listing accounts");
        self.api.paginated_get("/v2/accounts", query).await
    }

    /// Get an account by its id
    #[instrument(skip(self))]
    pub async fn get_account(&self, account_id: &str) -> RestResult<Account> {
        self.api.get(&format!("/v2/accounts/{}", account_id), None).await
    }

    /// Update an account
    ///
    /// Fails without a request when `update` carries no changes.
    #[instrument(skip(self))]
    pub async fn update_account(
        &self,
        account_id: &str,
        update: &AccountUpdate,
    ) -> RestResult<Account> {
        let body = non_empty_update(update, "No account update information provided.")?;
        debug!("Updating account");
        self.api.put(&format!("/v2/accounts/{}", account_id), &body).await
    }

    /// Delete an account
    ///
    /// The API refuses primary accounts, accounts with a non-zero balance,
    /// fiat accounts and vaults with a pending withdrawal.
    #[instrument(skip(self))]
    pub async fn delete_account(&self, account_id: &str) -> RestResult<Value> {
        debug!("Deleting account");
        self.api.delete(&format!("/v2/accounts/{}", account_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::test_support::mock_config;
    use crate::error::RestError;
    use reqwest::Method;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn account(id: &str, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "primary": true,
            "type": "wallet",
            "currency": {"code": "BTC", "name": "Bitcoin", "type": "crypto"},
            "balance": {"amount": "0.00500000", "currency": "BTC"},
            "created_at": "2015-01-31T20:49:02Z",
            "updated_at": "2015-01-31T20:49:02Z",
            "resource": "account",
            "resource_path": format!("/v2/accounts/{}", id)
        })
    }

    #[tokio::test]
    async fn test_list_accounts_follows_pages() {
        let (config, mock) = mock_config(true);
        mock.push_json_all([
            json!({"data": [account("a", "BTC Wallet")], "pagination": {"next_uri": "/v2/accounts?starting_after=a"}}),
            json!({"data": [account("b", "ETH Wallet")], "pagination": {"next_uri": null}}),
        ]);

        let accounts = AccountEndpoints::new(&config).unwrap().list_accounts(None).await.unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].name, "BTC Wallet");
        assert_eq!(accounts[1].id, "b");
        assert_eq!(accounts[0].balance.amount, dec!(0.005));
    }

    #[tokio::test]
    async fn test_get_account() {
        let (config, mock) = mock_config(false);
        mock.push_json(json!({"data": account("2bbf394c", "My Wallet")}));

        let account = AccountEndpoints::new(&config)
            .unwrap()
            .get_account("2bbf394c")
            .await
            .unwrap();
        assert_eq!(account.name, "My Wallet");
        assert_eq!(mock.last_request().unwrap().url, "https://api.test/v2/accounts/2bbf394c");
    }

    #[tokio::test]
    async fn test_update_account_empty_is_rejected() {
        let (config, mock) = mock_config(true);
        let accounts = AccountEndpoints::new(&config).unwrap();

        let err = accounts
            .update_account("abc", &AccountUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RestError::InvalidParameter(_)));
        assert_eq!(err.to_string(), "No account update information provided.");
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_update_account_issues_put() {
        let (config, mock) = mock_config(true);
        mock.push_json(json!({"data": account("abc", "x")}));

        let updated = AccountEndpoints::new(&config)
            .unwrap()
            .update_account("abc", &AccountUpdate::name("x"))
            .await
            .unwrap();
        assert_eq!(updated.name, "x");

        let request = mock.last_request().unwrap();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.url, "https://api.test/v2/accounts/abc");
        assert_eq!(request.body.as_deref(), Some(r#"{"name":"x"}"#));
    }

    #[tokio::test]
    async fn test_delete_account() {
        let (config, mock) = mock_config(true);
        mock.push_response(crate::transport::HttpResponse::new(204, ""));

        let result = AccountEndpoints::new(&config)
            .unwrap()
            .delete_account("abc")
            .await
            .unwrap();
        assert_eq!(result, Value::Null);

        let request = mock.last_request().unwrap();
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.body.as_deref(), Some("{}"));
    }
}
