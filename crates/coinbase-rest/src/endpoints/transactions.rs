//! Account transactions: listing, sending, transferring and requesting money

use coinbase_types::{MoneyMovement, NewTransaction, SendMoney, Transaction};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::base::{BaseClient, QueryParams};
use crate::client::ClientConfig;
use crate::error::RestResult;

/// `/v2/accounts/{id}/transactions`
#[derive(Debug, Clone)]
pub struct TransactionEndpoints {
    api: BaseClient,
}

impl TransactionEndpoints {
    pub fn new(config: &ClientConfig) -> RestResult<Self> {
        Ok(Self {
            api: BaseClient::from_config(config)?,
        })
    }

    /// List the transactions of an account
    #[instrument(skip(self))]
    pub async fn list_transactions(
        &self,
        account_id: &str,
        query: Option<&QueryParams>,
    ) -> RestResult<Vec<Transaction>> {
        self.api
            .paginated_get(&format!("/v2/accounts/{}/transactions", account_id), query)
            .await
    }

    /// Get a transaction by its id
    #[instrument(skip(self))]
    pub async fn get_transaction(
        &self,
        account_id: &str,
        transaction_id: &str,
    ) -> RestResult<Transaction> {
        self.api
            .get(
                &format!("/v2/accounts/{}/transactions/{}", account_id, transaction_id),
                None,
            )
            .await
    }

    /// Create a send, transfer or request transaction
    #[instrument(skip(self))]
    pub async fn create_transaction(
        &self,
        account_id: &str,
        transaction: &NewTransaction,
    ) -> RestResult<Transaction> {
        debug!("Creating transaction");
        self.api
            .post(&format!("/v2/accounts/{}/transactions", account_id), transaction)
            .await
    }

    /// Send funds to an email, a crypto address or another account
    pub async fn send_money(&self, account_id: &str, send: SendMoney) -> RestResult<Transaction> {
        self.create_transaction(account_id, &NewTransaction::Send(send))
            .await
    }

    /// Move funds between two accounts of the API key owner
    pub async fn transfer_money(
        &self,
        account_id: &str,
        transfer: MoneyMovement,
    ) -> RestResult<Transaction> {
        self.create_transaction(account_id, &NewTransaction::Transfer(transfer))
            .await
    }

    /// Request money from an email address
    pub async fn request_money(
        &self,
        account_id: &str,
        request: MoneyMovement,
    ) -> RestResult<Transaction> {
        self.create_transaction(account_id, &NewTransaction::Request(request))
            .await
    }

    /// Re-send the email of a pending money request
    #[instrument(skip(self))]
    pub async fn resend_request(
        &self,
        account_id: &str,
        transaction_id: &str,
    ) -> RestResult<Value> {
        self.api
            .post_empty(&format!(
                "/v2/accounts/{}/transactions/{}/resend",
                account_id, transaction_id
            ))
            .await
    }

    /// Cancel a pending money request
    #[instrument(skip(self))]
    pub async fn cancel_request(
        &self,
        account_id: &str,
        transaction_id: &str,
    ) -> RestResult<Value> {
        self.api
            .delete(&format!(
                "/v2/accounts/{}/transactions/{}",
                account_id, transaction_id
            ))
            .await
    }
}
