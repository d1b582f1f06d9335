//! Receive address endpoints

use coinbase_types::{Address, AddressCreate, AddressTransaction};
use tracing::{debug, instrument};

use crate::base::{BaseClient, QueryParams};
use crate::client::ClientConfig;
use crate::error::RestResult;

/// `/v2/accounts/{id}/addresses`
#[derive(Debug, Clone)]
pub struct AddressEndpoints {
    api: BaseClient,
}

impl AddressEndpoints {
    pub fn new(config: &ClientConfig) -> RestResult<Self> {
        Ok(Self {
            api: BaseClient::from_config(config)?,
        })
    }

    /// List the addresses of an account
    #[instrument(skip(self))]
    pub async fn list_addresses(
        &self,
        account_id: &str,
        query: Option<&QueryParams>,
    ) -> RestResult<Vec<Address>> {
        self.api
            .paginated_get(&format!("/v2/accounts/{}/addresses", account_id), query)
            .await
    }

    /// Get an address by its id
    #[instrument(skip(self))]
    pub async fn get_address(&self, account_id: &str, address_id: &str) -> RestResult<Address> {
        self.api
            .get(
                &format!("/v2/accounts/{}/addresses/{}", account_id, address_id),
                None,
            )
            .await
    }

    /// List the transactions received on an address
    #[instrument(skip(self))]
    pub async fn list_address_transactions(
        &self,
        account_id: &str,
        address_id: &str,
        query: Option<&QueryParams>,
    ) -> RestResult<Vec<AddressTransaction>> {
        self.api
            .paginated_get(
                &format!(
                    "/v2/accounts/{}/addresses/{}/transactions",
                    account_id, address_id
                ),
                query,
            )
            .await
    }

    /// Create a new receive address
    #[instrument(skip(self))]
    pub async fn create_address(
        &self,
        account_id: &str,
        options: &AddressCreate,
    ) -> RestResult<Address> {
        debug!("Creating address");
        self.api
            .post(&format!("/v2/accounts/{}/addresses", account_id), options)
            .await
    }
}
