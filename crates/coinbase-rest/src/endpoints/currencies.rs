//! Supported currencies

use coinbase_types::Currency;
use tracing::instrument;

use crate::base::BaseClient;
use crate::client::ClientConfig;
use crate::error::RestResult;

/// `/v2/currencies`
#[derive(Debug, Clone)]
pub struct CurrencyEndpoints {
    api: BaseClient,
}

impl CurrencyEndpoints {
    pub fn new(config: &ClientConfig) -> RestResult<Self> {
        Ok(Self {
            api: BaseClient::from_config(config)?,
        })
    }

    /// List known currencies
    ///
    /// Single request; the listing is not paginated.
    #[instrument(skip(self))]
    pub async fn list_currencies(&self) -> RestResult<Vec<Currency>> {
        self.api.get("/v2/currencies", None).await
    }
}
