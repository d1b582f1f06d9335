//! Server time

use coinbase_types::ServerTime;
use tracing::instrument;

use crate::base::BaseClient;
use crate::client::ClientConfig;
use crate::error::RestResult;

/// `/v2/time`
#[derive(Debug, Clone)]
pub struct TimeEndpoints {
    api: BaseClient,
}

impl TimeEndpoints {
    pub fn new(config: &ClientConfig) -> RestResult<Self> {
        Ok(Self {
            api: BaseClient::from_config(config)?,
        })
    }

    /// Get the API server time
    #[instrument(skip(self))]
    pub async fn get_time(&self) -> RestResult<ServerTime> {
        self.api.get("/v2/time", None).await
    }
}
