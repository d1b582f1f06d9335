//! User profiles

use coinbase_types::{User, UserSelf, UserUpdate};
use tracing::{debug, instrument};

use crate::base::{non_empty_update, BaseClient};
use crate::client::ClientConfig;
use crate::error::RestResult;

/// `/v2/user` and `/v2/users/{id}`
#[derive(Debug, Clone)]
pub struct UserEndpoints {
    api: BaseClient,
}

impl UserEndpoints {
    pub fn new(config: &ClientConfig) -> RestResult<Self> {
        Ok(Self {
            api: BaseClient::from_config(config)?,
        })
    }

    /// Get the API key owner's profile
    #[instrument(skip(self))]
    pub async fn get_self(&self) -> RestResult<UserSelf> {
        self.api.get("/v2/user", None).await
    }

    /// Get any user's public profile
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: &str) -> RestResult<User> {
        self.api.get(&format!("/v2/users/{}", user_id), None).await
    }

    /// Update the API key owner's profile
    ///
    /// Fails without a request when `update` carries no changes.
    #[instrument(skip(self))]
    pub async fn update_self(&self, update: &UserUpdate) -> RestResult<UserSelf> {
        let body = non_empty_update(update, "No user update information provided.")?;
        debug!("Updating user profile");
        self.api.put("/v2/user", &body).await
    }
}
