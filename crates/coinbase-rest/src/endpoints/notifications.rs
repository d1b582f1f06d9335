//! Webhook notifications

use coinbase_types::Notification;
use tracing::instrument;

use crate::base::{BaseClient, QueryParams};
use crate::client::ClientConfig;
use crate::error::RestResult;

/// `/v2/notifications`
#[derive(Debug, Clone)]
pub struct NotificationEndpoints {
    api: BaseClient,
}

impl NotificationEndpoints {
    pub fn new(config: &ClientConfig) -> RestResult<Self> {
        Ok(Self {
            api: BaseClient::from_config(config)?,
        })
    }

    /// List notifications delivered to the API key owner
    #[instrument(skip(self))]
    pub async fn list_notifications(
        &self,
        query: Option<&QueryParams>,
    ) -> RestResult<Vec<Notification>> {
        self.api.paginated_get("/v2/notifications", query).await
    }

    /// Get a notification by its id
    #[instrument(skip(self))]
    pub async fn get_notification(&self, notification_id: &str) -> RestResult<Notification> {
        self.api
            .get(&format!("/v2/notifications/{}", notification_id), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::test_support::mock_config;
    use coinbase_types::NotificationType;
    use serde_json::{json, Value};

    fn notification(id: &str, kind: &str) -> Value {
        json!({
            "id": id,
            "type": kind,
            "data": {"id": "hh725b2d", "status": "completed", "resource": "buy"},
            "user": {"id": "f01c821e", "resource": "user", "resource_path": "/v2/users/f01c821e"},
            "account": {"id": "8d5f086c", "resource": "account", "resource_path": "/v2/accounts/8d5f086c"},
            "delivery_attempts": 0,
            "created_at": "2015-01-31T20:49:02Z",
            "resource": "notification",
            "resource_path": format!("/v2/notifications/{}", id)
        })
    }

    #[tokio::test]
    async fn test_list_notifications() {
        let (config, mock) = mock_config(true);
        mock.push_json_all([
            json!({"pagination": {"next_uri": "/v2/notifications?starting_after=6bf0ca21"}, "data": [notification("6bf0ca21", "wallet:buys:completed")]}),
            json!({"pagination": {}, "data": [notification("7c1f2b33", "wallet:vaults:created")]}),
        ]);

        let all = NotificationEndpoints::new(&config)
            .unwrap()
            .list_notifications(None)
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].notification_type, NotificationType::BuyCompleted);
        assert_eq!(
            all[1].notification_type,
            NotificationType::Other("wallet:vaults:created".into())
        );
    }

    #[tokio::test]
    async fn test_get_notification() {
        let (config, mock) = mock_config(true);
        mock.push_json(json!({"data": notification("6bf0ca21", "ping")}));

        let one = NotificationEndpoints::new(&config)
            .unwrap()
            .get_notification("6bf0ca21")
            .await
            .unwrap();
        assert_eq!(one.notification_type, NotificationType::Ping);
        assert_eq!(
            mock.last_request().unwrap().url,
            "https://api.test/v2/notifications/6bf0ca21"
        );
    }
}
