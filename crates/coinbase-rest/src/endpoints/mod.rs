//! API endpoint implementations
//!
//! One client per resource namespace. Each owns its own base client and can
//! be built on its own from a [`ClientConfig`](crate::ClientConfig).

pub mod accounts;
pub mod addresses;
pub mod buys;
pub mod currencies;
pub mod exchange_rates;
pub mod notifications;
pub mod prices;
pub mod time;
pub mod transactions;
pub mod users;

pub use accounts::AccountEndpoints;
pub use addresses::AddressEndpoints;
pub use buys::BuyEndpoints;
pub use currencies::CurrencyEndpoints;
pub use exchange_rates::ExchangeRateEndpoints;
pub use notifications::NotificationEndpoints;
pub use prices::PriceEndpoints;
pub use time::TimeEndpoints;
pub use transactions::TransactionEndpoints;
pub use users::UserEndpoints;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use coinbase_auth::Credentials;

    use crate::client::ClientConfig;
    use crate::transport::MockTransport;

    /// Config pointing at a fresh mock transport
    pub(crate) fn mock_config(signed: bool) -> (ClientConfig, Arc<MockTransport>) {
        let mock = Arc::new(MockTransport::new());
        let mut config = ClientConfig::new()
            .with_base_url("https://api.test")
            .with_transport(mock.clone());
        if signed {
            config = config.with_credentials(Credentials::new("test-key", "test-secret"));
        }
        (config, mock)
    }
}
