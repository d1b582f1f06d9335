//! Main REST client implementation

use std::sync::Arc;
use std::time::Duration;

use coinbase_auth::Credentials;
use tracing::info;

use crate::endpoints::{
    AccountEndpoints, AddressEndpoints, BuyEndpoints, CurrencyEndpoints, ExchangeRateEndpoints,
    NotificationEndpoints, PriceEndpoints, TimeEndpoints, TransactionEndpoints, UserEndpoints,
};
use crate::error::{RestError, RestResult};
use crate::transport::{HttpTransport, ReqwestTransport};

/// Production API origin
pub const DEFAULT_BASE_URL: &str = "https://api.coinbase.com";

/// Value sent in the `CB-VERSION` header
pub const DEFAULT_API_VERSION: &str = "2021-07-26";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default upper bound on pages fetched by one paginated call
pub const DEFAULT_MAX_PAGES: usize = 1000;

const DEFAULT_USER_AGENT: &str = concat!("coinbase-rest/", env!("CARGO_PKG_VERSION"));

/// Coinbase v2 REST API client
///
/// Holds one client per resource namespace. All of them share the same
/// configuration and HTTP transport.
///
/// # Example
///
/// ```no_run
/// use coinbase_rest::{CoinbaseClient, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Market data works without credentials
///     let client = CoinbaseClient::new()?;
///     let spot = client.prices().get_spot_price("BTC-USD", None).await?;
///     println!("BTC-USD: {}", spot.amount);
///
///     // Account endpoints need a key pair
///     let client = CoinbaseClient::with_credentials(Credentials::from_env()?)?;
///     for account in client.accounts().list_accounts(None).await? {
///         println!("{}: {}", account.name, account.balance.amount);
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CoinbaseClient {
    authenticated: bool,
    accounts: AccountEndpoints,
    addresses: AddressEndpoints,
    buys: BuyEndpoints,
    currencies: CurrencyEndpoints,
    exchange_rates: ExchangeRateEndpoints,
    notifications: NotificationEndpoints,
    prices: PriceEndpoints,
    time: TimeEndpoints,
    transactions: TransactionEndpoints,
    users: UserEndpoints,
}

impl CoinbaseClient {
    /// Create a new client without authentication
    ///
    /// Read endpoints are sent unsigned; anything that mutates state fails
    /// with [`RestError::AuthRequired`].
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::new().with_credentials(credentials))
    }

    /// Create a client from `COINBASE_API_KEY` / `COINBASE_API_SECRET`
    pub fn from_env() -> RestResult<Self> {
        Self::with_credentials(Credentials::from_env()?)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        config.validate()?;
        let transport = config.transport()?;
        let config = config.with_transport(transport);

        let client = Self {
            authenticated: config.credentials.is_some(),
            accounts: AccountEndpoints::new(&config)?,
            addresses: AddressEndpoints::new(&config)?,
            buys: BuyEndpoints::new(&config)?,
            currencies: CurrencyEndpoints::new(&config)?,
            exchange_rates: ExchangeRateEndpoints::new(&config)?,
            notifications: NotificationEndpoints::new(&config)?,
            prices: PriceEndpoints::new(&config)?,
            time: TimeEndpoints::new(&config)?,
            transactions: TransactionEndpoints::new(&config)?,
            users: UserEndpoints::new(&config)?,
        };

        info!(
            base_url = %config.base_url,
            authenticated = client.authenticated,
            "Created Coinbase REST client"
        );
        Ok(client)
    }

    /// Check if requests are signed
    pub fn has_credentials(&self) -> bool {
        self.authenticated
    }

    pub fn accounts(&self) -> &AccountEndpoints {
        &self.accounts
    }

    pub fn addresses(&self) -> &AddressEndpoints {
        &self.addresses
    }

    pub fn buys(&self) -> &BuyEndpoints {
        &self.buys
    }

    pub fn currencies(&self) -> &CurrencyEndpoints {
        &self.currencies
    }

    pub fn exchange_rates(&self) -> &ExchangeRateEndpoints {
        &self.exchange_rates
    }

    pub fn notifications(&self) -> &NotificationEndpoints {
        &self.notifications
    }

    pub fn prices(&self) -> &PriceEndpoints {
        &self.prices
    }

    pub fn time(&self) -> &TimeEndpoints {
        &self.time
    }

    pub fn transactions(&self) -> &TransactionEndpoints {
        &self.transactions
    }

    pub fn users(&self) -> &UserEndpoints {
        &self.users
    }
}

impl std::fmt::Debug for CoinbaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinbaseClient")
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// API origin, without a trailing path
    pub base_url: String,
    /// `CB-VERSION` header value
    pub api_version: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Page cap for paginated listings (`None` = unbounded)
    pub max_pages: Option<usize>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            max_pages: Some(DEFAULT_MAX_PAGES),
            transport: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set credentials when both halves are present
    pub fn with_optional_credentials(
        mut self,
        api_key: Option<String>,
        api_secret: Option<String>,
    ) -> Self {
        self.credentials = Credentials::from_parts(api_key, api_secret);
        self
    }

    /// Point the client at another origin (sandbox, mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the `CB-VERSION` header value
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the page cap for paginated listings
    pub fn with_max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Use a custom transport instead of the default reqwest one
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Check the configuration for values the client cannot work with
    pub fn validate(&self) -> RestResult<()> {
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(RestError::InvalidConfig(format!(
                "base_url must be an http(s) URL, got {:?}",
                self.base_url
            )));
        }
        if self.api_version.trim().is_empty() {
            return Err(RestError::InvalidConfig("api_version is empty".into()));
        }
        if self.timeout_secs == 0 {
            return Err(RestError::InvalidConfig("timeout_secs must be positive".into()));
        }
        if self.max_pages == Some(0) {
            return Err(RestError::InvalidConfig(
                "max_pages must be positive, use None for no cap".into(),
            ));
        }
        Ok(())
    }

    /// The configured transport, or a new reqwest transport
    pub(crate) fn transport(&self) -> RestResult<Arc<dyn HttpTransport>> {
        if let Some(transport) = &self.transport {
            return Ok(transport.clone());
        }
        let transport = ReqwestTransport::new(
            Duration::from_secs(self.timeout_secs),
            self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT),
        )?;
        Ok(Arc::new(transport))
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_pages", &self.max_pages)
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use serde_json::json;

    fn mock_client(mock: &Arc<MockTransport>, credentials: Option<Credentials>) -> CoinbaseClient {
        let mut config = ClientConfig::new().with_transport(mock.clone());
        if let Some(credentials) = credentials {
            config = config.with_credentials(credentials);
        }
        CoinbaseClient::with_config(config).unwrap()
    }

    #[test]
    fn test_client_without_credentials() {
        let client = CoinbaseClient::new().unwrap();
        assert!(!client.has_credentials());
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_timeout(60)
            .with_user_agent("test-agent")
            .with_base_url("http://localhost:8080")
            .with_max_pages(None);

        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.api_version, DEFAULT_API_VERSION);
        assert_eq!(config.max_pages, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.coinbase.com");
        assert_eq!(config.api_version, "2021-07-26");
        assert_eq!(config.max_pages, Some(DEFAULT_MAX_PAGES));
        assert!(config.credentials.is_none());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let bad = [
            ClientConfig::new().with_base_url("api.coinbase.com"),
            ClientConfig::new().with_api_version(" "),
            ClientConfig::new().with_timeout(0),
            ClientConfig::new().with_max_pages(Some(0)),
        ];
        for config in bad {
            let err = CoinbaseClient::with_config(config).unwrap_err();
            assert!(matches!(err, RestError::InvalidConfig(_)));
        }
    }

    #[test]
    fn test_partial_credentials_are_ignored() {
        let config = ClientConfig::new().with_optional_credentials(Some("key".into()), None);
        assert!(config.credentials.is_none());

        let config = ClientConfig::new()
            .with_optional_credentials(Some("key".into()), Some("secret".into()));
        assert!(config.credentials.is_some());
    }

    #[test]
    fn test_debug_hides_secret() {
        let config = ClientConfig::new().with_credentials(Credentials::new("key-123456789", "s3cr3t"));
        let debug = format!("{:?}", config);
        assert!(!debug.contains("s3cr3t"));

        let client = CoinbaseClient::with_config(config).unwrap();
        assert!(client.has_credentials());
        assert!(format!("{:?}", client).contains("has_credentials: true"));
    }

    #[tokio::test]
    async fn test_resource_clients_share_transport() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(json!({"data": {"iso": "2015-06-23T18:02:51Z", "epoch": 1435082571}}));
        mock.push_json(json!({"data": [{"id": "BTC", "name": "Bitcoin", "min_size": "0.00000001"}]}));

        let client = mock_client(&mock, None);
        client.time().get_time().await.unwrap();
        client.currencies().list_currencies().await.unwrap();

        let urls: Vec<_> = mock.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            [
                "https://api.coinbase.com/v2/time",
                "https://api.coinbase.com/v2/currencies"
            ]
        );
    }

    #[tokio::test]
    async fn test_unauthenticated_mutation_is_refused() {
        let mock = Arc::new(MockTransport::new());
        let client = mock_client(&mock, None);

        let err = client.accounts().delete_account("abc").await.unwrap_err();
        assert!(err.is_auth_error());
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_authenticated_client_signs_requests() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(json!({"data": {"iso": "2015-06-23T18:02:51Z", "epoch": 1435082571}}));

        let client = mock_client(&mock, Some(Credentials::new("key", "secret")));
        client.time().get_time().await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.header("CB-ACCESS-KEY"), Some("key"));
        assert!(request.header("CB-ACCESS-SIGN").is_some());
    }
}
