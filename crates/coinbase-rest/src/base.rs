//! Shared request layer used by every resource client
//!
//! [`BaseClient`] is the only component that builds requests. It owns the
//! API origin, the `CB-VERSION` header value and the request authenticator,
//! and implements the three behaviours every endpoint relies on:
//!
//! - signing (`timestamp + METHOD + path?query + body`, HMAC-SHA256, hex)
//! - envelope unwrapping ([`unwrap_envelope`])
//! - cursor pagination ([`BaseClient::paginated_get`])

use std::sync::Arc;

use coinbase_auth::{Credentials, RequestSigner};
use coinbase_types::{error_text, is_truthy, Envelope};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::client::ClientConfig;
use crate::error::{RestError, RestResult};
use crate::transport::{HttpRequest, HttpTransport};

/// Page size requested by paginated listings unless the caller overrides it
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

const HEADER_ACCEPT: &str = "accept";
const HEADER_CONTENT_TYPE: &str = "Content-Type";
const HEADER_VERSION: &str = "CB-VERSION";
const HEADER_ACCESS_KEY: &str = "CB-ACCESS-KEY";
const HEADER_ACCESS_SIGN: &str = "CB-ACCESS-SIGN";
const HEADER_ACCESS_TIMESTAMP: &str = "CB-ACCESS-TIMESTAMP";
const JSON: &str = "application/json";

/// Ordered query parameters
///
/// Keys keep the order they were added in and are not deduplicated by
/// [`push`](Self::push); [`set`](Self::set) replaces an existing key in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`push`](Self::push)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    /// Append a parameter
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// Replace the first parameter named `key`, or append it
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key.to_string(), value)),
        }
    }

    /// Layer `other` over these parameters.
    ///
    /// The first occurrence of each existing key in `other` replaces that
    /// key's value in place; every other entry of `other` is appended in its
    /// own order, repeated keys included.
    pub fn merged_with(mut self, other: &QueryParams) -> Self {
        let mut replaced = vec![false; self.0.len()];
        for (key, value) in other.iter() {
            let slot = self
                .0
                .iter()
                .zip(replaced.iter())
                .position(|((k, _), done)| k == key && !done);
            match slot {
                Some(index) => {
                    self.0[index].1 = value.to_string();
                    replaced[index] = true;
                }
                None => self.push(key, value),
            }
        }
        self
    }

    /// First value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Form-encode the parameters (`a=1&b=x+y`)
    pub fn encode(&self) -> RestResult<String> {
        serde_urlencoded::to_string(&self.0)
            .map_err(|e| RestError::InvalidParameter(e.to_string()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// How requests are authenticated, decided once when the client is built
#[derive(Clone)]
pub(crate) enum Authenticator {
    /// No credential pair; GETs go out unsigned, mutations are refused
    Unauthenticated,
    /// Every request carries `CB-ACCESS-*` headers
    Signed(Credentials),
}

impl Authenticator {
    pub(crate) fn from_credentials(credentials: Option<Credentials>) -> Self {
        match credentials {
            Some(credentials) => Self::Signed(credentials),
            None => Self::Unauthenticated,
        }
    }

    /// Headers to attach for this request
    fn headers(
        &self,
        method: &Method,
        request_path: &str,
        body: &str,
    ) -> RestResult<Vec<(String, String)>> {
        match self {
            Self::Unauthenticated => Ok(Vec::new()),
            Self::Signed(credentials) => {
                let signer = RequestSigner::new(credentials);
                let signature = signer.sign(method.as_str(), request_path, body)?;
                Ok(vec![
                    (HEADER_ACCESS_KEY.to_string(), signer.api_key().to_string()),
                    (HEADER_ACCESS_SIGN.to_string(), signature),
                    (HEADER_ACCESS_TIMESTAMP.to_string(), signer.timestamp().to_string()),
                ])
            }
        }
    }
}

/// Decide what a simple call resolves to.
///
/// - a truthy `error` fails with that error as the message
/// - an object whose only key is a truthy `data` resolves to `data`
/// - anything else resolves to the whole body
pub fn unwrap_envelope(raw: Value) -> RestResult<Value> {
    ensure_no_error(&raw)?;
    match raw {
        Value::Object(mut map) if map.len() == 1 && map.get("data").map_or(false, is_truthy) => {
            Ok(map.remove("data").unwrap_or_default())
        }
        other => Ok(other),
    }
}

fn ensure_no_error(raw: &Value) -> RestResult<()> {
    match raw.get("error").and_then(error_text) {
        Some(message) => Err(RestError::api(message)),
        None => Ok(()),
    }
}

/// Build `path?query`, the part of the URL that gets signed
fn request_path(path: &str, query: Option<&QueryParams>) -> RestResult<String> {
    match query {
        Some(query) if !query.is_empty() => Ok(format!("{}?{}", path, query.encode()?)),
        _ => Ok(path.to_string()),
    }
}

/// Reject an update payload that carries no changes.
///
/// The payload must serialize to a non-empty JSON object.
pub(crate) fn non_empty_update<B: Serialize>(update: &B, message: &str) -> RestResult<Value> {
    match serde_json::to_value(update) {
        Ok(Value::Object(map)) if !map.is_empty() => Ok(Value::Object(map)),
        _ => Err(RestError::InvalidParameter(message.to_string())),
    }
}

/// The request layer owned by each resource client
#[derive(Clone)]
pub(crate) struct BaseClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    api_version: String,
    auth: Authenticator,
    max_pages: Option<usize>,
}

impl BaseClient {
    /// Build a base client from configuration, creating a reqwest transport
    /// unless one is supplied
    pub(crate) fn from_config(config: &ClientConfig) -> RestResult<Self> {
        config.validate()?;
        let transport = config.transport()?;

        Ok(Self {
            transport,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            auth: Authenticator::from_credentials(config.credentials.clone()),
            max_pages: config.max_pages,
        })
    }

    pub(crate) fn is_authenticated(&self) -> bool {
        matches!(self.auth, Authenticator::Signed(_))
    }

    /// Build, sign and send a request; return the parsed JSON body untouched
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: Option<&QueryParams>,
        body: Option<String>,
    ) -> RestResult<Value> {
        let request_path = request_path(path, query)?;

        let mut headers = vec![
            (HEADER_ACCEPT.to_string(), JSON.to_string()),
            (HEADER_VERSION.to_string(), self.api_version.clone()),
        ];
        if body.is_some() {
            headers.push((HEADER_CONTENT_TYPE.to_string(), JSON.to_string()));
        }
        headers.extend(
            self.auth
                .headers(&method, &request_path, body.as_deref().unwrap_or(""))?,
        );

        debug!(
            method = %method,
            path = %request_path,
            signed = self.is_authenticated(),
            "Sending request"
        );

        let request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, request_path),
            headers,
            body,
        };

        let response = self.transport.execute(request).await?;
        Ok(response.json()?)
    }

    /// Make a GET request and unwrap the envelope
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&QueryParams>,
    ) -> RestResult<T> {
        let raw = self.send(Method::GET, path, query, None).await?;
        Ok(serde_json::from_value(unwrap_envelope(raw)?)?)
    }

    /// Follow `next_uri` cursors and return every page's items in order
    ///
    /// Stops when a page carries no `pagination`, or `pagination` has no
    /// `next_uri`. A page whose `data` is not an array contributes nothing.
    pub(crate) async fn paginated_get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&QueryParams>,
    ) -> RestResult<Vec<T>> {
        let params = QueryParams::new().with("limit", DEFAULT_PAGE_LIMIT.to_string());
        let mut params = match query {
            Some(query) => params.merged_with(query),
            None => params,
        };

        let mut items = Vec::new();
        let mut page = 0usize;

        loop {
            if let Some(limit) = self.max_pages {
                if page >= limit {
                    return Err(RestError::PageLimitExceeded { limit });
                }
            }
            page += 1;

            let raw = self.send(Method::GET, path, Some(&params), None).await?;
            ensure_no_error(&raw)?;

            if !raw.is_object() {
                debug!(page, "Response is not an envelope, stopping");
                break;
            }
            let envelope: Envelope<Value> = serde_json::from_value(raw)?;

            let Some(pagination) = envelope.pagination else {
                debug!(page, "No pagination in response, stopping");
                break;
            };

            let before = items.len();
            if let Some(Value::Array(values)) = envelope.data {
                for value in values {
                    items.push(serde_json::from_value(value)?);
                }
            }

            let next = pagination.next_cursor().map(str::to_string);
            debug!(
                page,
                items = items.len() - before,
                has_next = next.is_some(),
                "Fetched page"
            );

            match next {
                Some(cursor) => params.set("starting_after", cursor),
                None => break,
            }
        }

        Ok(items)
    }

    /// Make a signed request with a JSON body and unwrap the envelope
    async fn send_with_body<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: String,
    ) -> RestResult<T> {
        if !self.is_authenticated() {
            return Err(RestError::AuthRequired);
        }
        let raw = self.send(method, path, None, Some(body)).await?;
        Ok(serde_json::from_value(unwrap_envelope(raw)?)?)
    }

    /// Make a POST request
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> RestResult<T> {
        let body = serde_json::to_string(body)?;
        self.send_with_body(Method::POST, path, body).await
    }

    /// Make a POST request with an empty `{}` body
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> RestResult<T> {
        self.send_with_body(Method::POST, path, empty_body()).await
    }

    /// Make a PUT request
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> RestResult<T> {
        let body = serde_json::to_string(body)?;
        self.send_with_body(Method::PUT, path, body).await
    }

    /// Make a DELETE request (sent with an empty `{}` body)
    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> RestResult<T> {
        self.send_with_body(Method::DELETE, path, empty_body()).await
    }
}

fn empty_body() -> String {
    "{}".to_string()
}

impl std::fmt::Debug for BaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseClient")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("authenticated", &self.is_authenticated())
            .field("max_pages", &self.max_pages)
            .finish()
    }
}
