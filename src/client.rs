//! The protocol client.
//!
//! [`Client`] runs every call through the same steps: resolve the account
//! scope, build the request, hand it to the transport, interpret the status
//! and materialize the body. Use [`ClientBuilder`] to configure the default
//! HTTP transport, or [`Client::with_transport`] to supply your own.

use crate::options::{
    build_read_request, build_request, Action, CreateOptions, DeleteOptions, FetchOptions,
    Operation, ReadOptions, Resource, UpdateOptions,
};
use crate::page::Page;
use crate::request::Request;
use crate::response::{interpret, materialize, RawResponse};
use crate::retry::{RetryOnConnectionFailure, RetryPredicate, RetryStrategy};
use crate::transport::{HttpTransport, Transport};
use crate::{Error, ResourceSet, Result};
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Environment variable holding the default account sid.
pub const ENV_ACCOUNT_SID: &str = "TWILIO_ACCOUNT_SID";
/// Environment variable holding the auth token.
pub const ENV_AUTH_TOKEN: &str = "TWILIO_AUTH_TOKEN";
/// Environment variable holding the region.
pub const ENV_REGION: &str = "TWILIO_REGION";

/// A client for the REST API.
///
/// Cheap to clone; clones share the transport and its connection pool.
///
/// # Examples
///
/// ```no_run
/// use callwire::Client;
/// use callwire::rest::api::participant::UpdateParticipantOptions;
///
/// # async fn example() -> Result<(), callwire::Error> {
/// let client = Client::builder()
///     .account_sid("ACXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX")
///     .auth_token("your_auth_token")
///     .build()?;
///
/// let participant = client
///     .update(
///         &UpdateParticipantOptions::new("CFXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX", "CAXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX")
///             .muted(true),
///     )
///     .await?;
/// println!("Muted: {:?}", participant.muted);
/// # Ok(())
/// # }
/// ```
pub struct Client<T: Transport = HttpTransport> {
    transport: Arc<T>,
}

impl<T: Transport> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl Client<HttpTransport> {
    /// Creates a new `ClientBuilder` for the default HTTP transport.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client over a custom transport.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// The transport this client dispatches through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolves the account scope for one call.
    ///
    /// An explicitly pinned account wins; otherwise the transport's default
    /// account is used.
    pub fn account_sid<'a>(&'a self, explicit: Option<&'a str>) -> &'a str {
        explicit.unwrap_or_else(|| self.transport.account_sid())
    }

    /// Builds the request a non-read call would send, without sending it.
    pub fn request_for<O: Operation>(&self, action: Action, options: &O) -> Result<Request> {
        if action == Action::Read {
            return Err(Error::InvalidRequest(
                "read requests need read options; use `read_request_for`".to_string(),
            ));
        }
        build_request(action, options, self.account_sid(options.account_sid()))
    }

    /// Builds the first-page request a read would send, without sending it.
    pub fn read_request_for<O: ReadOptions>(&self, options: &O) -> Result<Request> {
        build_read_request(options, self.account_sid(options.account_sid()))
    }

    /// Fetches a single instance.
    pub async fn fetch<O: FetchOptions>(&self, options: &O) -> Result<O::Resource> {
        let request = self.request_for(Action::Fetch, options)?;
        let response = self.dispatch::<O::Resource>(Action::Fetch, request).await?;
        materialize(&response)
    }

    /// Creates an instance.
    pub async fn create<O: CreateOptions>(&self, options: &O) -> Result<O::Resource> {
        let request = self.request_for(Action::Create, options)?;
        let response = self.dispatch::<O::Resource>(Action::Create, request).await?;
        materialize(&response)
    }

    /// Updates an instance.
    pub async fn update<O: UpdateOptions>(&self, options: &O) -> Result<O::Resource> {
        let request = self.request_for(Action::Update, options)?;
        let response = self.dispatch::<O::Resource>(Action::Update, request).await?;
        materialize(&response)
    }

    /// Deletes an instance.
    ///
    /// Any status in `200..=204` is success. The returned flag is `true`
    /// only for `204 No Content`, the API's confirmation that the instance
    /// is gone.
    pub async fn delete<O: DeleteOptions>(&self, options: &O) -> Result<bool> {
        let request = self.request_for(Action::Delete, options)?;
        let response = self.dispatch::<O::Resource>(Action::Delete, request).await?;
        Ok(response.status == StatusCode::NO_CONTENT)
    }

    /// Lists a collection, returning a set positioned on the first page.
    pub async fn read<O: ReadOptions>(&self, options: &O) -> Result<ResourceSet<O::Resource, T>> {
        let request = self.read_request_for(options)?;
        let response = self.dispatch::<O::Resource>(Action::Read, request).await?;
        let first = Page::from_response(<O::Resource as Resource>::ROUTE.list_key, &response)?;

        Ok(ResourceSet::new(
            self.clone(),
            first,
            options.effective_page_size(),
            options.limit(),
        ))
    }

    /// Fetches one page of `R` from an absolute URL.
    pub async fn page<R: Resource>(&self, url: &str) -> Result<Page<R>> {
        let response = self.dispatch::<R>(Action::Read, Request::get_url(url)).await?;
        Page::from_response(R::ROUTE.list_key, &response)
    }

    /// Fetches the page after `page`, or `None` on the last page.
    pub async fn next_page<R: Resource>(&self, page: &Page<R>) -> Result<Option<Page<R>>> {
        match page.next_page_url(R::ROUTE.domain, self.transport.region()) {
            Some(url) => self.page(&url).await.map(Some),
            None => Ok(None),
        }
    }

    /// Fetches the page before `page`, or `None` on the first page.
    pub async fn previous_page<R: Resource>(&self, page: &Page<R>) -> Result<Option<Page<R>>> {
        match page.previous_page_url(R::ROUTE.domain, self.transport.region()) {
            Some(url) => self.page(&url).await.map(Some),
            None => Ok(None),
        }
    }

    async fn dispatch<R: Resource>(&self, action: Action, request: Request) -> Result<RawResponse> {
        tracing::debug!(
            resource = R::ROUTE.name,
            action = %action,
            method = %request.method,
            location = request.location(),
            "Dispatching call"
        );

        let outcome = self.transport.execute(request).await;
        interpret(outcome, &R::ROUTE, action)
    }
}

/// Builder for a [`Client`] over the default [`HttpTransport`].
///
/// # Examples
///
/// ```no_run
/// use callwire::{ClientBuilder, RetryStrategy};
/// use std::time::Duration;
///
/// # fn example() -> Result<(), callwire::Error> {
/// let client = ClientBuilder::new()
///     .account_sid("ACXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX")
///     .auth_token("your_auth_token")
///     .region("ie1")
///     .timeout(Duration::from_secs(30))
///     .retry_strategy(RetryStrategy::ExponentialBackoff {
///         initial_delay: Duration::from_millis(100),
///         max_delay: Duration::from_secs(5),
///         max_retries: 3,
///         jitter: true,
///     })
///     .default_header("X-Request-Source", "billing-sync")?
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    account_sid: Option<String>,
    auth_token: Option<String>,
    region: Option<String>,
    base_url: Option<Url>,
    default_headers: HeaderMap,
    retry_strategy: RetryStrategy,
    retry_predicate: Option<Box<dyn RetryPredicate>>,
    timeout: Option<Duration>,
    max_retry_after: Duration,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings.
    pub fn new() -> Self {
        Self {
            account_sid: None,
            auth_token: None,
            region: None,
            base_url: None,
            default_headers: HeaderMap::new(),
            retry_strategy: RetryStrategy::None,
            retry_predicate: None,
            timeout: None,
            max_retry_after: Duration::from_secs(60),
        }
    }

    /// Creates a builder seeded from `TWILIO_ACCOUNT_SID`, `TWILIO_AUTH_TOKEN`
    /// and `TWILIO_REGION`. Unset variables leave the setting empty.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        let mut builder = Self::new();
        builder.account_sid = var(ENV_ACCOUNT_SID);
        builder.auth_token = var(ENV_AUTH_TOKEN);
        builder.region = var(ENV_REGION);
        builder
    }

    /// Sets the default account, also used as the basic-auth username.
    pub fn account_sid(mut self, account_sid: impl Into<String>) -> Self {
        self.account_sid = Some(account_sid.into());
        self
    }

    /// Sets the auth token used as the basic-auth password.
    pub fn auth_token(mut self, auth_token: impl Into<String>) -> Self {
        self.auth_token = Some(auth_token.into());
        self
    }

    /// Pins requests to a region, e.g. `au1` or `ie1`.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sends every endpoint request to this base URL instead of the product hosts.
    ///
    /// A path on the URL, such as `http://proxy/twilio`, prefixes every endpoint path.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        self.base_url = Some(Url::parse(url.as_ref())?);
        Ok(self)
    }

    /// Adds a header sent with every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header value: {}", e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the transport retry strategy. Defaults to a single attempt.
    pub fn retry_strategy(mut self, strategy: RetryStrategy) -> Self {
        self.retry_strategy = strategy;
        self
    }

    /// Sets which attempts are worth retrying.
    ///
    /// Defaults to [`RetryOnConnectionFailure`].
    pub fn retry_predicate(mut self, predicate: Box<dyn RetryPredicate>) -> Self {
        self.retry_predicate = Some(predicate);
        self
    }

    /// Sets the per-attempt timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Caps how long a `Retry-After` header may delay a retry.
    pub fn max_retry_after(mut self, max_wait: Duration) -> Self {
        self.max_retry_after = max_wait;
        self
    }

    /// Builds the HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the account sid or auth token is missing, or if
    /// the underlying HTTP client cannot be constructed.
    pub fn build_transport(self) -> Result<HttpTransport> {
        let account_sid = self
            .account_sid
            .ok_or_else(|| Error::ConfigurationError("Account sid is required".to_string()))?;
        let auth_token = self
            .auth_token
            .ok_or_else(|| Error::ConfigurationError("Auth token is required".to_string()))?;

        let http_client = reqwest::Client::builder()
            .user_agent(concat!("callwire/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                Error::ConfigurationError(format!("Failed to build HTTP client: {}", e))
            })?;

        let retry_predicate = self
            .retry_predicate
            .unwrap_or_else(|| Box::new(RetryOnConnectionFailure));

        Ok(HttpTransport {
            http_client,
            account_sid,
            auth_token,
            region: self.region,
            base_url: self.base_url,
            default_headers: self.default_headers,
            timeout: self.timeout,
            retry_strategy: self.retry_strategy,
            retry_predicate,
            max_retry_after: self.max_retry_after,
        })
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// See [`ClientBuilder::build_transport`].
    pub fn build(self) -> Result<Client> {
        Ok(Client::with_transport(self.build_transport()?))
    }

    /// Builds a [`blocking::Client`](crate::blocking::Client) with the same settings.
    ///
    /// # Errors
    ///
    /// See [`ClientBuilder::build_transport`]; also fails if the private
    /// runtime cannot be started.
    pub fn build_blocking(self) -> Result<crate::blocking::Client> {
        crate::blocking::Client::new(self.build()?)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_credentials() {
        let missing_sid = ClientBuilder::new().auth_token("token").build();
        assert!(matches!(missing_sid, Err(Error::ConfigurationError(_))));

        let missing_token = ClientBuilder::new().account_sid("AC1").build();
        assert!(matches!(missing_token, Err(Error::ConfigurationError(_))));
    }

    #[test]
    fn invalid_headers_and_urls_are_rejected() {
        let header = ClientBuilder::new().default_header("bad header", "value");
        assert!(matches!(header, Err(Error::ConfigurationError(_))));

        let url = ClientBuilder::new().base_url("not a url");
        assert!(matches!(url, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn explicit_account_wins_over_default() {
        let client = ClientBuilder::new()
            .account_sid("ACdefault")
            .auth_token("token")
            .region("au1")
            .build()
            .unwrap();

        assert_eq!(client.account_sid(None), "ACdefault");
        assert_eq!(client.account_sid(Some("ACpinned")), "ACpinned");
        assert_eq!(client.transport().region(), Some("au1"));
    }
}
