//! The transport seam and its reqwest-backed implementation.
//!
//! A [`Transport`] executes built requests and exposes the two pieces of
//! context the protocol reads from it: the default account and the region.
//! Timeouts, retries and connection pooling live here, never in the protocol.

use crate::request::Request;
use crate::response::RawResponse;
use crate::retry::{retry_after, RetryPredicate, RetryStrategy};
use http::header::{ACCEPT, CONTENT_TYPE};
use http::HeaderMap;
use std::future::Future;
use std::time::{Duration, Instant};
use url::Url;

/// Why a transport produced no response.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    /// A network-level failure (connection refused, DNS, TLS, broken body).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request exceeded the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The request target could not be turned into a URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Any other failure reported by a custom transport.
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Creates a failure described by `message`.
    pub fn new(message: impl Into<String>) -> Self {
        TransportError::Other(message.into())
    }
}

/// Executes requests on behalf of the protocol.
///
/// Implement this to plug in a different HTTP stack or an in-memory fake.
///
/// # Examples
///
/// ```
/// use callwire::{RawResponse, Request, Transport, TransportError};
/// use http::StatusCode;
///
/// struct AlwaysEmpty;
///
/// impl Transport for AlwaysEmpty {
///     async fn execute(&self, _request: Request) -> Result<RawResponse, TransportError> {
///         Ok(RawResponse::new(StatusCode::OK, "{}"))
///     }
///
///     fn account_sid(&self) -> &str {
///         "AC00000000000000000000000000000000"
///     }
/// }
/// ```
pub trait Transport: Send + Sync + 'static {
    /// Sends `request` and returns whatever response arrived.
    ///
    /// Every status code, including failures, is a response; an `Err` means
    /// nothing usable came back.
    fn execute(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;

    /// The account used when an account-scoped call does not pin one.
    fn account_sid(&self) -> &str;

    /// The region used when resolving hosts and relative page links.
    fn region(&self) -> Option<&str> {
        None
    }
}

/// The default [`Transport`], backed by `reqwest`.
///
/// Built through [`ClientBuilder`](crate::ClientBuilder).
pub struct HttpTransport {
    pub(crate) http_client: reqwest::Client,
    pub(crate) account_sid: String,
    pub(crate) auth_token: String,
    pub(crate) region: Option<String>,
    pub(crate) base_url: Option<Url>,
    pub(crate) default_headers: HeaderMap,
    pub(crate) timeout: Option<Duration>,
    pub(crate) retry_strategy: RetryStrategy,
    pub(crate) retry_predicate: Box<dyn RetryPredicate>,
    pub(crate) max_retry_after: Duration,
}

impl HttpTransport {
    /// Sends a single attempt.
    async fn send_once(
        &self,
        request: &Request,
        url: &Url,
        attempt: usize,
    ) -> Result<(http::StatusCode, HeaderMap, String), TransportError> {
        let mut url = url.clone();
        if !request.query_params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in request.query_params.iter() {
                pairs.append_pair(key, value);
            }
        }

        tracing::debug!(
            method = %request.method,
            url = %url,
            attempt = attempt,
            "Executing HTTP request"
        );

        let mut builder = self
            .http_client
            .request(request.method.clone(), url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .header(ACCEPT, "application/json");

        for (name, value) in &self.default_headers {
            builder = builder.header(name, value);
        }

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if request.method == http::Method::POST || !request.body_params.is_empty() {
            builder = builder
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(request.body_params.to_form());
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else {
                TransportError::Network(e)
            }
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;
        Ok((status, headers, body))
    }
}

impl Transport for HttpTransport {
    async fn execute(&self, request: Request) -> Result<RawResponse, TransportError> {
        let url = request
            .target
            .resolve(self.region.as_deref(), self.base_url.as_ref())?;

        let start_time = Instant::now();
        let mut attempt = 0;

        loop {
            attempt += 1;

            let outcome = self
                .send_once(&request, &url, attempt)
                .await
                .map(|(status, headers, body)| RawResponse {
                    status,
                    headers,
                    body,
                    latency: start_time.elapsed(),
                    attempts: attempt,
                });

            match &outcome {
                Ok(response) => tracing::info!(
                    status = response.status.as_u16(),
                    latency_ms = response.latency.as_millis(),
                    attempts = attempt,
                    "Received HTTP response"
                ),
                Err(e) => tracing::warn!(
                    error = %e,
                    attempt = attempt,
                    method = %request.method,
                    path = request.location(),
                    "Request failed"
                ),
            }

            if !self.retry_predicate.should_retry(outcome.as_ref(), attempt) {
                return outcome;
            }

            let Some(backoff) = self.retry_strategy.delay_for_attempt(attempt) else {
                return outcome;
            };

            let delay = match outcome.as_ref().ok().and_then(|r| retry_after(&r.headers)) {
                Some(wait) => {
                    let wait = wait.min(self.max_retry_after);
                    tracing::info!(
                        retry_after_ms = wait.as_millis(),
                        attempt = attempt,
                        "Server asked to wait before retrying"
                    );
                    wait
                }
                None => {
                    tracing::info!(
                        delay_ms = backoff.as_millis(),
                        attempt = attempt,
                        "Retrying request after delay"
                    );
                    backoff
                }
            };

            tokio::time::sleep(delay).await;
        }
    }

    fn account_sid(&self) -> &str {
        &self.account_sid
    }

    fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}
