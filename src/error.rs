//! Error types for REST calls.
//!
//! Every call surfaces one of three protocol failures: the transport never
//! produced a response ([`Error::Connection`]), the server answered with a
//! failing status ([`Error::Api`]), or a successful body could not be turned
//! into the expected type ([`Error::Deserialization`]). None of them are
//! retried or recovered from by the protocol itself.

use crate::options::Action;
use crate::transport::TransportError;
use http::StatusCode;

/// The message carried by an [`Error::Api`] when a failing response has no
/// usable error body.
pub const NO_CONTENT_MESSAGE: &str = "Server Error, no content";

/// The main error type for REST calls.
///
/// # Examples
///
/// ```no_run
/// use callwire::{Client, Error};
/// use callwire::rest::api::conference::FetchConferenceOptions;
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::builder()
///     .account_sid("ACXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX")
///     .auth_token("your_auth_token")
///     .build()?;
///
/// match client.fetch(&FetchConferenceOptions::new("CFXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX")).await {
///     Ok(conference) => println!("Conference: {:?}", conference.friendly_name),
///     Err(Error::Api { status, code, message, .. }) => {
///         eprintln!("API error {} ({:?}): {}", status, code, message);
///     }
///     Err(Error::Deserialization { raw_response, serde_error, .. }) => {
///         eprintln!("Unexpected body {}: {}", raw_response, serde_error);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The transport did not produce a response at all.
    ///
    /// Covers refused connections, DNS failures and transport-level timeouts.
    /// Whatever retrying the transport was configured to do has already
    /// happened by the time this is returned.
    #[error("{resource} {action} failed: Unable to connect to server")]
    Connection {
        /// Name of the resource the call targeted.
        resource: &'static str,
        /// The operation that was attempted.
        action: Action,
        /// The underlying transport failure.
        #[source]
        source: TransportError,
    },

    /// The server answered with a status outside `200..=204`.
    ///
    /// When the body carried a structured error, `code`, `message` and
    /// `more_info` are copied from it. Otherwise `code` is `None` and
    /// `message` is [`NO_CONTENT_MESSAGE`].
    #[error("API error {status}: {message}")]
    Api {
        /// The HTTP status code of the response.
        status: StatusCode,
        /// The API-specific error code, if the body carried one.
        code: Option<i64>,
        /// A human readable description of the failure.
        message: String,
        /// A link to documentation about the error code.
        more_info: Option<String>,
    },

    /// A successful response body could not be deserialized.
    ///
    /// Preserves the raw body so it can be logged or inspected.
    #[error("Failed to deserialize response (status {status}): {serde_error}")]
    Deserialization {
        /// The raw response body that failed to deserialize.
        raw_response: String,
        /// The serde error message.
        serde_error: String,
        /// The HTTP status code of the response.
        status: StatusCode,
    },

    /// The request could not be built from the supplied options.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid client configuration was provided.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// An invalid URL was provided or produced.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Builds the fallback error for a failing response without a usable body.
    pub fn no_content(status: StatusCode) -> Self {
        Error::Api {
            status,
            code: None,
            message: NO_CONTENT_MESSAGE.to_string(),
            more_info: None,
        }
    }

    /// Returns the HTTP status code if this error has one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Deserialization { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the API-specific error code, if the server supplied one.
    ///
    /// # Examples
    ///
    /// ```
    /// use callwire::Error;
    /// use http::StatusCode;
    ///
    /// let err = Error::Api {
    ///     status: StatusCode::NOT_FOUND,
    ///     code: Some(20404),
    ///     message: "The requested resource was not found".to_string(),
    ///     more_info: None,
    /// };
    /// assert_eq!(err.code(), Some(20404));
    ///
    /// assert_eq!(Error::no_content(StatusCode::BAD_GATEWAY).code(), None);
    /// ```
    pub fn code(&self) -> Option<i64> {
        match self {
            Error::Api { code, .. } => *code,
            _ => None,
        }
    }

    /// Returns the raw response body for deserialization failures.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::Deserialization { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }

    /// Returns `true` if no response reached the protocol.
    pub fn is_connection(&self) -> bool {
        matches!(self, Error::Connection { .. })
    }
}

/// A specialized `Result` type for REST calls.
pub type Result<T> = std::result::Result<T, Error>;
