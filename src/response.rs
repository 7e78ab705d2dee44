//! Raw responses and their interpretation.
//!
//! [`interpret`] decides between the three outcomes of a call: no response,
//! a failing status, or a success whose body is handed on to
//! [`materialize`].

use crate::options::{Action, Route};
use crate::transport::TransportError;
use crate::{Error, Result};
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// A response exactly as the transport received it.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The response headers.
    pub headers: HeaderMap,
    /// The response body as text.
    pub body: String,
    /// Time spent by the transport, including retries.
    pub latency: Duration,
    /// Number of attempts the transport made.
    pub attempts: usize,
}

impl RawResponse {
    /// Creates a response with no headers, as produced by test transports.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
            latency: Duration::ZERO,
            attempts: 1,
        }
    }

    /// Returns `true` if the status is inside the success range `200..=204`.
    ///
    /// # Examples
    ///
    /// ```
    /// use callwire::RawResponse;
    /// use http::StatusCode;
    ///
    /// assert!(RawResponse::new(StatusCode::NO_CONTENT, "").is_success());
    /// assert!(!RawResponse::new(StatusCode::from_u16(205).unwrap(), "").is_success());
    /// ```
    pub fn is_success(&self) -> bool {
        (200..=204).contains(&self.status.as_u16())
    }

    /// Returns a header value by name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}

/// The structured error payload the API returns on failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    /// API-specific error code.
    pub code: Option<i64>,
    /// Human readable description.
    pub message: Option<String>,
    /// Link to documentation about the code.
    pub more_info: Option<String>,
    /// HTTP status echoed by the server.
    pub status: Option<u16>,
}

impl ApiErrorBody {
    /// Parses a failure body.
    ///
    /// Returns `None` for empty, malformed or non-conforming bodies. A body
    /// conforms when it is a JSON object carrying at least a code or a
    /// message, so `{}` does not.
    pub fn parse(body: &str) -> Option<Self> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        if !value.is_object() {
            return None;
        }
        let parsed: ApiErrorBody = serde_json::from_value(value).ok()?;
        if parsed.code.is_none() && parsed.message.is_none() {
            return None;
        }
        Some(parsed)
    }
}

/// Classifies a transport outcome.
///
/// A transport failure becomes [`Error::Connection`]; a status outside
/// `200..=204` becomes [`Error::Api`]; anything else is returned for
/// materialization.
pub fn interpret(
    outcome: std::result::Result<RawResponse, TransportError>,
    route: &Route,
    action: Action,
) -> Result<RawResponse> {
    let response = match outcome {
        Ok(response) => response,
        Err(source) => {
            tracing::error!(
                resource = route.name,
                action = %action,
                error = %source,
                "Unable to connect to server"
            );
            return Err(Error::Connection {
                resource: route.name,
                action,
                source,
            });
        }
    };

    if response.is_success() {
        return Ok(response);
    }

    let status = response.status;
    if status.is_client_error() {
        tracing::error!(
            status = status.as_u16(),
            resource = route.name,
            response = %response.body,
            "Client error (4xx)"
        );
    } else {
        tracing::warn!(
            status = status.as_u16(),
            resource = route.name,
            response = %response.body,
            "Request failed"
        );
    }

    match ApiErrorBody::parse(&response.body) {
        Some(body) => Err(Error::Api {
            status,
            code: body.code,
            message: body.message.unwrap_or_else(|| {
                format!("{}, {}", action.failure_phrase(), status.as_u16())
            }),
            more_info: body.more_info,
        }),
        None => Err(Error::no_content(status)),
    }
}

/// Deserializes a successful body into `T`.
///
/// Unknown fields are ignored and missing ones default, as declared on the
/// resource types; malformed JSON is an [`Error::Deserialization`].
pub fn materialize<T: DeserializeOwned>(response: &RawResponse) -> Result<T> {
    serde_json::from_str::<T>(&response.body).map_err(|e| deserialization_error(response, e))
}

pub(crate) fn deserialization_error(response: &RawResponse, error: serde_json::Error) -> Error {
    tracing::error!(
        error = %error,
        raw_response = %response.body,
        "Failed to deserialize response"
    );

    Error::Deserialization {
        raw_response: response.body.clone(),
        serde_error: error.to_string(),
        status: response.status,
    }
}
