//! Network traversal tokens.

use crate::converters::{null_as_default, optional_datetime};
use crate::{CreateOptions, Domain, Operation, Params, Resource, Route};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One STUN or TURN server handed out with a token.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IceServer {
    /// Absolute URL of this token.
    pub url: Option<String>,
    /// Server URL.
    pub urls: Option<String>,
    /// Username for authenticating with the servers.
    pub username: Option<String>,
    /// Credential for this server.
    pub credential: Option<String>,
}

/// Short-lived credentials for the traversal service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Token {
    /// Account that owns the token.
    pub account_sid: Option<String>,
    /// Username for authenticating with the servers.
    pub username: Option<String>,
    /// Password for authenticating with the servers.
    pub password: Option<String>,
    /// Lifetime in seconds, as the string the API returns.
    pub ttl: Option<String>,
    /// STUN and TURN servers usable with these credentials.
    #[serde(deserialize_with = "null_as_default")]
    pub ice_servers: Vec<IceServer>,
    /// When the token was created.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the token was last updated.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_updated: Option<DateTime<Utc>>,
}

impl Resource for Token {
    const ROUTE: Route = Route {
        domain: Domain::Api,
        name: "Token",
        list_path: "/2010-04-01/Accounts/{AccountSid}/Tokens.json",
        instance_path: "/2010-04-01/Accounts/{AccountSid}/Tokens.json",
        list_key: "tokens",
    };
}

/// Creates a token.
#[derive(Debug, Clone, Default)]
pub struct CreateTokenOptions {
    /// Account override; `None` uses the client's default.
    pub account_sid: Option<String>,
    /// Lifetime of the credentials, in seconds.
    pub ttl: Option<i32>,
}

impl CreateTokenOptions {
    /// Starts a create request with the required fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the call to an account other than the client's default.
    pub fn account_sid(mut self, account_sid: impl Into<String>) -> Self {
        self.account_sid = Some(account_sid.into());
        self
    }

    /// Token lifetime in seconds.
    pub fn ttl(mut self, seconds: i32) -> Self {
        self.ttl = Some(seconds);
        self
    }
}

impl Operation for CreateTokenOptions {
    type Resource = Token;

    fn account_sid(&self) -> Option<&str> {
        self.account_sid.as_deref()
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn params(&self) -> Params {
        let mut params = Params::new();
        params.push_opt("Ttl", self.ttl);
        params
    }
}

impl CreateOptions for CreateTokenOptions {}
