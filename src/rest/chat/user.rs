//! Chat users.

use crate::converters::{null_as_default, optional_datetime};
use crate::{CreateOptions, Domain, Operation, Params, Resource, Route};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// A chat identity within a service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct User {
    /// Unique identifier of the user.
    pub sid: Option<String>,
    /// Account that owns the user.
    pub account_sid: Option<String>,
    /// Service the user belongs to.
    pub service_sid: Option<String>,
    /// Role assigned to the user.
    pub role_sid: Option<String>,
    /// Application-defined identity the user belongs to.
    pub identity: Option<String>,
    /// Human-readable name.
    pub friendly_name: Option<String>,
    /// Application data as a JSON string.
    pub attributes: Option<String>,
    /// Whether the user is connected.
    pub is_online: Option<bool>,
    /// Whether the user has a push binding.
    pub is_notifiable: Option<bool>,
    /// Number of channels the user has joined.
    pub joined_channels_count: Option<i32>,
    /// When the user was created.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the user was last updated.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_updated: Option<DateTime<Utc>>,
    /// Absolute URL of this user.
    pub url: Option<String>,
    /// Related resources, keyed by name.
    #[serde(deserialize_with = "null_as_default")]
    pub links: HashMap<String, String>,
}

impl Resource for User {
    const ROUTE: Route = Route {
        domain: Domain::Chat,
        name: "User",
        list_path: "/v1/Services/{ServiceSid}/Users",
        instance_path: "/v1/Services/{ServiceSid}/Users/{Sid}",
        list_key: "users",
    };
}

/// Creates a chat user.
#[derive(Debug, Clone)]
pub struct CreateUserOptions {
    /// Service that holds the user.
    pub service_sid: String,
    /// Application-defined identity.
    pub identity: String,
    /// Role assigned to the user.
    pub role_sid: Option<String>,
    /// Application data as a JSON string.
    pub attributes: Option<String>,
    /// Human-readable name to set.
    pub friendly_name: Option<String>,
}

impl CreateUserOptions {
    /// Starts a create request with the required fields.
    pub fn new(service_sid: impl Into<String>, identity: impl Into<String>) -> Self {
        Self {
            service_sid: service_sid.into(),
            identity: identity.into(),
            role_sid: None,
            attributes: None,
            friendly_name: None,
        }
    }

    /// Assigns a role other than the service default.
    pub fn role_sid(mut self, role_sid: impl Into<String>) -> Self {
        self.role_sid = Some(role_sid.into());
        self
    }

    /// Free-form JSON attributes, as a string.
    pub fn attributes(mut self, attributes: impl Into<String>) -> Self {
        self.attributes = Some(attributes.into());
        self
    }

    /// Sets the friendly name.
    pub fn friendly_name(mut self, friendly_name: impl Into<String>) -> Self {
        self.friendly_name = Some(friendly_name.into());
        self
    }
}

impl Operation for CreateUserOptions {
    type Resource = User;

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("ServiceSid", self.service_sid.clone())]
    }

    fn params(&self) -> Params {
        let mut params = Params::new();
        params.push("Identity", self.identity.as_str());
        params.push_opt("RoleSid", self.role_sid.as_deref());
        params.push_opt("Attributes", self.attributes.as_deref());
        params.push_opt("FriendlyName", self.friendly_name.as_deref());
        params
    }
}

impl CreateOptions for CreateUserOptions {}
