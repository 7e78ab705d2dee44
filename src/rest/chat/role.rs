//! Chat roles.

use crate::converters::{null_as_default, optional_datetime};
use crate::rest::wire_enum;
use crate::{Domain, FetchOptions, Operation, Resource, Route};
use chrono::{DateTime, Utc};
use serde::Deserialize;

wire_enum! {
    /// What a role applies to.
    pub enum RoleType {
        Channel => "channel",
        Deployment => "deployment",
    }
}

/// A named set of chat permissions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Role {
    /// Unique identifier of the role.
    pub sid: Option<String>,
    /// Account that owns the role.
    pub account_sid: Option<String>,
    /// Service the role belongs to.
    pub service_sid: Option<String>,
    /// Human-readable name.
    pub friendly_name: Option<String>,
    /// Whether the role applies to a service or a channel.
    #[serde(rename = "type")]
    pub role_type: Option<RoleType>,
    /// Permissions granted.
    #[serde(deserialize_with = "null_as_default")]
    pub permissions: Vec<String>,
    /// When the role was created.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the role was last updated.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_updated: Option<DateTime<Utc>>,
    /// Absolute URL of this role.
    pub url: Option<String>,
}

impl Resource for Role {
    const ROUTE: Route = Route {
        domain: Domain::Chat,
        name: "Role",
        list_path: "/v1/Services/{ServiceSid}/Roles",
        instance_path: "/v1/Services/{ServiceSid}/Roles/{Sid}",
        list_key: "roles",
    };
}

/// Fetches one role.
#[derive(Debug, Clone)]
pub struct FetchRoleOptions {
    /// Service that holds the role.
    pub service_sid: String,
    /// Sid of the role.
    pub sid: String,
}

impl FetchRoleOptions {
    /// Identifies the role to fetch.
    pub fn new(service_sid: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            service_sid: service_sid.into(),
            sid: sid.into(),
        }
    }
}

impl Operation for FetchRoleOptions {
    type Resource = Role;

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ServiceSid", self.service_sid.clone()),
            ("Sid", self.sid.clone()),
        ]
    }
}

impl FetchOptions for FetchRoleOptions {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_field_maps_to_role_type() {
        let role: Role = serde_json::from_str(
            r#"{"sid": "RL1", "type": "deployment", "permissions": ["createChannel", "joinChannel"]}"#,
        )
        .unwrap();

        assert_eq!(role.role_type, Some(RoleType::Deployment));
        assert_eq!(role.permissions.len(), 2);
    }
}
