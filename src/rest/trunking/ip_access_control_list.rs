//! IP access control lists associated with a trunk.

use crate::converters::optional_datetime;
use crate::rest::read_paging;
use crate::{
    CreateOptions, DeleteOptions, Domain, FetchOptions, Operation, Params, Resource, Route,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// An IP access control list associated with a SIP trunk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IpAccessControlList {
    /// Unique identifier of the access control list association.
    pub sid: Option<String>,
    /// Account that owns the access control list association.
    pub account_sid: Option<String>,
    /// Trunk the access control list association belongs to.
    pub trunk_sid: Option<String>,
    /// Human-readable name.
    pub friendly_name: Option<String>,
    /// When the access control list association was created.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the access control list association was last updated.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_updated: Option<DateTime<Utc>>,
    /// Absolute URL of this access control list association.
    pub url: Option<String>,
}

impl Resource for IpAccessControlList {
    const ROUTE: Route = Route {
        domain: Domain::Trunking,
        name: "IpAccessControlList",
        list_path: "/v1/Trunks/{TrunkSid}/IpAccessControlLists",
        instance_path: "/v1/Trunks/{TrunkSid}/IpAccessControlLists/{Sid}",
        list_key: "ip_access_control_lists",
    };
}

fn instance_params(trunk_sid: &str, sid: &str) -> Vec<(&'static str, String)> {
    vec![("TrunkSid", trunk_sid.to_string()), ("Sid", sid.to_string())]
}

/// Fetches one access control list associated with a trunk.
#[derive(Debug, Clone)]
pub struct FetchIpAccessControlListOptions {
    /// Trunk the access control list association belongs to.
    pub trunk_sid: String,
    /// Sid of the access control list association.
    pub sid: String,
}

impl FetchIpAccessControlListOptions {
    /// Identifies the access control list association to fetch.
    pub fn new(trunk_sid: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            trunk_sid: trunk_sid.into(),
            sid: sid.into(),
        }
    }
}

impl Operation for FetchIpAccessControlListOptions {
    type Resource = IpAccessControlList;

    fn path_params(&self) -> Vec<(&'static str, String)> {
        instance_params(&self.trunk_sid, &self.sid)
    }
}

impl FetchOptions for FetchIpAccessControlListOptions {}

/// Detaches a list from a trunk. The list itself is not deleted.
#[derive(Debug, Clone)]
pub struct DeleteIpAccessControlListOptions {
    /// Trunk the access control list association belongs to.
    pub trunk_sid: String,
    /// Sid of the access control list association.
    pub sid: String,
}

impl DeleteIpAccessControlListOptions {
    /// Identifies the access control list association to delete.
    pub fn new(trunk_sid: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            trunk_sid: trunk_sid.into(),
            sid: sid.into(),
        }
    }
}

impl Operation for DeleteIpAccessControlListOptions {
    type Resource = IpAccessControlList;

    fn path_params(&self) -> Vec<(&'static str, String)> {
        instance_params(&self.trunk_sid, &self.sid)
    }
}

impl DeleteOptions for DeleteIpAccessControlListOptions {}

/// Attaches an existing list to a trunk.
#[derive(Debug, Clone)]
pub struct CreateIpAccessControlListOptions {
    /// Trunk the access control list association belongs to.
    pub trunk_sid: String,
    /// Sid of the access control list to associate.
    pub ip_access_control_list_sid: String,
}

impl CreateIpAccessControlListOptions {
    /// Starts a create request with the required fields.
    pub fn new(trunk_sid: impl Into<String>, ip_access_control_list_sid: impl Into<String>) -> Self {
        Self {
            trunk_sid: trunk_sid.into(),
            ip_access_control_list_sid: ip_access_control_list_sid.into(),
        }
    }
}

impl Operation for CreateIpAccessControlListOptions {
    type Resource = IpAccessControlList;

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("TrunkSid", self.trunk_sid.clone())]
    }

    fn params(&self) -> Params {
        let mut params = Params::new();
        params.push("IpAccessControlListSid", self.ip_access_control_list_sid.as_str());
        params
    }
}

impl CreateOptions for CreateIpAccessControlListOptions {}

/// Lists the access control lists of a trunk.
#[derive(Debug, Clone)]
pub struct ReadIpAccessControlListOptions {
    /// Trunk the access control list association belongs to.
    pub trunk_sid: String,
    /// Records per page; derived from `limit` when unset.
    pub page_size: Option<u32>,
    /// Cap on records yielded across all pages.
    pub limit: Option<u64>,
}

impl ReadIpAccessControlListOptions {
    /// Lists every access control list association; add filters with the setters.
    pub fn new(trunk_sid: impl Into<String>) -> Self {
        Self {
            trunk_sid: trunk_sid.into(),
            page_size: None,
            limit: None,
        }
    }
}

read_paging!(ReadIpAccessControlListOptions);

impl Operation for ReadIpAccessControlListOptions {
    type Resource = IpAccessControlList;

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("TrunkSid", self.trunk_sid.clone())]
    }
}
