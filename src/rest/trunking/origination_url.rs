//! Origination URLs: where a trunk sends calls it originates.

use crate::converters::optional_datetime;
use crate::{Domain, FetchOptions, Operation, Params, Resource, Route, UpdateOptions};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::Url;

/// A SIP destination a trunk routes inbound calls to.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OriginationUrl {
    /// Unique identifier of the origination URL.
    pub sid: Option<String>,
    /// Account that owns the origination URL.
    pub account_sid: Option<String>,
    /// Trunk the origination URL belongs to.
    pub trunk_sid: Option<String>,
    /// Load-balancing weight among URLs with the same priority.
    pub weight: Option<i32>,
    /// Routing priority; higher goes first.
    pub priority: Option<i32>,
    /// Whether the URL receives traffic.
    pub enabled: Option<bool>,
    /// SIP URI calls are routed to.
    pub sip_url: Option<String>,
    /// Human-readable name.
    pub friendly_name: Option<String>,
    /// When the origination URL was created.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the origination URL was last updated.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_updated: Option<DateTime<Utc>>,
    /// Absolute URL of this origination URL.
    pub url: Option<String>,
}

impl Resource for OriginationUrl {
    const ROUTE: Route = Route {
        domain: Domain::Trunking,
        name: "OriginationUrl",
        list_path: "/v1/Trunks/{TrunkSid}/OriginationUrls",
        instance_path: "/v1/Trunks/{TrunkSid}/OriginationUrls/{Sid}",
        list_key: "origination_urls",
    };
}

/// Fetches one origination URL.
#[derive(Debug, Clone)]
pub struct FetchOriginationUrlOptions {
    /// Trunk the origination URL belongs to.
    pub trunk_sid: String,
    /// Sid of the origination URL.
    pub sid: String,
}

impl FetchOriginationUrlOptions {
    /// Identifies the origination URL to fetch.
    pub fn new(trunk_sid: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            trunk_sid: trunk_sid.into(),
            sid: sid.into(),
        }
    }
}

impl Operation for FetchOriginationUrlOptions {
    type Resource = OriginationUrl;

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("TrunkSid", self.trunk_sid.clone()), ("Sid", self.sid.clone())]
    }
}

impl FetchOptions for FetchOriginationUrlOptions {}

/// Changes routing weight, priority or target of an origination URL.
#[derive(Debug, Clone)]
pub struct UpdateOriginationUrlOptions {
    /// Trunk the origination URL belongs to.
    pub trunk_sid: String,
    /// Sid of the origination URL.
    pub sid: String,
    /// Load-balancing weight among URLs with the same priority.
    pub weight: Option<i32>,
    /// Routing priority; higher goes first.
    pub priority: Option<i32>,
    /// Whether the URL receives traffic.
    pub enabled: Option<bool>,
    /// Human-readable name to set.
    pub friendly_name: Option<String>,
    /// SIP URI calls are routed to.
    pub sip_url: Option<Url>,
}

impl UpdateOriginationUrlOptions {
    /// Identifies the origination URL to update; nothing changes until a field is set.
    pub fn new(trunk_sid: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            trunk_sid: trunk_sid.into(),
            sid: sid.into(),
            weight: None,
            priority: None,
            enabled: None,
            friendly_name: None,
            sip_url: None,
        }
    }

    /// Sets the load-balancing weight.
    pub fn weight(mut self, weight: i32) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Sets the routing priority.
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Enables or disables the URL.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Sets the friendly name.
    pub fn friendly_name(mut self, friendly_name: impl Into<String>) -> Self {
        self.friendly_name = Some(friendly_name.into());
        self
    }

    /// Points the URL at another SIP URI.
    pub fn sip_url(mut self, sip_url: Url) -> Self {
        self.sip_url = Some(sip_url);
        self
    }
}

impl Operation for UpdateOriginationUrlOptions {
    type Resource = OriginationUrl;

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("TrunkSid", self.trunk_sid.clone()), ("Sid", self.sid.clone())]
    }

    fn params(&self) -> Params {
        let mut params = Params::new();
        params.push_opt("Weight", self.weight);
        params.push_opt("Priority", self.priority);
        params.push_opt("Enabled", self.enabled);
        params.push_opt("FriendlyName", self.friendly_name.as_deref());
        params.push_opt("SipUrl", self.sip_url.as_ref());
        params
    }
}

impl UpdateOptions for UpdateOriginationUrlOptions {}
