//! Sync maps.

use crate::converters::{null_as_default, optional_datetime};
use crate::{Domain, FetchOptions, Operation, Resource, Route};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// A keyed collection of JSON items.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SyncMap {
    /// Unique identifier of the map.
    pub sid: Option<String>,
    /// Application-defined unique name.
    pub unique_name: Option<String>,
    /// Account that owns the map.
    pub account_sid: Option<String>,
    /// Service the map belongs to.
    pub service_sid: Option<String>,
    /// Revision, bumped on every change.
    pub revision: Option<String>,
    /// Identity that created the map.
    pub created_by: Option<String>,
    /// When the map was created.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the map was last updated.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_updated: Option<DateTime<Utc>>,
    /// Absolute URL of this map.
    pub url: Option<String>,
    /// Related resources, keyed by name.
    #[serde(deserialize_with = "null_as_default")]
    pub links: HashMap<String, String>,
}

impl Resource for SyncMap {
    const ROUTE: Route = Route {
        domain: Domain::Preview,
        name: "SyncMap",
        list_path: "/Sync/Services/{ServiceSid}/Maps",
        instance_path: "/Sync/Services/{ServiceSid}/Maps/{Sid}",
        list_key: "maps",
    };
}

/// Fetches a map by sid or unique name.
#[derive(Debug, Clone)]
pub struct FetchSyncMapOptions {
    /// Service that holds the map.
    pub service_sid: String,
    /// Sid of the map.
    pub sid: String,
}

impl FetchSyncMapOptions {
    /// Identifies the map to fetch.
    pub fn new(service_sid: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            service_sid: service_sid.into(),
            sid: sid.into(),
        }
    }
}

impl Operation for FetchSyncMapOptions {
    type Resource = SyncMap;

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ServiceSid", self.service_sid.clone()),
            ("Sid", self.sid.clone()),
        ]
    }
}

impl FetchOptions for FetchSyncMapOptions {}
