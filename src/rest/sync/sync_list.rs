//! Sync lists.

use crate::converters::{null_as_default, optional_datetime};
use crate::rest::read_paging;
use crate::{Domain, Operation, Resource, Route};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// An ordered collection of JSON items.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SyncList {
    /// Unique identifier of the list.
    pub sid: Option<String>,
    /// Application-defined unique name.
    pub unique_name: Option<String>,
    /// Account that owns the list.
    pub account_sid: Option<String>,
    /// Service the list belongs to.
    pub service_sid: Option<String>,
    /// Revision, bumped on every change.
    pub revision: Option<String>,
    /// Identity that created the list.
    pub created_by: Option<String>,
    /// When the list was created.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the list was last updated.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_updated: Option<DateTime<Utc>>,
    /// Absolute URL of this list.
    pub url: Option<String>,
    /// Related resources, keyed by name.
    #[serde(deserialize_with = "null_as_default")]
    pub links: HashMap<String, String>,
}

impl Resource for SyncList {
    const ROUTE: Route = Route {
        domain: Domain::Preview,
        name: "SyncList",
        list_path: "/Sync/Services/{ServiceSid}/Lists",
        instance_path: "/Sync/Services/{ServiceSid}/Lists/{Sid}",
        list_key: "lists",
    };
}

/// Lists the lists in a Sync service.
#[derive(Debug, Clone)]
pub struct ReadSyncListOptions {
    /// Service that holds the list.
    pub service_sid: String,
    /// Records per page; derived from `limit` when unset.
    pub page_size: Option<u32>,
    /// Cap on records yielded across all pages.
    pub limit: Option<u64>,
}

impl ReadSyncListOptions {
    /// Lists every list; add filters with the setters.
    pub fn new(service_sid: impl Into<String>) -> Self {
        Self {
            service_sid: service_sid.into(),
            page_size: None,
            limit: None,
        }
    }
}

read_paging!(ReadSyncListOptions);

impl Operation for ReadSyncListOptions {
    type Resource = SyncList;

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("ServiceSid", self.service_sid.clone())]
    }
}
