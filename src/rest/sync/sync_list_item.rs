//! Items appended to a sync list.

use crate::converters::optional_datetime;
use crate::{CreateOptions, Domain, Operation, Params, Resource, Route};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// One JSON item in a Sync list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SyncListItem {
    /// Position of the item within the list.
    pub index: Option<i64>,
    /// Account that owns the list item.
    pub account_sid: Option<String>,
    /// Service the list item belongs to.
    pub service_sid: Option<String>,
    /// List the item belongs to.
    pub list_sid: Option<String>,
    /// Revision, bumped on every change.
    pub revision: Option<String>,
    /// Identity that created the list item.
    pub created_by: Option<String>,
    /// The item's JSON payload.
    pub data: Value,
    /// When the list item was created.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the list item was last updated.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_updated: Option<DateTime<Utc>>,
    /// Absolute URL of this list item.
    pub url: Option<String>,
}

impl Resource for SyncListItem {
    const ROUTE: Route = Route {
        domain: Domain::Preview,
        name: "SyncListItem",
        list_path: "/Sync/Services/{ServiceSid}/Lists/{ListSid}/Items",
        instance_path: "/Sync/Services/{ServiceSid}/Lists/{ListSid}/Items/{Index}",
        list_key: "items",
    };
}

/// Appends an item; `data` is sent as serialized JSON.
#[derive(Debug, Clone)]
pub struct CreateSyncListItemOptions {
    /// Service that holds the list item.
    pub service_sid: String,
    /// List the item belongs to.
    pub list_sid: String,
    /// JSON payload of the item.
    pub data: Value,
}

impl CreateSyncListItemOptions {
    /// Starts a create request with the required fields.
    pub fn new(service_sid: impl Into<String>, list_sid: impl Into<String>, data: Value) -> Self {
        Self {
            service_sid: service_sid.into(),
            list_sid: list_sid.into(),
            data,
        }
    }
}

impl Operation for CreateSyncListItemOptions {
    type Resource = SyncListItem;

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ServiceSid", self.service_sid.clone()),
            ("ListSid", self.list_sid.clone()),
        ]
    }

    fn params(&self) -> Params {
        let mut params = Params::new();
        params.push("Data", self.data.to_string());
        params
    }
}

impl CreateOptions for CreateSyncListItemOptions {}
