//! Workspaces.

use crate::converters::{null_as_default, optional_datetime, optional_method};
use crate::rest::read_paging;
use crate::{Domain, Operation, Params, Resource, Route};
use chrono::{DateTime, Utc};
use http::Method;
use serde::Deserialize;
use std::collections::HashMap;

/// The container for a TaskRouter application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Workspace {
    /// Unique identifier of the workspace.
    pub sid: Option<String>,
    /// Account that owns the workspace.
    pub account_sid: Option<String>,
    /// Human-readable name.
    pub friendly_name: Option<String>,
    /// URL notified of workspace events.
    pub event_callback_url: Option<String>,
    /// Comma-separated event types sent to the callback.
    pub events_filter: Option<String>,
    /// Activity assigned to new workers.
    pub default_activity_name: Option<String>,
    /// Sid of the default activity.
    pub default_activity_sid: Option<String>,
    /// Activity assigned to workers that miss a reservation.
    pub timeout_activity_name: Option<String>,
    /// Sid of the timeout activity.
    pub timeout_activity_sid: Option<String>,
    /// Whether workers may hold several tasks at once.
    pub multi_task_enabled: Option<bool>,
    /// `FIFO` or `LIFO` ordering within equal priority.
    pub prioritize_queue_order: Option<String>,
    /// HTTP method used for the event callback.
    #[serde(deserialize_with = "optional_method")]
    pub event_callback_method: Option<Method>,
    /// When the workspace was created.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the workspace was last updated.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_updated: Option<DateTime<Utc>>,
    /// Absolute URL of this workspace.
    pub url: Option<String>,
    /// Related resources, keyed by name.
    #[serde(deserialize_with = "null_as_default")]
    pub links: HashMap<String, String>,
}

impl Resource for Workspace {
    const ROUTE: Route = Route {
        domain: Domain::Taskrouter,
        name: "Workspace",
        list_path: "/v1/Workspaces",
        instance_path: "/v1/Workspaces/{Sid}",
        list_key: "workspaces",
    };
}

/// Lists workspaces.
#[derive(Debug, Clone, Default)]
pub struct ReadWorkspaceOptions {
    /// Exact friendly name to match.
    pub friendly_name: Option<String>,
    /// Records per page; derived from `limit` when unset.
    pub page_size: Option<u32>,
    /// Cap on records yielded across all pages.
    pub limit: Option<u64>,
}

impl ReadWorkspaceOptions {
    /// Lists every workspace; add filters with the setters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters on an exact friendly name.
    pub fn friendly_name(mut self, friendly_name: impl Into<String>) -> Self {
        self.friendly_name = Some(friendly_name.into());
        self
    }
}

read_paging!(ReadWorkspaceOptions);

impl Operation for ReadWorkspaceOptions {
    type Resource = Workspace;

    fn path_params(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn params(&self) -> Params {
        let mut params = Params::new();
        params.push_opt("FriendlyName", self.friendly_name.as_deref());
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::build_read_request;

    #[test]
    fn friendly_name_then_default_page_size() {
        let request = build_read_request(&ReadWorkspaceOptions::new().friendly_name("Foo"), "AC1").unwrap();

        assert_eq!(
            request.query_params.pairs(),
            &[
                ("FriendlyName".to_string(), "Foo".to_string()),
                ("PageSize".to_string(), "50".to_string()),
            ]
        );
        assert_eq!(request.location(), "/v1/Workspaces");
    }
}
