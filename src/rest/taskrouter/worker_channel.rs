//! A worker's capacity on one task channel.

use crate::converters::optional_datetime;
use crate::{Domain, FetchOptions, Operation, Params, Resource, Route, UpdateOptions};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A worker's capacity on one task channel.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WorkerChannel {
    /// Unique identifier of the worker channel.
    pub sid: Option<String>,
    /// Account that owns the worker channel.
    pub account_sid: Option<String>,
    /// Workspace the worker channel belongs to.
    pub workspace_sid: Option<String>,
    /// Worker that owns the channel.
    pub worker_sid: Option<String>,
    /// Task channel sid.
    pub task_channel_sid: Option<String>,
    /// Unique name of the task channel, such as `voice`.
    pub task_channel_unique_name: Option<String>,
    /// Tasks currently assigned on this channel.
    pub assigned_tasks: Option<i32>,
    /// Whether the worker accepts tasks on this channel.
    pub available: Option<bool>,
    /// Share of capacity still free, as a percentage.
    pub available_capacity_percentage: Option<i32>,
    /// Tasks the worker can handle at once on this channel.
    pub configured_capacity: Option<i32>,
    /// When the worker channel was created.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the worker channel was last updated.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_updated: Option<DateTime<Utc>>,
    /// Absolute URL of this worker channel.
    pub url: Option<String>,
}

impl Resource for WorkerChannel {
    const ROUTE: Route = Route {
        domain: Domain::Taskrouter,
        name: "WorkerChannel",
        list_path: "/v1/Workspaces/{WorkspaceSid}/Workers/{WorkerSid}/Channels",
        instance_path: "/v1/Workspaces/{WorkspaceSid}/Workers/{WorkerSid}/Channels/{Sid}",
        list_key: "channels",
    };
}

fn instance_params(workspace_sid: &str, worker_sid: &str, sid: &str) -> Vec<(&'static str, String)> {
    vec![
        ("WorkspaceSid", workspace_sid.to_string()),
        ("WorkerSid", worker_sid.to_string()),
        ("Sid", sid.to_string()),
    ]
}

/// Fetches a worker's channel.
#[derive(Debug, Clone)]
pub struct FetchWorkerChannelOptions {
    /// Workspace the worker channel belongs to.
    pub workspace_sid: String,
    /// Worker that owns the channel.
    pub worker_sid: String,
    /// Sid of the worker channel.
    pub sid: String,
}

impl FetchWorkerChannelOptions {
    /// Identifies the worker channel to fetch.
    pub fn new(
        workspace_sid: impl Into<String>,
        worker_sid: impl Into<String>,
        sid: impl Into<String>,
    ) -> Self {
        Self {
            workspace_sid: workspace_sid.into(),
            worker_sid: worker_sid.into(),
            sid: sid.into(),
        }
    }
}

impl Operation for FetchWorkerChannelOptions {
    type Resource = WorkerChannel;

    fn path_params(&self) -> Vec<(&'static str, String)> {
        instance_params(&self.workspace_sid, &self.worker_sid, &self.sid)
    }
}

impl FetchOptions for FetchWorkerChannelOptions {}

/// Changes a worker's capacity or availability on one channel.
#[derive(Debug, Clone)]
pub struct UpdateWorkerChannelOptions {
    /// Workspace the worker channel belongs to.
    pub workspace_sid: String,
    /// Worker that owns the channel.
    pub worker_sid: String,
    /// Sid of the worker channel.
    pub sid: String,
    /// Tasks the worker can handle at once on this channel.
    pub capacity: Option<i32>,
    /// Whether the worker accepts tasks on this channel.
    pub available: Option<bool>,
}

impl UpdateWorkerChannelOptions {
    /// Identifies the worker channel to update; nothing changes until a field is set.
    pub fn new(
        workspace_sid: impl Into<String>,
        worker_sid: impl Into<String>,
        sid: impl Into<String>,
    ) -> Self {
        Self {
            workspace_sid: workspace_sid.into(),
            worker_sid: worker_sid.into(),
            sid: sid.into(),
            capacity: None,
            available: None,
        }
    }

    /// Number of concurrent tasks the worker takes on this channel.
    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Opens or closes the channel for new tasks.
    pub fn available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }
}

impl Operation for UpdateWorkerChannelOptions {
    type Resource = WorkerChannel;

    fn path_params(&self) -> Vec<(&'static str, String)> {
        instance_params(&self.workspace_sid, &self.worker_sid, &self.sid)
    }

    fn params(&self) -> Params {
        let mut params = Params::new();
        params.push_opt("Capacity", self.capacity);
        params.push_opt("Available", self.available);
        params
    }
}

impl UpdateOptions for UpdateWorkerChannelOptions {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::build_request;
    use crate::Action;

    #[test]
    fn capacity_zero_and_unavailable_are_sent() {
        let options = UpdateWorkerChannelOptions::new("WS1", "WK1", "voice")
            .capacity(0)
            .available(false);
        let request = build_request(Action::Update, &options, "AC1").unwrap();

        assert_eq!(request.location(), "/v1/Workspaces/WS1/Workers/WK1/Channels/voice");
        assert_eq!(request.body_params.to_form(), "Capacity=0&Available=false");
    }
}
