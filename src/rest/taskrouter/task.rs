//! Tasks.

use crate::converters::optional_datetime;
use crate::rest::wire_enum;
use crate::{Domain, FetchOptions, Operation, Params, Resource, Route, UpdateOptions};
use chrono::{DateTime, Utc};
use serde::Deserialize;

wire_enum! {
    /// Where a task is in its lifecycle.
    pub enum TaskAssignmentStatus {
        Pending => "pending",
        Reserved => "reserved",
        Assigned => "assigned",
        Canceled => "canceled",
        Completed => "completed",
        Wrapping => "wrapping",
    }
}

/// A unit of work routed to a worker.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Task {
    /// Unique identifier of the task.
    pub sid: Option<String>,
    /// Account that owns the task.
    pub account_sid: Option<String>,
    /// Workspace the task belongs to.
    pub workspace_sid: Option<String>,
    /// Workflow that routes the task.
    pub workflow_sid: Option<String>,
    /// Queue the task currently sits in.
    pub task_queue_sid: Option<String>,
    /// Task channel sid.
    pub task_channel_sid: Option<String>,
    /// Unique name of the task channel, such as `voice`.
    pub task_channel_unique_name: Option<String>,
    /// Where the task is in its lifecycle.
    pub assignment_status: Option<TaskAssignmentStatus>,
    /// JSON document of task attributes, as a string.
    pub attributes: Option<String>,
    /// Routing priority; higher goes first.
    pub priority: Option<i32>,
    /// Why the task was last canceled or completed.
    pub reason: Option<String>,
    /// Seconds since the task was created.
    pub age: Option<i64>,
    /// Seconds the task may wait before it is canceled.
    pub timeout: Option<i64>,
    /// When the task was created.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the task was last updated.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_updated: Option<DateTime<Utc>>,
    /// Absolute URL of this task.
    pub url: Option<String>,
}

impl Resource for Task {
    const ROUTE: Route = Route {
        domain: Domain::Taskrouter,
        name: "Task",
        list_path: "/v1/Workspaces/{WorkspaceSid}/Tasks",
        instance_path: "/v1/Workspaces/{WorkspaceSid}/Tasks/{Sid}",
        list_key: "tasks",
    };
}

/// Fetches one task.
#[derive(Debug, Clone)]
pub struct FetchTaskOptions {
    /// Workspace the task belongs to.
    pub workspace_sid: String,
    /// Sid of the task.
    pub sid: String,
}

impl FetchTaskOptions {
    /// Identifies the task to fetch.
    pub fn new(workspace_sid: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            workspace_sid: workspace_sid.into(),
            sid: sid.into(),
        }
    }
}

impl Operation for FetchTaskOptions {
    type Resource = Task;

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("WorkspaceSid", self.workspace_sid.clone()),
            ("Sid", self.sid.clone()),
        ]
    }
}

impl FetchOptions for FetchTaskOptions {}

/// Changes a task's attributes, priority or assignment status.
#[derive(Debug, Clone)]
pub struct UpdateTaskOptions {
    /// Workspace the task belongs to.
    pub workspace_sid: String,
    /// Sid of the task.
    pub sid: String,
    /// Replacement attributes, as a JSON string.
    pub attributes: Option<String>,
    /// New lifecycle state.
    pub assignment_status: Option<TaskAssignmentStatus>,
    /// Why the assignment status changed.
    pub reason: Option<String>,
    /// Routing priority; higher goes first.
    pub priority: Option<i32>,
    /// Task channel sid or unique name, such as `voice`.
    pub task_channel: Option<String>,
}

impl UpdateTaskOptions {
    /// Identifies the task to update; nothing changes until a field is set.
    pub fn new(workspace_sid: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            workspace_sid: workspace_sid.into(),
            sid: sid.into(),
            attributes: None,
            assignment_status: None,
            reason: None,
            priority: None,
            task_channel: None,
        }
    }

    /// Sets the attributes JSON string.
    pub fn attributes(mut self, attributes: impl Into<String>) -> Self {
        self.attributes = Some(attributes.into());
        self
    }

    /// Moves the task to a new lifecycle state.
    pub fn assignment_status(mut self, status: TaskAssignmentStatus) -> Self {
        self.assignment_status = Some(status);
        self
    }

    /// Records why the status changed.
    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Sets the routing priority.
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Moves the task to another channel.
    pub fn task_channel(mut self, task_channel: impl Into<String>) -> Self {
        self.task_channel = Some(task_channel.into());
        self
    }
}

impl Operation for UpdateTaskOptions {
    type Resource = Task;

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("WorkspaceSid", self.workspace_sid.clone()),
            ("Sid", self.sid.clone()),
        ]
    }

    fn params(&self) -> Params {
        let mut params = Params::new();
        params.push_opt("Attributes", self.attributes.as_deref());
        params.push_opt("AssignmentStatus", self.assignment_status);
        params.push_opt("Reason", self.reason.as_deref());
        params.push_opt("Priority", self.priority);
        params.push_opt("TaskChannel", self.task_channel.as_deref());
        params
    }
}

impl UpdateOptions for UpdateTaskOptions {}
