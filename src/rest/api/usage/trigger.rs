//! Usage triggers: webhooks fired when usage crosses a threshold.

use crate::converters::{optional_datetime, optional_method};
use crate::rest::{read_paging, wire_enum};
use crate::{DeleteOptions, Domain, FetchOptions, Operation, Params, Resource, Route};
use chrono::{DateTime, Utc};
use http::Method;
use serde::Deserialize;

wire_enum! {
    /// How often a trigger re-arms.
    pub enum TriggerRecurrence {
        Daily => "daily",
        Monthly => "monthly",
        Yearly => "yearly",
        Alltime => "alltime",
    }
}

wire_enum! {
    /// The usage figure a trigger compares against its threshold.
    pub enum TriggerField {
        Count => "count",
        Usage => "usage",
        Price => "price",
    }
}

/// A webhook fired when a usage figure crosses a threshold.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UsageTrigger {
    /// Unique identifier of the trigger.
    pub sid: Option<String>,
    /// Account that owns the trigger.
    pub account_sid: Option<String>,
    /// Human-readable name.
    pub friendly_name: Option<String>,
    /// Category the trigger watches.
    pub usage_category: Option<String>,
    /// Usage figure compared against the threshold.
    pub trigger_by: Option<TriggerField>,
    /// Threshold that fires the trigger.
    pub trigger_value: Option<String>,
    /// Current value of the watched figure.
    pub current_value: Option<String>,
    /// How often the trigger re-arms.
    pub recurring: Option<TriggerRecurrence>,
    /// URL the trigger calls when it fires.
    pub callback_url: Option<String>,
    /// HTTP method used for `callback_url`.
    #[serde(deserialize_with = "optional_method")]
    pub callback_method: Option<Method>,
    /// When the trigger last fired.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_fired: Option<DateTime<Utc>>,
    /// When the trigger was created.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the trigger was last updated.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_updated: Option<DateTime<Utc>>,
    /// Path of this trigger relative to the API host.
    pub uri: Option<String>,
}

impl Resource for UsageTrigger {
    const ROUTE: Route = Route {
        domain: Domain::Api,
        name: "Trigger",
        list_path: "/2010-04-01/Accounts/{AccountSid}/Usage/Triggers.json",
        instance_path: "/2010-04-01/Accounts/{AccountSid}/Usage/Triggers/{Sid}.json",
        list_key: "usage_triggers",
    };
}

/// Fetches one usage trigger.
#[derive(Debug, Clone)]
pub struct FetchTriggerOptions {
    /// Account override; `None` uses the client's default.
    pub account_sid: Option<String>,
    /// Sid of the trigger.
    pub sid: String,
}

impl FetchTriggerOptions {
    /// Identifies the trigger to fetch.
    pub fn new(sid: impl Into<String>) -> Self {
        Self {
            account_sid: None,
            sid: sid.into(),
        }
    }

    /// Pins the call to an account other than the client's default.
    pub fn account_sid(mut self, account_sid: impl Into<String>) -> Self {
        self.account_sid = Some(account_sid.into());
        self
    }
}

impl Operation for FetchTriggerOptions {
    type Resource = UsageTrigger;

    fn account_sid(&self) -> Option<&str> {
        self.account_sid.as_deref()
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("Sid", self.sid.clone())]
    }
}

impl FetchOptions for FetchTriggerOptions {}

/// Removes a usage trigger.
#[derive(Debug, Clone)]
pub struct DeleteTriggerOptions {
    /// Account override; `None` uses the client's default.
    pub account_sid: Option<String>,
    /// Sid of the trigger.
    pub sid: String,
}

impl DeleteTriggerOptions {
    /// Identifies the trigger to delete.
    pub fn new(sid: impl Into<String>) -> Self {
        Self {
            account_sid: None,
            sid: sid.into(),
        }
    }

    /// Pins the call to an account other than the client's default.
    pub fn account_sid(mut self, account_sid: impl Into<String>) -> Self {
        self.account_sid = Some(account_sid.into());
        self
    }
}

impl Operation for DeleteTriggerOptions {
    type Resource = UsageTrigger;

    fn account_sid(&self) -> Option<&str> {
        self.account_sid.as_deref()
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("Sid", self.sid.clone())]
    }
}

impl DeleteOptions for DeleteTriggerOptions {}

/// Lists usage triggers, optionally filtered.
#[derive(Debug, Clone, Default)]
pub struct ReadTriggerOptions {
    /// Account override; `None` uses the client's default.
    pub account_sid: Option<String>,
    /// Only triggers with this recurrence.
    pub recurring: Option<TriggerRecurrence>,
    /// Only triggers comparing this figure.
    pub trigger_by: Option<TriggerField>,
    /// Only triggers watching this category.
    pub usage_category: Option<String>,
    /// Records per page; derived from `limit` when unset.
    pub page_size: Option<u32>,
    /// Cap on records yielded across all pages.
    pub limit: Option<u64>,
}

impl ReadTriggerOptions {
    /// Lists every trigger; add filters with the setters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the call to an account other than the client's default.
    pub fn account_sid(mut self, account_sid: impl Into<String>) -> Self {
        self.account_sid = Some(account_sid.into());
        self
    }

    /// Filters on recurrence.
    pub fn recurring(mut self, recurring: TriggerRecurrence) -> Self {
        self.recurring = Some(recurring);
        self
    }

    /// Filters on the compared figure.
    pub fn trigger_by(mut self, trigger_by: TriggerField) -> Self {
        self.trigger_by = Some(trigger_by);
        self
    }

    /// Filters on the watched category.
    pub fn usage_category(mut self, category: impl Into<String>) -> Self {
        self.usage_category = Some(category.into());
        self
    }
}

read_paging!(ReadTriggerOptions);

impl Operation for ReadTriggerOptions {
    type Resource = UsageTrigger;

    fn account_sid(&self) -> Option<&str> {
        self.account_sid.as_deref()
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn params(&self) -> Params {
        let mut params = Params::new();
        params.push_opt("Recurring", self.recurring);
        params.push_opt("TriggerBy", self.trigger_by);
        params.push_opt("UsageCategory", self.usage_category.as_deref());
        params
    }
}
