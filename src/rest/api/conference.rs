//! Conferences.

use crate::converters::{null_as_default, optional_datetime};
use crate::rest::{read_paging, wire_enum};
use crate::{Domain, FetchOptions, Operation, Params, Resource, Route};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::collections::HashMap;

wire_enum! {
    /// Lifecycle state of a conference.
    pub enum ConferenceStatus {
        /// Created, nobody has joined yet.
        Init => "init",
        /// At least one participant is connected.
        InProgress => "in-progress",
        /// Everyone has left.
        Completed => "completed",
    }
}

/// A conference call.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Conference {
    /// Unique identifier of the conference.
    pub sid: Option<String>,
    /// Account that owns the conference.
    pub account_sid: Option<String>,
    /// Human-readable name.
    pub friendly_name: Option<String>,
    /// Current state.
    pub status: Option<ConferenceStatus>,
    /// Media region the conference is hosted in.
    pub region: Option<String>,
    /// API version that created the conference.
    pub api_version: Option<String>,
    /// When the conference was created.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the conference was last updated.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_updated: Option<DateTime<Utc>>,
    /// Path of this conference relative to the API host.
    pub uri: Option<String>,
    /// Paths of nested resources, keyed by name.
    #[serde(deserialize_with = "null_as_default")]
    pub subresource_uris: HashMap<String, String>,
}

impl Resource for Conference {
    const ROUTE: Route = Route {
        domain: Domain::Api,
        name: "Conference",
        list_path: "/2010-04-01/Accounts/{AccountSid}/Conferences.json",
        instance_path: "/2010-04-01/Accounts/{AccountSid}/Conferences/{Sid}.json",
        list_key: "conferences",
    };
}

/// Fetches one conference.
#[derive(Debug, Clone)]
pub struct FetchConferenceOptions {
    /// Account override; `None` uses the client's default.
    pub account_sid: Option<String>,
    /// Sid of the conference.
    pub sid: String,
}

impl FetchConferenceOptions {
    /// Identifies the conference to fetch.
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

impl Operation for FetchConferenceOptions {
    type Resource = Conference;

    fn account_sid(&self) -> Option<&str> {
        self.account_sid.as_deref()
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("Sid", self.sid.clone())]
    }
}

impl FetchOptions for FetchConferenceOptions {}

/// Lists conferences, optionally filtered.
#[derive(Debug, Clone, Default)]
pub struct ReadConferenceOptions {
    /// Account override; `None` uses the client's default.
    pub account_sid: Option<String>,
    /// Only conferences created on this day.
    pub date_created: Option<NaiveDate>,
    /// Only conferences created on or before this day.
    pub date_created_before: Option<NaiveDate>,
    /// Only conferences created on or after this day.
    pub date_created_after: Option<NaiveDate>,
    /// Only conferences last updated on this day.
    pub date_updated: Option<NaiveDate>,
    /// Only conferences last updated on or before this day.
    pub date_updated_before: Option<NaiveDate>,
    /// Only conferences last updated on or after this day.
    pub date_updated_after: Option<NaiveDate>,
    /// Exact friendly name to match.
    pub friendly_name: Option<String>,
    /// Only conferences in this state.
    pub status: Option<ConferenceStatus>,
    /// Records per page; derived from `limit` when unset.
    pub page_size: Option<u32>,
    /// Cap on records yielded across all pages.
    pub limit: Option<u64>,
}

impl ReadConferenceOptions {
    /// Lists every conference; add filters with the setters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the call to an account other than the client's default.
    pub fn account_sid(mut self, account_sid: impl Into<String>) -> Self {
        self.account_sid = Some(account_sid.into());
        self
    }

    /// Only conferences created on this day.
    pub fn date_created(mut self, date: NaiveDate) -> Self {
        self.date_created = Some(date);
        self
    }

    /// Only conferences created on or before this day.
    pub fn date_created_before(mut self, date: NaiveDate) -> Self {
        self.date_created_before = Some(date);
        self
    }

    /// Only conferences created on or after this day.
    pub fn date_created_after(mut self, date: NaiveDate) -> Self {
        self.date_created_after = Some(date);
        self
    }

    /// Only conferences last updated on this day.
    pub fn date_updated(mut self, date: NaiveDate) -> Self {
        self.date_updated = Some(date);
        self
    }

    /// Only conferences last updated on or before this day.
    pub fn date_updated_before(mut self, date: NaiveDate) -> Self {
        self.date_updated_before = Some(date);
        self
    }

    /// Only conferences last updated on or after this day.
    pub fn date_updated_after(mut self, date: NaiveDate) -> Self {
        self.date_updated_after = Some(date);
        self
    }

    /// Filters on an exact friendly name.
    pub fn friendly_name(mut self, friendly_name: impl Into<String>) -> Self {
        self.friendly_name = Some(friendly_name.into());
        self
    }

    /// Filters on conference state.
    pub fn status(mut self, status: ConferenceStatus) -> Self {
        self.status = Some(status);
        self
    }
}

read_paging!(ReadConferenceOptions);

impl Operation for ReadConferenceOptions {
    type Resource = Conference;

    fn account_sid(&self) -> Option<&str> {
        self.account_sid.as_deref()
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn params(&self) -> Params {
        let mut params = Params::new();
        // The inequality rides in the key: `DateCreated<` encodes as `DateCreated%3C=`.
        params.push_opt("DateCreated", self.date_created);
        params.push_opt("DateCreated<", self.date_created_before);
        params.push_opt("DateCreated>", self.date_created_after);
        params.push_opt("DateUpdated", self.date_updated);
        params.push_opt("DateUpdated<", self.date_updated_before);
        params.push_opt("DateUpdated>", self.date_updated_after);
        params.push_opt("FriendlyName", self.friendly_name.as_deref());
        params.push_opt("Status", self.status);
        params
    }
}
