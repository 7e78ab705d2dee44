//! Conference participants.
//!
//! A participant is addressed by its conference and the sid of the call
//! that joined it.

use crate::converters::optional_datetime;
use crate::rest::{read_paging, wire_enum};
use crate::{
    CreateOptions, DeleteOptions, Domain, FetchOptions, Operation, Params, Resource, Route,
    UpdateOptions,
};
use chrono::{DateTime, Utc};
use http::Method;
use serde::Deserialize;
use url::Url;

wire_enum! {
    /// Connection state of a participant.
    pub enum ParticipantStatus {
        Queued => "queued",
        Connecting => "connecting",
        Ringing => "ringing",
        Connected => "connected",
        Complete => "complete",
        Failed => "failed",
    }
}

/// A call connected to a conference.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Participant {
    /// Account that owns the participant.
    pub account_sid: Option<String>,
    /// Call that connects the participant.
    pub call_sid: Option<String>,
    /// Conference the participant is in.
    pub conference_sid: Option<String>,
    /// Whether the participant is muted.
    pub muted: Option<bool>,
    /// Whether the participant is on hold.
    pub hold: Option<bool>,
    /// Whether the conference starts when this participant joins.
    pub start_conference_on_enter: Option<bool>,
    /// Whether the conference ends when this participant leaves.
    pub end_conference_on_exit: Option<bool>,
    /// Current state.
    pub status: Option<ParticipantStatus>,
    /// When the participant was created.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the participant was last updated.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_updated: Option<DateTime<Utc>>,
    /// Path of this participant relative to the API host.
    pub uri: Option<String>,
}

impl Resource for Participant {
    const ROUTE: Route = Route {
        domain: Domain::Api,
        name: "Participant",
        list_path: "/2010-04-01/Accounts/{AccountSid}/Conferences/{ConferenceSid}/Participants.json",
        instance_path:
            "/2010-04-01/Accounts/{AccountSid}/Conferences/{ConferenceSid}/Participants/{CallSid}.json",
        list_key: "participants",
    };
}

fn instance_params(conference_sid: &str, call_sid: &str) -> Vec<(&'static str, String)> {
    vec![
        ("ConferenceSid", conference_sid.to_string()),
        ("CallSid", call_sid.to_string()),
    ]
}

/// Fetches one participant.
#[derive(Debug, Clone)]
pub struct FetchParticipantOptions {
    /// Account override; `None` uses the client's default.
    pub account_sid: Option<String>,
    /// Conference the participant is in.
    pub conference_sid: String,
    /// Call that connects the participant.
    pub call_sid: String,
}

impl FetchParticipantOptions {
    /// Identifies the participant to fetch.
    pub fn new(conference_sid: impl Into<String>, call_sid: impl Into<String>) -> Self {
        Self {
            account_sid: None,
            conference_sid: conference_sid.into(),
            call_sid: call_sid.into(),
        }
    }

    /// Pins the call to an account other than the client's default.
    pub fn account_sid(mut self, account_sid: impl Into<String>) -> Self {
        self.account_sid = Some(account_sid.into());
        self
    }
}

impl Operation for FetchParticipantOptions {
    type Resource = Participant;

    fn account_sid(&self) -> Option<&str> {
        self.account_sid.as_deref()
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        instance_params(&self.conference_sid, &self.call_sid)
    }
}

impl FetchOptions for FetchParticipantOptions {}

/// Dials a new participant into a conference.
#[derive(Debug, Clone)]
pub struct CreateParticipantOptions {
    /// Account override; `None` uses the client's default.
    pub account_sid: Option<String>,
    /// Conference the participant is in.
    pub conference_sid: String,
    /// Caller ID for the outbound call.
    pub from: String,
    /// Number or client to dial.
    pub to: String,
    /// URL notified of call progress.
    pub status_callback: Option<Url>,
    /// HTTP method used for `status_callback`.
    pub status_callback_method: Option<Method>,
    /// Call progress events reported to `status_callback`.
    pub status_callback_event: Vec<String>,
    /// Seconds to ring the participant before giving up.
    pub timeout: Option<i32>,
    /// Whether to record the participant.
    pub record: Option<bool>,
    /// Whether the participant is muted.
    pub muted: Option<bool>,
    /// Beep played on join and leave: `true`, `false`, `onEnter` or `onExit`.
    pub beep: Option<String>,
    /// Whether the conference starts when this participant joins.
    pub start_conference_on_enter: Option<bool>,
    /// Whether the conference ends when this participant leaves.
    pub end_conference_on_exit: Option<bool>,
    /// Whether early media is passed to the conference.
    pub early_media: Option<bool>,
}

impl CreateParticipantOptions {
    /// Starts a create request with the required fields.
    pub fn new(
        conference_sid: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            account_sid: None,
            conference_sid: conference_sid.into(),
            from: from.into(),
            to: to.into(),
            status_callback: None,
            status_callback_method: None,
            status_callback_event: Vec::new(),
            timeout: None,
            record: None,
            muted: None,
            beep: None,
            start_conference_on_enter: None,
            end_conference_on_exit: None,
            early_media: None,
        }
    }

    /// Pins the call to an account other than the client's default.
    pub fn account_sid(mut self, account_sid: impl Into<String>) -> Self {
        self.account_sid = Some(account_sid.into());
        self
    }

    /// Sets the call progress URL.
    pub fn status_callback(mut self, url: Url) -> Self {
        self.status_callback = Some(url);
        self
    }

    /// Sets the HTTP method for the call progress URL.
    pub fn status_callback_method(mut self, method: Method) -> Self {
        self.status_callback_method = Some(method);
        self
    }

    /// Adds an event to report to the status callback; may be repeated.
    pub fn status_callback_event(mut self, event: impl Into<String>) -> Self {
        self.status_callback_event.push(event.into());
        self
    }

    /// Seconds to let the participant's phone ring.
    pub fn timeout(mut self, seconds: i32) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Turns recording of the participant on or off.
    pub fn record(mut self, record: bool) -> Self {
        self.record = Some(record);
        self
    }

    /// Mutes or unmutes the participant.
    pub fn muted(mut self, muted: bool) -> Self {
        self.muted = Some(muted);
        self
    }

    /// Chooses when a beep plays.
    pub fn beep(mut self, beep: impl Into<String>) -> Self {
        self.beep = Some(beep.into());
        self
    }

    /// Starts the conference when this participant joins.
    pub fn start_conference_on_enter(mut self, start: bool) -> Self {
        self.start_conference_on_enter = Some(start);
        self
    }

    /// Ends the conference when this participant leaves.
    pub fn end_conference_on_exit(mut self, end: bool) -> Self {
        self.end_conference_on_exit = Some(end);
        self
    }

    /// Whether early media reaches the conference.
    pub fn early_media(mut self, early_media: bool) -> Self {
        self.early_media = Some(early_media);
        self
    }
}

impl Operation for CreateParticipantOptions {
    type Resource = Participant;

    fn account_sid(&self) -> Option<&str> {
        self.account_sid.as_deref()
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("ConferenceSid", self.conference_sid.clone())]
    }

    fn params(&self) -> Params {
        let mut params = Params::new();
        params.push("From", self.from.as_str());
        params.push("To", self.to.as_str());
        params.push_opt("StatusCallback", self.status_callback.as_ref());
        params.push_opt("StatusCallbackMethod", self.status_callback_method.as_ref());
        params.push_each("StatusCallbackEvent", &self.status_callback_event);
        params.push_opt("Timeout", self.timeout);
        params.push_opt("Record", self.record);
        params.push_opt("Muted", self.muted);
        params.push_opt("Beep", self.beep.as_deref());
        params.push_opt("StartConferenceOnEnter", self.start_conference_on_enter);
        params.push_opt("EndConferenceOnExit", self.end_conference_on_exit);
        params.push_opt("EarlyMedia", self.early_media);
        params
    }
}

impl CreateOptions for CreateParticipantOptions {}

/// Changes a participant's mute or hold state.
#[derive(Debug, Clone)]
pub struct UpdateParticipantOptions {
    /// Account override; `None` uses the client's default.
    pub account_sid: Option<String>,
    /// Conference the participant is in.
    pub conference_sid: String,
    /// Call that connects the participant.
    pub call_sid: String,
    /// Whether the participant is muted.
    pub muted: Option<bool>,
    /// Whether the participant is on hold.
    pub hold: Option<bool>,
    /// TwiML played while the participant is on hold.
    pub hold_url: Option<Url>,
    /// HTTP method used for `hold_url`.
    pub hold_method: Option<Method>,
    /// TwiML played to the participant.
    pub announce_url: Option<Url>,
    /// HTTP method used for `announce_url`.
    pub announce_method: Option<Method>,
}

impl UpdateParticipantOptions {
    /// Identifies the participant to update; nothing changes until a field is set.
    pub fn new(conference_sid: impl Into<String>, call_sid: impl Into<String>) -> Self {
        Self {
            account_sid: None,
            conference_sid: conference_sid.into(),
            call_sid: call_sid.into(),
            muted: None,
            hold: None,
            hold_url: None,
            hold_method: None,
            announce_url: None,
            announce_method: None,
        }
    }

    /// Pins the call to an account other than the client's default.
    pub fn account_sid(mut self, account_sid: impl Into<String>) -> Self {
        self.account_sid = Some(account_sid.into());
        self
    }

    /// Mutes or unmutes the participant.
    pub fn muted(mut self, muted: bool) -> Self {
        self.muted = Some(muted);
        self
    }

    /// Puts the participant on hold or takes them off.
    pub fn hold(mut self, hold: bool) -> Self {
        self.hold = Some(hold);
        self
    }

    /// Music or TwiML played while the participant is on hold.
    pub fn hold_url(mut self, url: Url) -> Self {
        self.hold_url = Some(url);
        self
    }

    /// Sets the HTTP method for the hold URL.
    pub fn hold_method(mut self, method: Method) -> Self {
        self.hold_method = Some(method);
        self
    }

    /// TwiML announced to the participant.
    pub fn announce_url(mut self, url: Url) -> Self {
        self.announce_url = Some(url);
        self
    }

    /// Sets the HTTP method for the announcement URL.
    pub fn announce_method(mut self, method: Method) -> Self {
        self.announce_method = Some(method);
        self
    }
}

impl Operation for UpdateParticipantOptions {
    type Resource = Participant;

    fn account_sid(&self) -> Option<&str> {
        self.account_sid.as_deref()
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        instance_params(&self.conference_sid, &self.call_sid)
    }

    fn params(&self) -> Params {
        let mut params = Params::new();
        params.push_opt("Muted", self.muted);
        params.push_opt("Hold", self.hold);
        params.push_opt("HoldUrl", self.hold_url.as_ref());
        params.push_opt("HoldMethod", self.hold_method.as_ref());
        params.push_opt("AnnounceUrl", self.announce_url.as_ref());
        params.push_opt("AnnounceMethod", self.announce_method.as_ref());
        params
    }
}

impl UpdateOptions for UpdateParticipantOptions {}

/// Removes a participant from a conference.
#[derive(Debug, Clone)]
pub struct DeleteParticipantOptions {
    /// Account override; `None` uses the client's default.
    pub account_sid: Option<String>,
    /// Conference the participant is in.
    pub conference_sid: String,
    /// Call that connects the participant.
    pub call_sid: String,
}

impl DeleteParticipantOptions {
    /// Identifies the participant to delete.
    pub fn new(conference_sid: impl Into<String>, call_sid: impl Into<String>) -> Self {
        Self {
            account_sid: None,
            conference_sid: conference_sid.into(),
            call_sid: call_sid.into(),
        }
    }

    /// Pins the call to an account other than the client's default.
    pub fn account_sid(mut self, account_sid: impl Into<String>) -> Self {
        self.account_sid = Some(account_sid.into());
        self
    }
}

impl Operation for DeleteParticipantOptions {
    type Resource = Participant;

    fn account_sid(&self) -> Option<&str> {
        self.account_sid.as_deref()
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        instance_params(&self.conference_sid, &self.call_sid)
    }
}

impl DeleteOptions for DeleteParticipantOptions {}

/// Lists the participants of a conference.
#[derive(Debug, Clone)]
pub struct ReadParticipantOptions {
    /// Account override; `None` uses the client's default.
    pub account_sid: Option<String>,
    /// Conference the participant is in.
    pub conference_sid: String,
    /// Only participants with this mute state.
    pub muted: Option<bool>,
    /// Only participants with this hold state.
    pub hold: Option<bool>,
    /// Records per page; derived from `limit` when unset.
    pub page_size: Option<u32>,
    /// Cap on records yielded across all pages.
    pub limit: Option<u64>,
}

impl ReadParticipantOptions {
    /// Lists every participant; add filters with the setters.
    pub fn new(conference_sid: impl Into<String>) -> Self {
        Self {
            account_sid: None,
            conference_sid: conference_sid.into(),
            muted: None,
            hold: None,
            page_size: None,
            limit: None,
        }
    }

    /// Pins the call to an account other than the client's default.
    pub fn account_sid(mut self, account_sid: impl Into<String>) -> Self {
        self.account_sid = Some(account_sid.into());
        self
    }

    /// Filters on mute state.
    pub fn muted(mut self, muted: bool) -> Self {
        self.muted = Some(muted);
        self
    }

    /// Filters on hold state.
    pub fn hold(mut self, hold: bool) -> Self {
        self.hold = Some(hold);
        self
    }
}

read_paging!(ReadParticipantOptions);

impl Operation for ReadParticipantOptions {
    type Resource = Participant;

    fn account_sid(&self) -> Option<&str> {
        self.account_sid.as_deref()
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("ConferenceSid", self.conference_sid.clone())]
    }

    fn params(&self) -> Params {
        let mut params = Params::new();
        params.push_opt("Muted", self.muted);
        params.push_opt("Hold", self.hold);
        params
    }
}
