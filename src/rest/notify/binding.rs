//! Bindings: an identity's registration with one delivery channel.

use crate::converters::{null_as_default, optional_datetime};
use crate::rest::{read_paging, wire_enum};
use crate::{
    CreateOptions, DeleteOptions, Domain, FetchOptions, Operation, Params, Resource, Route,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::collections::HashMap;

wire_enum! {
    /// The channel a binding delivers through.
    pub enum BindingType {
        Apn => "apn",
        Gcm => "gcm",
        Sms => "sms",
        Fcm => "fcm",
        FacebookMessenger => "facebook-messenger",
        Alexa => "alexa",
    }
}

/// A device address registered to receive notifications for an identity.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Binding {
    /// Unique identifier of the binding.
    pub sid: Option<String>,
    /// Account that owns the binding.
    pub account_sid: Option<String>,
    /// Service the binding belongs to.
    pub service_sid: Option<String>,
    /// Push credential used to deliver to this binding.
    pub credential_sid: Option<String>,
    /// When the binding was created.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the binding was last updated.
    #[serde(deserialize_with = "optional_datetime")]
    pub date_updated: Option<DateTime<Utc>>,
    /// Notification protocol version of the device.
    pub notification_protocol_version: Option<String>,
    /// Device-unique endpoint used to de-duplicate bindings.
    pub endpoint: Option<String>,
    /// Application-defined identity the binding belongs to.
    pub identity: Option<String>,
    /// Delivery channel.
    pub binding_type: Option<BindingType>,
    /// Device address: a phone number, push token or endpoint.
    pub address: Option<String>,
    /// Tags for targeting notifications.
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Absolute URL of this binding.
    pub url: Option<String>,
    /// Related resources, keyed by name.
    #[serde(deserialize_with = "null_as_default")]
    pub links: HashMap<String, String>,
}

impl Resource for Binding {
    const ROUTE: Route = Route {
        domain: Domain::Notify,
        name: "Binding",
        list_path: "/v1/Services/{ServiceSid}/Bindings",
        instance_path: "/v1/Services/{ServiceSid}/Bindings/{Sid}",
        list_key: "bindings",
    };
}

fn instance_params(service_sid: &str, sid: &str) -> Vec<(&'static str, String)> {
    vec![
        ("ServiceSid", service_sid.to_string()),
        ("Sid", sid.to_string()),
    ]
}

/// Fetches one binding.
#[derive(Debug, Clone)]
pub struct FetchBindingOptions {
    /// Service that holds the binding.
    pub service_sid: String,
    /// Sid of the binding.
    pub sid: String,
}

impl FetchBindingOptions {
    /// Identifies the binding to fetch.
    pub fn new(service_sid: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            service_sid: service_sid.into(),
            sid: sid.into(),
        }
    }
}

impl Operation for FetchBindingOptions {
    type Resource = Binding;

    fn path_params(&self) -> Vec<(&'static str, String)> {
        instance_params(&self.service_sid, &self.sid)
    }
}

impl FetchOptions for FetchBindingOptions {}

/// Removes a binding.
#[derive(Debug, Clone)]
pub struct DeleteBindingOptions {
    /// Service that holds the binding.
    pub service_sid: String,
    /// Sid of the binding.
    pub sid: String,
}

impl DeleteBindingOptions {
    /// Identifies the binding to delete.
    pub fn new(service_sid: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            service_sid: service_sid.into(),
            sid: sid.into(),
        }
    }
}

impl Operation for DeleteBindingOptions {
    type Resource = Binding;

    fn path_params(&self) -> Vec<(&'static str, String)> {
        instance_params(&self.service_sid, &self.sid)
    }
}

impl DeleteOptions for DeleteBindingOptions {}

/// Registers an identity's address on a channel.
#[derive(Debug, Clone)]
pub struct CreateBindingOptions {
    /// Service that holds the binding.
    pub service_sid: String,
    /// Application-defined identity.
    pub identity: String,
    /// Delivery channel.
    pub binding_type: BindingType,
    /// Device address: a phone number, push token or endpoint.
    pub address: String,
    /// Tags for targeting notifications.
    pub tags: Vec<String>,
    /// Notification protocol version of the device.
    pub notification_protocol_version: Option<String>,
    /// Push credential used to deliver to this binding.
    pub credential_sid: Option<String>,
    /// Device-unique endpoint used to de-duplicate bindings.
    pub endpoint: Option<String>,
}

impl CreateBindingOptions {
    /// Starts a create request with the required fields.
    pub fn new(
        service_sid: impl Into<String>,
        identity: impl Into<String>,
        binding_type: BindingType,
        address: impl Into<String>,
    ) -> Self {
        Self {
            service_sid: service_sid.into(),
            identity: identity.into(),
            binding_type,
            address: address.into(),
            tags: Vec::new(),
            notification_protocol_version: None,
            credential_sid: None,
            endpoint: None,
        }
    }

    /// Adds a tag; may be repeated.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Sets the notification protocol version.
    pub fn notification_protocol_version(mut self, version: impl Into<String>) -> Self {
        self.notification_protocol_version = Some(version.into());
        self
    }

    /// Uses a specific push credential.
    pub fn credential_sid(mut self, credential_sid: impl Into<String>) -> Self {
        self.credential_sid = Some(credential_sid.into());
        self
    }

    /// Sets the endpoint used to de-duplicate bindings.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
}

impl Operation for CreateBindingOptions {
    type Resource = Binding;

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("ServiceSid", self.service_sid.clone())]
    }

    fn params(&self) -> Params {
        let mut params = Params::new();
        params.push("Identity", self.identity.as_str());
        params.push("BindingType", self.binding_type);
        params.push("Address", self.address.as_str());
        params.push_each("Tag", &self.tags);
        params.push_opt(
            "NotificationProtocolVersion",
            self.notification_protocol_version.as_deref(),
        );
        params.push_opt("CredentialSid", self.credential_sid.as_deref());
        params.push_opt("Endpoint", self.endpoint.as_deref());
        params
    }
}

impl CreateOptions for CreateBindingOptions {}

/// Lists a service's bindings, filtered by date, identity and tag.
#[derive(Debug, Clone)]
pub struct ReadBindingOptions {
    /// Service that holds the binding.
    pub service_sid: String,
    /// Only records from this day on.
    pub start_date: Option<NaiveDate>,
    /// Only records up to and including this day.
    pub end_date: Option<NaiveDate>,
    /// Only bindings for these identities.
    pub identities: Vec<String>,
    /// Only bindings carrying every one of these tags.
    pub tags: Vec<String>,
    /// Records per page; derived from `limit` when unset.
    pub page_size: Option<u32>,
    /// Cap on records yielded across all pages.
    pub limit: Option<u64>,
}

impl ReadBindingOptions {
    /// Lists every binding; add filters with the setters.
    pub fn new(service_sid: impl Into<String>) -> Self {
        Self {
            service_sid: service_sid.into(),
            start_date: None,
            end_date: None,
            identities: Vec::new(),
            tags: Vec::new(),
            page_size: None,
            limit: None,
        }
    }

    /// Only records from this day on.
    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Only records up to and including this day.
    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Adds an identity to match; may be repeated.
    pub fn identity(mut self, identity: impl Into<String>) -> Self {
        self.identities.push(identity.into());
        self
    }

    /// Adds a tag to match; may be repeated.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

read_paging!(ReadBindingOptions);

impl Operation for ReadBindingOptions {
    type Resource = Binding;

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("ServiceSid", self.service_sid.clone())]
    }

    fn params(&self) -> Params {
        let mut params = Params::new();
        params.push_opt("StartDate", self.start_date);
        params.push_opt("EndDate", self.end_date);
        params.push_each("Identity", &self.identities);
        params.push_each("Tag", &self.tags);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{build_read_request, build_request};
    use crate::{Action, Target};

    #[test]
    fn read_expands_repeated_filters_in_order() {
        let options = ReadBindingOptions::new("IS1")
            .identity("alice")
            .identity("bob")
            .tag("a b")
            .tag("c&d")
            .start_date(NaiveDate::from_ymd_opt(2017, 3, 1).unwrap());
        let request = build_read_request(&options, "ACignored").unwrap();

        assert_eq!(
            request.query_params.to_form(),
            "StartDate=2017-03-01&Identity=alice&Identity=bob&Tag=a+b&Tag=c%26d&PageSize=50"
        );
        assert_eq!(
            request.target,
            Target::Endpoint {
                domain: Domain::Notify,
                path: "/v1/Services/IS1/Bindings".to_string(),
            }
        );
    }

    #[test]
    fn create_sends_required_fields_first() {
        let options = CreateBindingOptions::new("IS1", "alice", BindingType::Sms, "+15005550006")
            .tag("vip");
        let request = build_request(Action::Create, &options, "AC1").unwrap();

        assert_eq!(
            request.body_params.to_form(),
            "Identity=alice&BindingType=sms&Address=%2B15005550006&Tag=vip"
        );
    }

    #[test]
    fn no_tags_means_no_tag_pairs() {
        let options = CreateBindingOptions::new("IS1", "alice", BindingType::Apn, "token");
        let request = build_request(Action::Create, &options, "AC1").unwrap();
        assert!(!request.body_params.contains("Tag"));
    }

    #[test]
    fn unknown_binding_type_is_never_sent() {
        let options = CreateBindingOptions::new("IS1", "alice", BindingType::Unknown, "token");
        let result = build_request(Action::Create, &options, "AC1");

        match result {
            Err(crate::Error::InvalidRequest(message)) => assert!(message.contains("BindingType")),
            other => panic!("Expected InvalidRequest, got {:?}", other),
        }
    }
}
