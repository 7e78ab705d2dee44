//! Connect apps: third-party applications authorized against an account.

use crate::converters::{null_as_default, optional_method};
use crate::rest::{read_paging, wire_enum};
use crate::{Domain, FetchOptions, Operation, Params, Resource, Route, UpdateOptions};
use http::Method;
use serde::Deserialize;
use url::Url;

wire_enum! {
    /// An access level a connect app requests.
    pub enum ConnectAppPermission {
        GetAll => "get-all",
        PostAll => "post-all",
    }
}

/// A third-party application authorized to act on an account.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConnectApp {
    /// Unique identifier of the connect app.
    pub sid: Option<String>,
    /// Account that owns the connect app.
    pub account_sid: Option<String>,
    /// Human-readable name.
    pub friendly_name: Option<String>,
    /// Human-readable description.
    pub description: Option<String>,
    /// Company that publishes the app.
    pub company_name: Option<String>,
    /// Public home page of the app.
    pub homepage_url: Option<String>,
    /// Where users are sent after authorizing the app.
    pub authorize_redirect_url: Option<String>,
    /// URL called when a user deauthorizes the app.
    pub deauthorize_callback_url: Option<String>,
    /// HTTP method used for the deauthorize callback.
    #[serde(deserialize_with = "optional_method")]
    pub deauthorize_callback_method: Option<Method>,
    /// Permissions granted.
    #[serde(deserialize_with = "null_as_default")]
    pub permissions: Vec<ConnectAppPermission>,
    /// Path of this connect app relative to the API host.
    pub uri: Option<String>,
}

impl Resource for ConnectApp {
    const ROUTE: Route = Route {
        domain: Domain::Api,
        name: "ConnectApp",
        list_path: "/2010-04-01/Accounts/{AccountSid}/ConnectApps.json",
        instance_path: "/2010-04-01/Accounts/{AccountSid}/ConnectApps/{Sid}.json",
        list_key: "connect_apps",
    };
}

/// Fetches one connect app.
#[derive(Debug, Clone)]
pub struct FetchConnectAppOptions {
    /// Account override; `None` uses the client's default.
    pub account_sid: Option<String>,
    /// Sid of the connect app.
    pub sid: String,
}

impl FetchConnectAppOptions {
    /// Identifies the connect app to fetch.
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

impl Operation for FetchConnectAppOptions {
    type Resource = ConnectApp;

    fn account_sid(&self) -> Option<&str> {
        self.account_sid.as_deref()
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("Sid", self.sid.clone())]
    }
}

impl FetchOptions for FetchConnectAppOptions {}

/// Changes a connect app's listing or callbacks.
#[derive(Debug, Clone)]
pub struct UpdateConnectAppOptions {
    /// Account override; `None` uses the client's default.
    pub account_sid: Option<String>,
    /// Sid of the connect app.
    pub sid: String,
    /// Where users are sent after authorizing the app.
    pub authorize_redirect_url: Option<Url>,
    /// Company that publishes the app.
    pub company_name: Option<String>,
    /// HTTP method used for the deauthorize callback.
    pub deauthorize_callback_method: Option<Method>,
    /// URL called when a user deauthorizes the app.
    pub deauthorize_callback_url: Option<Url>,
    /// Description shown to users authorizing the app.
    pub description: Option<String>,
    /// Human-readable name to set.
    pub friendly_name: Option<String>,
    /// Public home page of the app.
    pub homepage_url: Option<Url>,
    /// Permissions the app requests.
    pub permissions: Vec<ConnectAppPermission>,
}

impl UpdateConnectAppOptions {
    /// Identifies the connect app to update; nothing changes until a field is set.
    pub fn new(sid: impl Into<String>) -> Self {
        Self {
            account_sid: None,
            sid: sid.into(),
            authorize_redirect_url: None,
            company_name: None,
            deauthorize_callback_method: None,
            deauthorize_callback_url: None,
            description: None,
            friendly_name: None,
            homepage_url: None,
            permissions: Vec::new(),
        }
    }

    /// Pins the call to an account other than the client's default.
    pub fn account_sid(mut self, account_sid: impl Into<String>) -> Self {
        self.account_sid = Some(account_sid.into());
        self
    }

    /// Sets the post-authorization redirect.
    pub fn authorize_redirect_url(mut self, url: Url) -> Self {
        self.authorize_redirect_url = Some(url);
        self
    }

    /// Sets the publishing company.
    pub fn company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = Some(company_name.into());
        self
    }

    /// Sets the HTTP method for the deauthorize callback.
    pub fn deauthorize_callback_method(mut self, method: Method) -> Self {
        self.deauthorize_callback_method = Some(method);
        self
    }

    /// Sets the deauthorize callback URL.
    pub fn deauthorize_callback_url(mut self, url: Url) -> Self {
        self.deauthorize_callback_url = Some(url);
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the friendly name.
    pub fn friendly_name(mut self, friendly_name: impl Into<String>) -> Self {
        self.friendly_name = Some(friendly_name.into());
        self
    }

    /// Sets the home page.
    pub fn homepage_url(mut self, url: Url) -> Self {
        self.homepage_url = Some(url);
        self
    }

    /// Adds a requested permission; may be repeated.
    pub fn permission(mut self, permission: ConnectAppPermission) -> Self {
        self.permissions.push(permission);
        self
    }
}

impl Operation for UpdateConnectAppOptions {
    type Resource = ConnectApp;

    fn account_sid(&self) -> Option<&str> {
        self.account_sid.as_deref()
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("Sid", self.sid.clone())]
    }

    fn params(&self) -> Params {
        let mut params = Params::new();
        params.push_opt("AuthorizeRedirectUrl", self.authorize_redirect_url.as_ref());
        params.push_opt("CompanyName", self.company_name.as_deref());
        params.push_opt("DeauthorizeCallbackMethod", self.deauthorize_callback_method.as_ref());
        params.push_opt("DeauthorizeCallbackUrl", self.deauthorize_callback_url.as_ref());
        params.push_opt("Description", self.description.as_deref());
        params.push_opt("FriendlyName", self.friendly_name.as_deref());
        params.push_opt("HomepageUrl", self.homepage_url.as_ref());
        params.push_each("Permissions", &self.permissions);
        params
    }
}

impl UpdateOptions for UpdateConnectAppOptions {}

/// Lists connect apps.
#[derive(Debug, Clone, Default)]
pub struct ReadConnectAppOptions {
    /// Account override; `None` uses the client's default.
    pub account_sid: Option<String>,
    /// Records per page; derived from `limit` when unset.
    pub page_size: Option<u32>,
    /// Cap on records yielded across all pages.
    pub limit: Option<u64>,
}

impl ReadConnectAppOptions {
    /// Lists every connect app; add filters with the setters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the call to an account other than the client's default.
    pub fn account_sid(mut self, account_sid: impl Into<String>) -> Self {
        self.account_sid = Some(account_sid.into());
        self
    }
}

read_paging!(ReadConnectAppOptions);

impl Operation for ReadConnectAppOptions {
    type Resource = ConnectApp;

    fn account_sid(&self) -> Option<&str> {
        self.account_sid.as_deref()
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::build_request;
    use crate::Action;

    #[test]
    fn permissions_repeat_under_one_key() {
        let options = UpdateConnectAppOptions::new("CN1")
            .permission(ConnectAppPermission::GetAll)
            .permission(ConnectAppPermission::PostAll)
            .deauthorize_callback_method(Method::POST);
        let request = build_request(Action::Update, &options, "AC1").unwrap();

        assert_eq!(
            request.body_params.to_form(),
            "DeauthorizeCallbackMethod=POST&Permissions=get-all&Permissions=post-all"
        );
    }

    #[test]
    fn deserializes_lowercase_callback_method() {
        let app: ConnectApp = serde_json::from_str(
            r#"{"sid": "CN1", "deauthorize_callback_method": "get", "permissions": ["get-all"]}"#,
        )
        .unwrap();

        assert_eq!(app.deauthorize_callback_method, Some(Method::GET));
        assert_eq!(app.permissions, vec![ConnectAppPermission::GetAll]);
    }
}
