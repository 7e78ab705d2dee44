//! Declarative per-resource metadata and operation options.
//!
//! A resource is described once by a [`Route`]. Each operation on it is a
//! plain options struct implementing [`Operation`] plus one of the marker
//! traits ([`FetchOptions`], [`CreateOptions`], [`UpdateOptions`],
//! [`DeleteOptions`], [`ReadOptions`]). The functions in this module turn an
//! options struct into a [`Request`]; they never consult the transport, so
//! the account scope is passed in already resolved.

use crate::request::{Params, Request, RequestBuilder};
use crate::{Domain, Result};
use http::Method;
use serde::de::DeserializeOwned;
use std::fmt;

/// Page size sent when a read sets neither a page size nor a limit.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Largest page size the API accepts.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Placeholder name for the account scope in path templates.
pub const ACCOUNT_SID: &str = "AccountSid";

/// The static metadata describing where a resource lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// The product serving the resource.
    pub domain: Domain,
    /// Resource name used in logs and error messages.
    pub name: &'static str,
    /// Path template of the collection, used by read and create.
    pub list_path: &'static str,
    /// Path template of a single instance, used by fetch, update and delete.
    pub instance_path: &'static str,
    /// Key of the records array in list responses.
    pub list_key: &'static str,
}

/// A server-side entity type.
pub trait Resource: DeserializeOwned + Send + 'static {
    /// Where this resource lives.
    const ROUTE: Route;
}

/// The five operation shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Retrieve one instance.
    Fetch,
    /// List a collection.
    Read,
    /// Create an instance.
    Create,
    /// Modify an instance.
    Update,
    /// Remove an instance.
    Delete,
}

impl Action {
    /// The HTTP method used for this action.
    pub fn method(&self) -> Method {
        match self {
            Action::Fetch | Action::Read => Method::GET,
            Action::Create | Action::Update => Method::POST,
            Action::Delete => Method::DELETE,
        }
    }

    /// Whether this action targets the collection rather than an instance.
    pub fn targets_list(&self) -> bool {
        matches!(self, Action::Read | Action::Create)
    }

    /// Whether parameters travel in a form body rather than the query string.
    pub fn sends_body(&self) -> bool {
        matches!(self, Action::Create | Action::Update)
    }

    /// Text used when the server rejects the call without a message.
    pub fn failure_phrase(&self) -> &'static str {
        match self {
            Action::Fetch => "Unable to fetch record",
            Action::Read => "Unable to read records",
            Action::Create => "Unable to create record",
            Action::Update => "Unable to update record",
            Action::Delete => "Unable to delete record",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Fetch => "fetch",
            Action::Read => "read",
            Action::Create => "creation",
            Action::Update => "update",
            Action::Delete => "delete",
        })
    }
}

/// Parameters for one operation on one resource.
pub trait Operation: Send + Sync {
    /// The resource this operation acts on.
    type Resource: Resource;

    /// An explicitly pinned account scope.
    ///
    /// Only account-scoped resources override this; when it returns `None`
    /// the client substitutes its default account.
    fn account_sid(&self) -> Option<&str> {
        None
    }

    /// Bindings for the route's path placeholders, excluding the account scope.
    fn path_params(&self) -> Vec<(&'static str, String)>;

    /// Query or body parameters, present fields only.
    fn params(&self) -> Params {
        Params::new()
    }
}

/// Options for retrieving a single instance.
pub trait FetchOptions: Operation {}

/// Options for creating an instance.
pub trait CreateOptions: Operation {}

/// Options for modifying an instance.
pub trait UpdateOptions: Operation {}

/// Options for removing an instance.
pub trait DeleteOptions: Operation {}

/// Options for listing a collection.
pub trait ReadOptions: Operation {
    /// Explicit page size override.
    fn page_size(&self) -> Option<u32>;

    /// Client-side cap on the total records yielded.
    fn limit(&self) -> Option<u64>;

    /// The page size actually requested from the server.
    fn effective_page_size(&self) -> u32 {
        match (self.page_size(), self.limit()) {
            (Some(size), _) => size,
            (None, Some(limit)) => limit.clamp(1, u64::from(MAX_PAGE_SIZE)) as u32,
            (None, None) => DEFAULT_PAGE_SIZE,
        }
    }
}

/// Builds the request for a non-read operation.
///
/// `account_sid` is the already resolved account scope; templates without an
/// `{AccountSid}` placeholder ignore it.
pub fn build_request<O: Operation>(action: Action, options: &O, account_sid: &str) -> Result<Request> {
    let route = <O::Resource as Resource>::ROUTE;
    let template = if action.targets_list() {
        route.list_path
    } else {
        route.instance_path
    };

    let builder = RequestBuilder::new(action.method(), route.domain, template)
        .path_param(ACCOUNT_SID, account_sid)
        .path_params(options.path_params());

    let builder = if action.sends_body() {
        builder.body_params(options.params())
    } else {
        builder.query_params(options.params())
    };

    builder.build()
}

/// Builds the first-page request for a read, appending `PageSize` last.
pub fn build_read_request<O: ReadOptions>(options: &O, account_sid: &str) -> Result<Request> {
    let mut request = build_request(Action::Read, options, account_sid)?;
    request
        .query_params
        .push("PageSize", options.effective_page_size());
    Ok(request)
}
