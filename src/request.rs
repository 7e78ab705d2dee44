//! Request construction.
//!
//! A [`Request`] is plain data: a method, a target, and ordered query and
//! body parameters. [`RequestBuilder`] produces one from a path template and
//! parameter bindings without touching the network, so identical inputs
//! always produce identical requests.

use crate::{Domain, Error, Result};
use chrono::{DateTime, NaiveDate, Utc};
use http::Method;
use url::Url;

/// Conversion of a field value into its wire representation.
pub trait ParamValue {
    /// Renders the value as it should appear in a query string or form body.
    fn to_param(&self) -> String;

    /// Returns `false` for values that have no wire form, such as an enum
    /// variant the crate only uses for unrecognized server values.
    fn is_known(&self) -> bool {
        true
    }
}

impl ParamValue for str {
    fn to_param(&self) -> String {
        self.to_string()
    }
}

impl ParamValue for String {
    fn to_param(&self) -> String {
        self.clone()
    }
}

impl ParamValue for bool {
    fn to_param(&self) -> String {
        let value = if *self { "true" } else { "false" };
        value.to_string()
    }
}

macro_rules! integer_param {
    ($($ty:ty),*) => {
        $(
            impl ParamValue for $ty {
                fn to_param(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

integer_param!(i32, i64, u32, u64);

impl ParamValue for Url {
    fn to_param(&self) -> String {
        self.as_str().to_string()
    }
}

impl ParamValue for Method {
    fn to_param(&self) -> String {
        self.as_str().to_string()
    }
}

impl ParamValue for DateTime<Utc> {
    fn to_param(&self) -> String {
        self.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl ParamValue for NaiveDate {
    fn to_param(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }
}

impl<T: ParamValue + ?Sized> ParamValue for &T {
    fn to_param(&self) -> String {
        (**self).to_param()
    }

    fn is_known(&self) -> bool {
        (**self).is_known()
    }
}

/// An ordered list of key/value pairs.
///
/// Repeated keys are allowed and keep their insertion order, which is how
/// list-valued fields are sent. A value with no wire form is not stored;
/// its key is remembered so that building the request fails instead.
///
/// # Examples
///
/// ```
/// use callwire::Params;
///
/// let mut params = Params::new();
/// params.push_opt("FriendlyName", Some("Foo"));
/// params.push_opt::<bool>("Muted", None);
/// params.push_opt("Hold", Some(false));
/// params.push_each("Tag", &["a", "b"]);
///
/// assert_eq!(
///     params.pairs(),
///     &[
///         ("FriendlyName".to_string(), "Foo".to_string()),
///         ("Hold".to_string(), "false".to_string()),
///         ("Tag".to_string(), "a".to_string()),
///         ("Tag".to_string(), "b".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
    unknown: Vec<String>,
}

impl Params {
    /// Creates an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pair unconditionally.
    pub fn push(&mut self, key: &str, value: impl ParamValue) {
        if value.is_known() {
            self.pairs.push((key.to_string(), value.to_param()));
        } else {
            self.unknown.push(key.to_string());
        }
    }

    /// Appends a pair only when the value is present.
    pub fn push_opt<V: ParamValue>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Appends one pair per element, all under the same key.
    pub fn push_each<V: ParamValue>(&mut self, key: &str, values: &[V]) {
        for value in values {
            self.push(key, value);
        }
    }

    /// Appends every pair from `other`, keeping its order.
    pub fn extend(&mut self, other: Params) {
        self.pairs.extend(other.pairs);
        self.unknown.extend(other.unknown);
    }

    /// Returns the first value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns every value stored under `key`, in order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Returns `true` if any pair uses `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Keys whose values were rejected because they have no wire form.
    pub fn unknown_keys(&self) -> &[String] {
        &self.unknown
    }

    /// The pairs in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Iterates over the pairs as string slices.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encodes the pairs as `application/x-www-form-urlencoded`.
    pub fn to_form(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

/// Where a request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A path on a product domain; the transport supplies scheme, host and region.
    Endpoint {
        /// The product serving the path.
        domain: Domain,
        /// The fully substituted path.
        path: String,
    },
    /// An absolute URL handed back by the server, such as a next page link.
    Absolute(String),
}

impl Target {
    /// Resolves the target into a URL.
    ///
    /// `base_override` replaces the product host, which is how a client is
    /// pointed at a proxy or a local mock server. A path on the override is
    /// kept as a prefix of the endpoint path.
    pub fn resolve(
        &self,
        region: Option<&str>,
        base_override: Option<&Url>,
    ) -> std::result::Result<Url, url::ParseError> {
        match self {
            Target::Absolute(url) => Url::parse(url),
            Target::Endpoint { domain, path } => match base_override {
                Some(base) => {
                    let mut url = base.clone();
                    let prefix = base.path().trim_end_matches('/');
                    url.set_path(&format!("{}{}", prefix, path));
                    Ok(url)
                }
                None => Url::parse(&domain.url_for(region, path)),
            },
        }
    }
}

/// A fully built request, ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method.
    pub method: Method,
    /// Where the request goes.
    pub target: Target,
    /// Query string pairs.
    pub query_params: Params,
    /// Form body pairs.
    pub body_params: Params,
}

impl Request {
    /// A `GET` of an absolute URL with no added parameters.
    pub fn get_url(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            target: Target::Absolute(url.into()),
            query_params: Params::new(),
            body_params: Params::new(),
        }
    }

    /// The substituted path, or the absolute URL for page requests.
    pub fn location(&self) -> &str {
        match &self.target {
            Target::Endpoint { path, .. } => path,
            Target::Absolute(url) => url,
        }
    }
}

/// Builds a [`Request`] from a path template and parameter bindings.
///
/// Templates name their parameters in braces, e.g.
/// `/v1/Services/{ServiceSid}/Bindings/{Sid}`.
///
/// # Examples
///
/// ```
/// use callwire::{Domain, RequestBuilder, Target};
/// use http::Method;
///
/// let request = RequestBuilder::new(Method::GET, Domain::Notify, "/v1/Services/{ServiceSid}/Bindings/{Sid}")
///     .path_param("ServiceSid", "IS123")
///     .path_param("Sid", "BS456")
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     request.target,
///     Target::Endpoint { domain: Domain::Notify, path: "/v1/Services/IS123/Bindings/BS456".to_string() }
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    domain: Domain,
    template: &'static str,
    path_params: Vec<(&'static str, String)>,
    query_params: Params,
    body_params: Params,
}

impl RequestBuilder {
    /// Starts a request for `template` on `domain`.
    pub fn new(method: Method, domain: Domain, template: &'static str) -> Self {
        Self {
            method,
            domain,
            template,
            path_params: Vec::new(),
            query_params: Params::new(),
            body_params: Params::new(),
        }
    }

    /// Binds a path placeholder.
    pub fn path_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_params.push((name, value.into()));
        self
    }

    /// Binds several path placeholders.
    pub fn path_params(mut self, params: impl IntoIterator<Item = (&'static str, String)>) -> Self {
        self.path_params.extend(params);
        self
    }

    /// Appends query string pairs.
    pub fn query_params(mut self, params: Params) -> Self {
        self.query_params.extend(params);
        self
    }

    /// Appends form body pairs.
    pub fn body_params(mut self, params: Params) -> Self {
        self.body_params.extend(params);
        self
    }

    /// Substitutes the path and produces the request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if the template names a placeholder
    /// that was never bound, if a brace is left unclosed, or if a parameter
    /// holds a value with no wire form.
    pub fn build(self) -> Result<Request> {
        let path = substitute(self.template, &self.path_params)?;
        let unknown = self
            .query_params
            .unknown_keys()
            .iter()
            .chain(self.body_params.unknown_keys())
            .next();
        if let Some(key) = unknown {
            return Err(Error::InvalidRequest(format!(
                "parameter `{}` holds a value with no wire form",
                key
            )));
        }
        Ok(Request {
            method: self.method,
            target: Target::Endpoint {
                domain: self.domain,
                path,
            },
            query_params: self.query_params,
            body_params: self.body_params,
        })
    }
}

fn substitute(template: &str, params: &[(&'static str, String)]) -> Result<String> {
    let mut path = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        path.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(|| {
            Error::InvalidRequest(format!("unclosed placeholder in path `{}`", template))
        })?;
        let name = &after[..close];
        let value = params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
            .ok_or_else(|| Error::InvalidRequest(format!("missing path parameter `{}`", name)))?;
        path.push_str(value);
        rest = &after[close + 1..];
    }

    path.push_str(rest);
    Ok(path)
}
