//! One server-delivered batch of list results.

use crate::response::{deserialization_error, RawResponse};
use crate::{Domain, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Pagination metadata attached to a [`Page`].
///
/// Links are kept as the server sent them: the v1 products return absolute
/// URLs, the 2010 API returns host-relative URIs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    /// The list key the server reported, when it reports one.
    pub key: Option<String>,
    /// Zero-based page number.
    #[serde(rename = "page")]
    pub page_number: u32,
    /// Number of records the server was asked to put on a page.
    pub page_size: u32,
    /// Link to the first page.
    #[serde(alias = "first_page_uri")]
    pub first_page_url: Option<String>,
    /// Link to the previous page.
    #[serde(alias = "previous_page_uri")]
    pub previous_page_url: Option<String>,
    /// Link to the next page; absent on the last page.
    #[serde(alias = "next_page_uri")]
    pub next_page_url: Option<String>,
    /// Link to this page.
    #[serde(alias = "uri")]
    pub url: Option<String>,
}

/// A batch of records plus its pagination metadata.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Records in server order.
    pub records: Vec<T>,
    /// Pagination metadata.
    pub meta: PageMeta,
}

impl<T: DeserializeOwned> Page<T> {
    /// Parses a list response whose records sit under `list_key`.
    ///
    /// Accepts both layouts the API uses: metadata in a `meta` object, or
    /// metadata as top-level `*_uri` fields next to the records.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Deserialization`](crate::Error::Deserialization) if
    /// the body is not JSON, lacks the `list_key` array, or any record fails
    /// to deserialize.
    ///
    /// # Examples
    ///
    /// ```
    /// use callwire::{Page, RawResponse};
    /// use http::StatusCode;
    ///
    /// let body = r#"{
    ///     "workspaces": [{"sid": "WS1"}, {"sid": "WS2"}],
    ///     "meta": {"page": 0, "page_size": 2, "next_page_url": "https://taskrouter.twilio.com/v1/Workspaces?Page=1"}
    /// }"#;
    /// let page: Page<serde_json::Value> =
    ///     Page::from_response("workspaces", &RawResponse::new(StatusCode::OK, body)).unwrap();
    ///
    /// assert_eq!(page.records.len(), 2);
    /// assert!(page.has_next_page());
    /// ```
    pub fn from_response(list_key: &str, response: &RawResponse) -> Result<Self> {
        let root: Map<String, Value> = serde_json::from_str(&response.body)
            .map_err(|e| deserialization_error(response, e))?;

        let records = match root.get(list_key) {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| T::deserialize(item))
                .collect::<std::result::Result<Vec<T>, _>>()
                .map_err(|e| deserialization_error(response, e))?,
            _ => {
                let missing = <serde_json::Error as serde::de::Error>::custom(format!(
                    "missing list key `{}`",
                    list_key
                ));
                return Err(deserialization_error(response, missing));
            }
        };

        let meta = match root.get("meta") {
            Some(meta) => PageMeta::deserialize(meta),
            None => PageMeta::deserialize(&Value::Object(root.clone())),
        }
        .map_err(|e| deserialization_error(response, e))?;

        Ok(Page { records, meta })
    }
}

impl PageMeta {
    /// Absolute URL of the next page, if any.
    ///
    /// Relative links are resolved against `domain` in `region`.
    pub fn next_page_url(&self, domain: Domain, region: Option<&str>) -> Option<String> {
        absolute(self.next_page_url.as_deref()?, domain, region)
    }

    /// Absolute URL of the previous page, if any.
    pub fn previous_page_url(&self, domain: Domain, region: Option<&str>) -> Option<String> {
        absolute(self.previous_page_url.as_deref()?, domain, region)
    }

    /// Absolute URL of the first page, if any.
    pub fn first_page_url(&self, domain: Domain, region: Option<&str>) -> Option<String> {
        absolute(self.first_page_url.as_deref()?, domain, region)
    }
}

impl<T> Page<T> {
    /// Returns `true` if the server linked a further page.
    pub fn has_next_page(&self) -> bool {
        self.meta.next_page_url.is_some()
    }

    /// Absolute URL of the next page, if any.
    pub fn next_page_url(&self, domain: Domain, region: Option<&str>) -> Option<String> {
        self.meta.next_page_url(domain, region)
    }

    /// Absolute URL of the previous page, if any.
    pub fn previous_page_url(&self, domain: Domain, region: Option<&str>) -> Option<String> {
        self.meta.previous_page_url(domain, region)
    }

    /// Absolute URL of the first page, if any.
    pub fn first_page_url(&self, domain: Domain, region: Option<&str>) -> Option<String> {
        self.meta.first_page_url(domain, region)
    }

    /// Number of records on this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if this page holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn absolute(link: &str, domain: Domain, region: Option<&str>) -> Option<String> {
    if link.is_empty() {
        return None;
    }
    if link.starts_with('/') {
        Some(domain.url_for(region, link))
    } else {
        Some(link.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use http::StatusCode;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        sid: String,
    }

    fn ok(body: &str) -> RawResponse {
        RawResponse::new(StatusCode::OK, body)
    }

    #[test]
    fn parses_meta_layout_in_order() {
        let body = r#"{
            "bindings": [{"sid": "BS3"}, {"sid": "BS1"}, {"sid": "BS2"}],
            "meta": {
                "page": 1,
                "page_size": 3,
                "first_page_url": "https://notify.twilio.com/v1/Services/IS1/Bindings?PageSize=3&Page=0",
                "previous_page_url": "https://notify.twilio.com/v1/Services/IS1/Bindings?PageSize=3&Page=0",
                "next_page_url": null,
                "url": "https://notify.twilio.com/v1/Services/IS1/Bindings?PageSize=3&Page=1",
                "key": "bindings"
            }
        }"#;
        let page: Page<Item> = Page::from_response("bindings", &ok(body)).unwrap();

        let sids: Vec<_> = page.records.iter().map(|r| r.sid.as_str()).collect();
        assert_eq!(sids, vec!["BS3", "BS1", "BS2"]);
        assert_eq!(page.meta.page_number, 1);
        assert_eq!(page.meta.page_size, 3);
        assert_eq!(page.meta.key.as_deref(), Some("bindings"));
        assert!(!page.has_next_page());
        assert_eq!(page.next_page_url(Domain::Notify, None), None);
        assert!(page.previous_page_url(Domain::Notify, None).is_some());
    }

    #[test]
    fn parses_legacy_layout_with_relative_links() {
        let body = r#"{
            "conferences": [{"sid": "CF1"}],
            "page": 0,
            "page_size": 1,
            "first_page_uri": "/2010-04-01/Accounts/AC1/Conferences.json?PageSize=1&Page=0",
            "next_page_uri": "/2010-04-01/Accounts/AC1/Conferences.json?PageSize=1&Page=1&PageToken=PACF1",
            "previous_page_uri": null,
            "uri": "/2010-04-01/Accounts/AC1/Conferences.json?PageSize=1&Page=0"
        }"#;
        let page: Page<Item> = Page::from_response("conferences", &ok(body)).unwrap();

        assert!(page.has_next_page());
        assert_eq!(
            page.next_page_url(Domain::Api, Some("au1")).as_deref(),
            Some("https://api.au1.twilio.com/2010-04-01/Accounts/AC1/Conferences.json?PageSize=1&Page=1&PageToken=PACF1")
        );
        assert_eq!(
            page.first_page_url(Domain::Api, None).as_deref(),
            Some("https://api.twilio.com/2010-04-01/Accounts/AC1/Conferences.json?PageSize=1&Page=0")
        );
        assert_eq!(page.previous_page_url(Domain::Api, None), None);
    }

    #[test]
    fn missing_list_key_is_a_deserialization_error() {
        let result = Page::<Item>::from_response("workers", &ok(r#"{"meta": {}}"#));
        match result {
            Err(Error::Deserialization { serde_error, .. }) => {
                assert!(serde_error.contains("workers"));
            }
            other => panic!("Expected Deserialization error, got {:?}", other),
        }
    }

    #[test]
    fn bad_record_is_a_deserialization_error() {
        let result = Page::<Item>::from_response("items", &ok(r#"{"items": [{"sid": 4}]}"#));
        assert!(matches!(result, Err(Error::Deserialization { .. })));
    }

    #[test]
    fn empty_page_is_valid() {
        let page: Page<Item> =
            Page::from_response("items", &ok(r#"{"items": [], "meta": {"page_size": 50}}"#)).unwrap();
        assert!(page.is_empty());
        assert!(!page.has_next_page());
    }
}
