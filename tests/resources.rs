//! Materializing resources from bodies the API actually sends.

use callwire::rest::api::conference::Conference;
use callwire::rest::api::connect_app::ConnectApp;
use callwire::rest::api::token::Token;
use callwire::rest::chat::role::Role;
use callwire::rest::chat::user::User;
use callwire::rest::notify::binding::Binding;
use callwire::rest::sync::sync_list::SyncList;
use callwire::rest::sync::sync_map::SyncMap;
use callwire::rest::taskrouter::workspace::Workspace;
use callwire::{materialize, Page, RawResponse};
use http::StatusCode;

fn ok(body: &str) -> RawResponse {
    RawResponse::new(StatusCode::OK, body)
}

#[test]
fn test_null_collections_materialize_as_empty() {
    let binding: Binding = materialize(&ok(r#"{"sid":"BS1","tags":null,"links":null}"#)).unwrap();
    assert_eq!(binding.sid.as_deref(), Some("BS1"));
    assert!(binding.tags.is_empty());
    assert!(binding.links.is_empty());

    let conference: Conference =
        materialize(&ok(r#"{"sid":"CF1","subresource_uris":null}"#)).unwrap();
    assert!(conference.subresource_uris.is_empty());

    let workspace: Workspace = materialize(&ok(r#"{"sid":"WS1","links":null}"#)).unwrap();
    assert!(workspace.links.is_empty());

    let app: ConnectApp = materialize(&ok(r#"{"sid":"CN1","permissions":null}"#)).unwrap();
    assert!(app.permissions.is_empty());

    let token: Token = materialize(&ok(r#"{"username":"u1","ice_servers":null}"#)).unwrap();
    assert!(token.ice_servers.is_empty());

    let role: Role = materialize(&ok(r#"{"sid":"RL1","permissions":null}"#)).unwrap();
    assert!(role.permissions.is_empty());

    let user: User = materialize(&ok(r#"{"sid":"US1","links":null}"#)).unwrap();
    assert!(user.links.is_empty());

    let list: SyncList = materialize(&ok(r#"{"sid":"ES1","links":null}"#)).unwrap();
    assert!(list.links.is_empty());

    let map: SyncMap = materialize(&ok(r#"{"sid":"MP1","links":null}"#)).unwrap();
    assert!(map.links.is_empty());
}

#[test]
fn test_null_tags_do_not_fail_the_page() {
    let body = r#"{
        "bindings": [
            {"sid": "BS1", "tags": null, "links": null},
            {"sid": "BS2", "tags": ["vip"], "links": {"user": "https://notify.twilio.com/v1/x"}}
        ],
        "meta": {"page": 0, "page_size": 50, "next_page_url": null}
    }"#;

    let page: Page<Binding> = Page::from_response("bindings", &ok(body)).unwrap();
    assert_eq!(page.records.len(), 2);
    assert!(page.records[0].tags.is_empty());
    assert_eq!(page.records[1].tags, vec!["vip"]);
    assert_eq!(page.records[1].links.len(), 1);
}
