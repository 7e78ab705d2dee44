//! Integration tests using wiremock to simulate the REST API.

use callwire::rest::api::conference::{ConferenceStatus, FetchConferenceOptions};
use callwire::rest::api::participant::{CreateParticipantOptions, UpdateParticipantOptions};
use callwire::rest::notify::binding::{BindingType, ReadBindingOptions};
use callwire::rest::taskrouter::workspace::ReadWorkspaceOptions;
use callwire::rest::trunking::ip_access_control_list::DeleteIpAccessControlListOptions;
use callwire::retry::{OrPredicate, RetryOnServerError, RetryOnTooManyRequests};
use callwire::{Client, ClientBuilder, Error, RetryStrategy, NO_CONTENT_MESSAGE};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{basic_auth, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCOUNT: &str = "ACtest";

fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .account_sid(ACCOUNT)
        .auth_token("secret")
        .base_url(server.uri())
        .unwrap()
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_fetch_materializes_resource() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/ACtest/Conferences/CF1.json"))
        .and(basic_auth(ACCOUNT, "secret"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sid": "CF1",
            "account_sid": "ACtest",
            "friendly_name": "standup",
            "status": "in-progress",
            "date_created": "Mon, 15 Aug 2016 10:00:00 +0000",
            "unexpected_field": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let conference = client.fetch(&FetchConferenceOptions::new("CF1")).await.unwrap();

    assert_eq!(conference.sid.as_deref(), Some("CF1"));
    assert_eq!(conference.friendly_name.as_deref(), Some("standup"));
    assert_eq!(conference.status, Some(ConferenceStatus::InProgress));
    assert!(conference.date_created.is_some());
}

#[tokio::test]
async fn test_explicit_account_overrides_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/ACother/Conferences/CF1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sid": "CF1"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let options = FetchConferenceOptions::new("CF1").account_sid("ACother");
    let conference = client.fetch(&options).await.unwrap();

    assert_eq!(conference.sid.as_deref(), Some("CF1"));
}

#[tokio::test]
async fn test_base_url_path_prefixes_endpoints() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/twilio/2010-04-01/Accounts/ACtest/Conferences/CF1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sid": "CF1"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .account_sid(ACCOUNT)
        .auth_token("secret")
        .base_url(format!("{}/twilio", mock_server.uri()))
        .unwrap()
        .build()
        .unwrap();
    let conference = client.fetch(&FetchConferenceOptions::new("CF1")).await.unwrap();

    assert_eq!(conference.sid.as_deref(), Some("CF1"));
}

#[tokio::test]
async fn test_create_sends_form_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2010-04-01/Accounts/ACtest/Conferences/CF1/Participants.json"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(
            "From=%2B15005550006&To=%2B15005550001&StatusCallbackEvent=ringing&StatusCallbackEvent=answered&Muted=false",
        ))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "call_sid": "CA1",
            "conference_sid": "CF1",
            "muted": false,
            "status": "queued"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let options = CreateParticipantOptions::new("CF1", "+15005550006", "+15005550001")
        .status_callback_event("ringing")
        .status_callback_event("answered")
        .muted(false);
    let participant = client.create(&options).await.unwrap();

    assert_eq!(participant.call_sid.as_deref(), Some("CA1"));
    assert_eq!(participant.muted, Some(false));
}

#[tokio::test]
async fn test_update_omits_absent_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2010-04-01/Accounts/ACtest/Conferences/CF1/Participants/CA1.json"))
        .and(body_string("Hold=true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"call_sid": "CA1", "hold": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let participant = client
        .update(&UpdateParticipantOptions::new("CF1", "CA1").hold(true))
        .await
        .unwrap();

    assert_eq!(participant.hold, Some(true));
}

#[tokio::test]
async fn test_read_follows_next_page_links() {
    let mock_server = MockServer::start().await;
    let next_page = format!("{}/v1/Workspaces?PageSize=2&Page=1&PageToken=PT1", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/Workspaces"))
        .and(query_param("FriendlyName", "Support"))
        .and(query_param("PageSize", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "workspaces": [{"sid": "WS1"}, {"sid": "WS2"}],
            "meta": {"page": 0, "page_size": 2, "next_page_url": next_page, "key": "workspaces"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/Workspaces"))
        .and(query_param("PageToken", "PT1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "workspaces": [{"sid": "WS3"}],
            "meta": {"page": 1, "page_size": 2, "next_page_url": null, "key": "workspaces"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let workspaces = client
        .read(&ReadWorkspaceOptions::new().friendly_name("Support").page_size(2))
        .await
        .unwrap()
        .collect_all()
        .await
        .unwrap();

    let sids: Vec<_> = workspaces.iter().filter_map(|w| w.sid.as_deref()).collect();
    assert_eq!(sids, vec!["WS1", "WS2", "WS3"]);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].url.as_str(), next_page);
}

#[tokio::test]
async fn test_limit_stops_before_next_page() {
    let mock_server = MockServer::start().await;
    let next_page = format!("{}/v1/Services/IS1/Bindings?PageSize=2&Page=1", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/Services/IS1/Bindings"))
        .and(query_param("Tag", "vip"))
        .and(query_param("PageSize", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bindings": [
                {"sid": "BS1", "binding_type": "sms", "tags": ["vip"]},
                {"sid": "BS2", "binding_type": "apn", "tags": ["vip"]}
            ],
            "meta": {"page": 0, "page_size": 2, "next_page_url": next_page}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(query_param("Page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"bindings": [], "meta": {}})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut bindings = client
        .read(&ReadBindingOptions::new("IS1").tag("vip").limit(2))
        .await
        .unwrap();

    let first = bindings.next().await.unwrap().unwrap();
    let second = bindings.next().await.unwrap().unwrap();
    assert_eq!(first.binding_type, Some(BindingType::Sms));
    assert_eq!(second.sid.as_deref(), Some("BS2"));
    assert!(bindings.next().await.unwrap().is_none());
    assert!(!bindings.advance().await.unwrap());
    assert_eq!(bindings.pages_fetched(), 1);
}

#[tokio::test]
async fn test_error_without_body_falls_back() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("{}"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.fetch(&FetchConferenceOptions::new("CF1")).await;

    match result {
        Err(Error::Api { status, code, message, .. }) => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(code, None);
            assert_eq!(message, NO_CONTENT_MESSAGE);
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_structured_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": 20404,
            "message": "The requested resource was not found",
            "more_info": "https://www.twilio.com/docs/errors/20404",
            "status": 404
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .fetch(&FetchConferenceOptions::new("CFmissing"))
        .await
        .unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
    assert_eq!(err.code(), Some(20404));
    match err {
        Error::Api { message, more_info, .. } => {
            assert_eq!(message, "The requested resource was not found");
            assert_eq!(more_info.as_deref(), Some("https://www.twilio.com/docs/errors/20404"));
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_deserialization_error_keeps_raw_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .fetch(&FetchConferenceOptions::new("CF1"))
        .await
        .unwrap_err();

    assert_eq!(err.raw_response(), Some("not json"));
    assert!(matches!(err, Error::Deserialization { .. }));
}

#[tokio::test]
async fn test_connection_failure() {
    let client = ClientBuilder::new()
        .account_sid(ACCOUNT)
        .auth_token("secret")
        .base_url("http://127.0.0.1:1")
        .unwrap()
        .build()
        .unwrap();

    let err = client
        .fetch(&FetchConferenceOptions::new("CF1"))
        .await
        .unwrap_err();

    assert!(err.is_connection());
    assert_eq!(
        err.to_string(),
        "Conference fetch failed: Unable to connect to server"
    );
}

#[tokio::test]
async fn test_delete_reports_no_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/Trunks/TK1/IpAccessControlLists/AL1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/Trunks/TK1/IpAccessControlLists/AL2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let deleted = client
        .delete(&DeleteIpAccessControlListOptions::new("TK1", "AL1"))
        .await
        .unwrap();
    assert!(deleted);

    let accepted = client
        .delete(&DeleteIpAccessControlListOptions::new("TK1", "AL2"))
        .await
        .unwrap();
    assert!(!accepted);
}

#[tokio::test]
async fn test_retry_on_too_many_requests_honors_retry_after() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sid": "CF1"})))
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .account_sid(ACCOUNT)
        .auth_token("secret")
        .base_url(mock_server.uri())
        .unwrap()
        .retry_strategy(RetryStrategy::Linear {
            delay: Duration::from_secs(30),
            max_retries: 2,
        })
        .retry_predicate(Box::new(RetryOnTooManyRequests))
        .build()
        .unwrap();

    let conference = client.fetch(&FetchConferenceOptions::new("CF1")).await.unwrap();

    assert_eq!(conference.sid.as_deref(), Some("CF1"));
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_retries_exhausted_surface_last_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string(""))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .account_sid(ACCOUNT)
        .auth_token("secret")
        .base_url(mock_server.uri())
        .unwrap()
        .retry_strategy(RetryStrategy::Linear {
            delay: Duration::from_millis(10),
            max_retries: 2,
        })
        .retry_predicate(Box::new(OrPredicate::new(vec![
            Box::new(RetryOnServerError),
            Box::new(RetryOnTooManyRequests),
        ])))
        .build()
        .unwrap();

    let err = client
        .fetch(&FetchConferenceOptions::new("CF1"))
        .await
        .unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(503));
    assert_eq!(err.to_string(), format!("API error 503 Service Unavailable: {}", NO_CONTENT_MESSAGE));
}

#[tokio::test]
async fn test_default_headers_and_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("X-Request-Source", "billing-sync"))
        .and(header("user-agent", concat!("callwire/", env!("CARGO_PKG_VERSION"))))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sid": "CF1"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .account_sid(ACCOUNT)
        .auth_token("secret")
        .base_url(mock_server.uri())
        .unwrap()
        .default_header("X-Request-Source", "billing-sync")
        .unwrap()
        .build()
        .unwrap();

    client.fetch(&FetchConferenceOptions::new("CF1")).await.unwrap();
}

#[test]
fn test_blocking_client_reads_all_pages() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mock_server = runtime.block_on(async {
        let server = MockServer::start().await;
        let next_page = format!("{}/v1/Workspaces?PageSize=1&Page=1", server.uri());

        Mock::given(method("GET"))
            .and(query_param("PageSize", "1"))
            .and(query_param("FriendlyName", "Ops"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "workspaces": [{"sid": "WS1"}],
                "meta": {"page": 0, "page_size": 1, "next_page_url": next_page}
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(query_param("Page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "workspaces": [{"sid": "WS2"}],
                "meta": {"page": 1, "page_size": 1, "next_page_url": null}
            })))
            .mount(&server)
            .await;

        server
    });

    let client = ClientBuilder::new()
        .account_sid(ACCOUNT)
        .auth_token("secret")
        .base_url(mock_server.uri())
        .unwrap()
        .build_blocking()
        .unwrap();

    let sids: Vec<String> = client
        .read(&ReadWorkspaceOptions::new().friendly_name("Ops").page_size(1))
        .unwrap()
        .map(|workspace| workspace.unwrap().sid.unwrap_or_default())
        .collect();

    assert_eq!(sids, vec!["WS1", "WS2"]);
    drop(client);
    runtime.block_on(async move { drop(mock_server) });
}
