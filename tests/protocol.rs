//! Protocol tests against an in-memory transport that records every request.

use callwire::rest::api::conference::{Conference, ConferenceStatus, ReadConferenceOptions};
use callwire::rest::api::participant::DeleteParticipantOptions;
use callwire::rest::api::token::CreateTokenOptions;
use callwire::rest::taskrouter::workspace::ReadWorkspaceOptions;
use callwire::{
    Client, Error, Page, RawResponse, Request, Target, Transport, TransportError,
    NO_CONTENT_MESSAGE,
};
use http::{Method, StatusCode};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

type Scripted = Result<RawResponse, TransportError>;

#[derive(Clone, Default)]
struct RecordingTransport {
    region: Option<String>,
    requests: Arc<Mutex<Vec<Request>>>,
    responses: Arc<Mutex<VecDeque<Scripted>>>,
}

impl RecordingTransport {
    fn new() -> Self {
        Self::default()
    }

    fn in_region(region: &str) -> Self {
        Self {
            region: Some(region.to_string()),
            ..Self::default()
        }
    }

    fn reply(&self, status: u16, body: serde_json::Value) -> &Self {
        let response = RawResponse::new(StatusCode::from_u16(status).unwrap(), body.to_string());
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    fn reply_raw(&self, status: u16, body: &str) -> &Self {
        let response = RawResponse::new(StatusCode::from_u16(status).unwrap(), body);
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    fn fail(&self) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError::new("connection refused")));
        self
    }

    fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for RecordingTransport {
    async fn execute(&self, request: Request) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no scripted response")))
    }

    fn account_sid(&self) -> &str {
        "ACdefault"
    }

    fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

fn conference_page(sids: &[&str], next_page_uri: Option<&str>) -> serde_json::Value {
    json!({
        "conferences": sids.iter().map(|sid| json!({"sid": sid})).collect::<Vec<_>>(),
        "page": 0,
        "page_size": sids.len(),
        "first_page_uri": "/2010-04-01/Accounts/ACdefault/Conferences.json?PageSize=2&Page=0",
        "next_page_uri": next_page_uri,
        "previous_page_uri": null,
        "uri": "/2010-04-01/Accounts/ACdefault/Conferences.json?PageSize=2&Page=0"
    })
}

#[tokio::test]
async fn test_next_page_is_a_bare_get_of_the_resolved_link() {
    let transport = RecordingTransport::in_region("au1");
    transport
        .reply(
            200,
            conference_page(
                &["CF1", "CF2"],
                Some("/2010-04-01/Accounts/ACdefault/Conferences.json?PageSize=2&Page=1&PageToken=PACF2"),
            ),
        )
        .reply(200, conference_page(&["CF3"], None));

    let client = Client::with_transport(transport.clone());
    let mut conferences = client
        .read(&ReadConferenceOptions::new().friendly_name("standup").page_size(2))
        .await
        .unwrap();

    let mut sids = Vec::new();
    while let Some(conference) = conferences.next().await.unwrap() {
        sids.push(conference.sid.unwrap());
    }
    assert_eq!(sids, vec!["CF1", "CF2", "CF3"]);

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[0].query_params.to_form(),
        "FriendlyName=standup&PageSize=2"
    );
    assert_eq!(requests[1].method, Method::GET);
    assert_eq!(
        requests[1].target,
        Target::Absolute(
            "https://api.au1.twilio.com/2010-04-01/Accounts/ACdefault/Conferences.json?PageSize=2&Page=1&PageToken=PACF2"
                .to_string()
        )
    );
    assert!(requests[1].query_params.is_empty());
    assert!(requests[1].body_params.is_empty());
}

#[tokio::test]
async fn test_advance_after_exhaustion_is_a_no_op() {
    let transport = RecordingTransport::new();
    transport.reply(200, conference_page(&["CF1"], None));

    let client = Client::with_transport(transport.clone());
    let mut conferences = client.read(&ReadConferenceOptions::new()).await.unwrap();

    assert!(!conferences.advance().await.unwrap());
    assert!(conferences.next().await.unwrap().is_some());
    assert!(conferences.next().await.unwrap().is_none());
    assert!(!conferences.advance().await.unwrap());
    assert!(conferences.next().await.unwrap().is_none());

    assert_eq!(transport.requests().len(), 1);
    assert_eq!(conferences.yielded(), 1);
    assert_eq!(conferences.pages_fetched(), 1);
}

#[tokio::test]
async fn test_limit_spanning_pages_fetches_only_what_it_needs() {
    let next = Some("/2010-04-01/Accounts/ACdefault/Conferences.json?Page=1");

    let transport = RecordingTransport::new();
    transport
        .reply(200, conference_page(&["CF1", "CF2"], next))
        .reply(200, conference_page(&["CF3", "CF4"], next));

    let client = Client::with_transport(transport.clone());
    let conferences = client
        .read(&ReadConferenceOptions::new().page_size(2).limit(3))
        .await
        .unwrap()
        .collect_all()
        .await
        .unwrap();

    assert_eq!(conferences.len(), 3);
    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn test_default_page_size_follows_limit() {
    let transport = RecordingTransport::new();
    transport.reply(200, json!({"workspaces": [], "meta": {}}));
    transport.reply(200, json!({"workspaces": [], "meta": {}}));

    let client = Client::with_transport(transport.clone());
    client.read(&ReadWorkspaceOptions::new()).await.unwrap();
    client.read(&ReadWorkspaceOptions::new().limit(5000)).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].query_params.get("PageSize"), Some("50"));
    assert_eq!(requests[1].query_params.get("PageSize"), Some("1000"));
}

#[tokio::test]
async fn test_account_scope_is_resolved_per_call() {
    let transport = RecordingTransport::new();
    transport
        .reply(201, json!({"username": "u1"}))
        .reply(201, json!({"username": "u2"}));

    let client = Client::with_transport(transport.clone());
    client.create(&CreateTokenOptions::new().ttl(60)).await.unwrap();
    client
        .create(&CreateTokenOptions::new().account_sid("ACpinned"))
        .await
        .unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].location(), "/2010-04-01/Accounts/ACdefault/Tokens.json");
    assert_eq!(requests[0].body_params.to_form(), "Ttl=60");
    assert_eq!(requests[1].location(), "/2010-04-01/Accounts/ACpinned/Tokens.json");
    assert!(requests[1].body_params.is_empty());
    assert_eq!(requests[1].method, Method::POST);
}

#[tokio::test]
async fn test_transport_failure_is_a_connection_error() {
    let transport = RecordingTransport::new();
    transport.fail();

    let client = Client::with_transport(transport);
    let err = client
        .delete(&DeleteParticipantOptions::new("CF1", "CA1"))
        .await
        .unwrap_err();

    match &err {
        Error::Connection { resource, .. } => assert_eq!(*resource, "Participant"),
        other => panic!("Expected Connection error, got {:?}", other),
    }
    assert_eq!(
        err.to_string(),
        "Participant delete failed: Unable to connect to server"
    );
}

#[tokio::test]
async fn test_malformed_error_body_falls_back() {
    let transport = RecordingTransport::new();
    transport.reply_raw(400, "<html>Bad Request</html>");

    let client = Client::with_transport(transport);
    let err = client
        .create(&CreateTokenOptions::new())
        .await
        .unwrap_err();

    match err {
        Error::Api { status, code, message, .. } => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(code, None);
            assert_eq!(message, NO_CONTENT_MESSAGE);
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_failed_page_fetch_surfaces_error() {
    let transport = RecordingTransport::new();
    transport
        .reply(200, conference_page(&["CF1"], Some("/2010-04-01/Accounts/ACdefault/Conferences.json?Page=1")))
        .reply(503, json!({"code": 20503, "message": "Service unavailable"}));

    let client = Client::with_transport(transport);
    let mut conferences = client.read(&ReadConferenceOptions::new()).await.unwrap();

    assert!(conferences.next().await.unwrap().is_some());
    let err = conferences.next().await.unwrap_err();
    assert_eq!(err.code(), Some(20503));
}

#[tokio::test]
async fn test_single_page_navigation() {
    let transport = RecordingTransport::new();
    transport.reply(
        200,
        conference_page(&["CF3"], None),
    );

    let client = Client::with_transport(transport.clone());
    let first: Page<Conference> = Page::from_response(
        "conferences",
        &RawResponse::new(
            StatusCode::OK,
            conference_page(&["CF1", "CF2"], Some("/2010-04-01/Accounts/ACdefault/Conferences.json?Page=1"))
                .to_string(),
        ),
    )
    .unwrap();

    let second = client.next_page(&first).await.unwrap().unwrap();
    assert_eq!(second.records[0].sid.as_deref(), Some("CF3"));
    assert!(client.next_page(&second).await.unwrap().is_none());
    assert!(client.previous_page(&second).await.unwrap().is_none());

    assert_eq!(
        transport.requests()[0].location(),
        "https://api.twilio.com/2010-04-01/Accounts/ACdefault/Conferences.json?Page=1"
    );
}

#[tokio::test]
async fn test_unknown_filter_value_fails_before_sending() {
    let transport = RecordingTransport::new();
    let client = Client::with_transport(transport.clone());

    let result = client
        .read(&ReadConferenceOptions::new().status(ConferenceStatus::Unknown))
        .await;

    assert!(matches!(result, Err(Error::InvalidRequest(_))));
    assert!(transport.requests().is_empty());
}
