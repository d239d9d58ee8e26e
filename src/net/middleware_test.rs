use std::sync::{Arc, Mutex};

use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::http::HttpClient;
use crate::state::storage::MemoryStorage;
use crate::test_support::MockTransport;

fn rejected_status(status: u16) -> HttpError {
    HttpError::Status { status, body: json!({"msg": "Token has expired"}) }
}

fn recorded_events(events: &AuthEvents) -> Arc<Mutex<Vec<AuthEvent>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    events.subscribe(move |e| sink.lock().unwrap().push(*e));
    seen
}

// =============================================================
// BearerAuth
// =============================================================

#[test]
fn bearer_auth_attaches_persisted_token() {
    let stage = BearerAuth::new(Arc::new(MemoryStorage::with_token("t1")));
    let mut req = RequestContext::get("/auth/me");
    stage.on_request(&mut req);
    assert_eq!(req.header(AUTHORIZATION), Some("Bearer t1"));
}

#[test]
fn bearer_auth_leaves_request_unauthenticated_without_token() {
    let stage = BearerAuth::new(Arc::new(MemoryStorage::new()));
    let mut req = RequestContext::get("/auctions");
    stage.on_request(&mut req);
    assert!(req.headers.is_empty());
}

#[test]
fn bearer_auth_skips_empty_stored_token() {
    let stage = BearerAuth::new(Arc::new(MemoryStorage::with_token("")));
    let mut req = RequestContext::get("/auth/me");
    stage.on_request(&mut req);
    assert_eq!(req.header(AUTHORIZATION), None);
}

#[test]
fn bearer_auth_reads_latest_token() {
    let storage = Arc::new(MemoryStorage::with_token("old"));
    let stage = BearerAuth::new(storage.clone());
    storage.set("new");
    let mut req = RequestContext::get("/auth/me");
    stage.on_request(&mut req);
    assert_eq!(req.header(AUTHORIZATION), Some("Bearer new"));
}

// =============================================================
// AuthFailure, invoked directly with synthetic failures
// =============================================================

#[test]
fn auth_failure_clears_storage_and_emits_on_401_and_422() {
    for status in [401, 422] {
        let storage = Arc::new(MemoryStorage::with_token("t1"));
        let events = AuthEvents::new();
        let seen = recorded_events(&events);
        let stage = AuthFailure::new(storage.clone(), events, vec![401, 422]);

        stage.on_error(&RequestContext::get("/auctions/mine"), &rejected_status(status));

        assert_eq!(storage.get(), None, "status {status}");
        assert_eq!(*seen.lock().unwrap(), vec![AuthEvent::Invalidated { status }]);
    }
}

#[test]
fn auth_failure_ignores_other_failures() {
    let storage = Arc::new(MemoryStorage::with_token("t1"));
    let events = AuthEvents::new();
    let seen = recorded_events(&events);
    let stage = AuthFailure::new(storage.clone(), events, vec![401, 422]);
    let req = RequestContext::get("/auctions");

    stage.on_error(&req, &rejected_status(400));
    stage.on_error(&req, &rejected_status(500));
    stage.on_error(&req, &HttpError::Transport("offline".to_owned()));

    assert_eq!(storage.get().as_deref(), Some("t1"));
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn auth_failure_converges_when_already_logged_out() {
    let storage = Arc::new(MemoryStorage::new());
    let stage = AuthFailure::new(storage.clone(), AuthEvents::new(), vec![401, 422]);
    stage.on_error(&RequestContext::get("/auth/me"), &rejected_status(401));
    assert_eq!(storage.get(), None);
}

#[test]
fn pipeline_rejection_clears_storage_and_still_returns_error() {
    let storage: Arc<MemoryStorage> = Arc::new(MemoryStorage::with_token("t1"));
    let transport = MockTransport::new();
    transport.reply(401, json!({"msg": "Missing Authorization Header"}));
    let events = AuthEvents::new();
    let client = HttpClient::new(transport.clone())
        .with_stage(Arc::new(BearerAuth::new(storage.clone())))
        .with_stage(Arc::new(AuthFailure::new(storage.clone(), events, vec![401, 422])));

    let err = block_on(client.send(RequestContext::get("/bids/mine"))).unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(transport.sent()[0].header(AUTHORIZATION), Some("Bearer t1"));
    assert_eq!(storage.get(), None);
}
