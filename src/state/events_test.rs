use std::sync::{Arc, Mutex};

use super::*;

#[test]
fn emit_without_subscribers_is_noop() {
    let events = AuthEvents::new();
    events.emit(AuthEvent::Invalidated { status: 401 });
    assert_eq!(events.subscriber_count(), 0);
}

#[test]
fn subscribers_receive_events_in_subscription_order() {
    let events = AuthEvents::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let first = seen.clone();
    events.subscribe(move |e| first.lock().unwrap().push(("first", *e)));
    let second = seen.clone();
    events.subscribe(move |e| second.lock().unwrap().push(("second", *e)));

    events.emit(AuthEvent::Invalidated { status: 422 });

    let seen = seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![
            ("first", AuthEvent::Invalidated { status: 422 }),
            ("second", AuthEvent::Invalidated { status: 422 }),
        ]
    );
}

#[test]
fn clones_share_the_subscriber_list() {
    let events = AuthEvents::new();
    let clone = events.clone();
    let hits = Arc::new(Mutex::new(0));
    let hits_handler = hits.clone();
    clone.subscribe(move |_| *hits_handler.lock().unwrap() += 1);

    events.emit(AuthEvent::Invalidated { status: 401 });
    assert_eq!(*hits.lock().unwrap(), 1);
    assert_eq!(events.subscriber_count(), 1);
}

#[test]
fn handler_may_subscribe_during_delivery() {
    let events = AuthEvents::new();
    let inner = events.clone();
    events.subscribe(move |_| inner.subscribe(|_| {}));

    events.emit(AuthEvent::Invalidated { status: 401 });
    assert_eq!(events.subscriber_count(), 2);
}
