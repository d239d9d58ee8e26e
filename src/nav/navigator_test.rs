use super::*;

#[test]
fn signal_navigator_reports_recorded_location() {
    let nav = SignalNavigator::new("/");
    assert_eq!(nav.current_path(), "/");
    nav.set_current("/my-bids");
    assert_eq!(nav.current_path(), "/my-bids");
}

#[test]
fn push_queues_until_taken() {
    let nav = SignalNavigator::new("/create");
    assert_eq!(nav.take_pending(), None);

    nav.push("/login");
    assert_eq!(nav.pending().as_deref(), Some("/login"));
    assert_eq!(nav.take_pending().as_deref(), Some("/login"));
    assert_eq!(nav.take_pending(), None);
}

#[test]
fn later_push_replaces_earlier_one() {
    let nav = SignalNavigator::new("/");
    nav.push("/login");
    nav.push("/register");
    assert_eq!(nav.take_pending().as_deref(), Some("/register"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_path_defaults_to_root_outside_browser() {
    assert_eq!(browser_path(), "/");
}
