use std::sync::Arc;

use super::*;
use crate::config::AuthPaths;
use crate::nav::routes::RouteTable;
use crate::state::storage::MemoryStorage;

fn guard(token: Option<&str>) -> NavigationGuard {
    let storage = token.map_or_else(MemoryStorage::new, MemoryStorage::with_token);
    NavigationGuard::new(Arc::new(storage), RouteTable::auction(), AuthPaths::default())
}

#[test]
fn guard_redirect_sends_logged_out_user_to_login() {
    assert_eq!(guard_redirect(&guard(None), "/create"), Some("/login".to_owned()));
}

#[test]
fn guard_redirect_sends_logged_in_user_home_from_login() {
    assert_eq!(guard_redirect(&guard(Some("t1")), "/login"), Some("/".to_owned()));
}

#[test]
fn guard_redirect_allows_public_routes() {
    assert_eq!(guard_redirect(&guard(None), "/auction/4"), None);
    assert_eq!(guard_redirect(&guard(Some("t1")), "/my-auctions"), None);
}

#[test]
fn guard_redirect_never_targets_current_path() {
    let paths = AuthPaths { login: "/login".to_owned(), register: "/register".to_owned(), home: "/login".to_owned() };
    let guard = NavigationGuard::new(Arc::new(MemoryStorage::with_token("t1")), RouteTable::auction(), paths);
    assert_eq!(guard_redirect(&guard, "/login"), None);
}
