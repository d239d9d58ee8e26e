use super::*;

#[test]
fn normalize_path_strips_query_fragment_and_trailing_slash() {
    assert_eq!(normalize_path("/create?draft=1"), "/create");
    assert_eq!(normalize_path("/my-bids/#top"), "/my-bids");
    assert_eq!(normalize_path("/"), "/");
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("/?tab=ending"), "/");
}

#[test]
fn param_segments_match_any_single_segment() {
    let route = RouteDescriptor::public("AuctionDetail", "/auction/:id");
    assert!(route.matches("/auction/42"));
    assert!(route.matches("/auction/42/"));
    assert!(!route.matches("/auction"));
    assert!(!route.matches("/auction/42/bids"));
}

#[test]
fn root_only_matches_root() {
    let route = RouteDescriptor::public("Home", "/");
    assert!(route.matches("/"));
    assert!(!route.matches("/login"));
}

#[test]
fn auction_table_marks_protected_routes() {
    let table = RouteTable::auction();
    assert!(table.requires_auth("/create"));
    assert!(table.requires_auth("/my-auctions"));
    assert!(table.requires_auth("/my-bids?page=2"));
    assert!(!table.requires_auth("/"));
    assert!(!table.requires_auth("/login"));
    assert!(!table.requires_auth("/register"));
    assert!(!table.requires_auth("/auction/9"));
}

#[test]
fn unknown_paths_default_to_public() {
    let table = RouteTable::auction();
    assert!(table.find("/dashboard").is_none());
    assert!(!table.requires_auth("/dashboard"));
}

#[test]
fn first_matching_route_wins() {
    let table = RouteTable::new(vec![
        RouteDescriptor::public("Any", "/auction/:id"),
        RouteDescriptor::protected("Specific", "/auction/new"),
    ]);
    assert_eq!(table.find("/auction/new").map(|r| r.name.as_str()), Some("Any"));
    assert!(!table.requires_auth("/auction/new"));
}
