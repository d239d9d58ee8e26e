//! Route table consumed by the navigation guard.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// A navigation target and whether it needs a credential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub name: String,
    /// Path pattern; `:name` segments match any single non-empty segment.
    pub path: String,
    pub requires_auth: bool,
}

impl RouteDescriptor {
    pub fn public(name: &str, path: &str) -> Self {
        Self { name: name.to_owned(), path: path.to_owned(), requires_auth: false }
    }

    pub fn protected(name: &str, path: &str) -> Self {
        Self { name: name.to_owned(), path: path.to_owned(), requires_auth: true }
    }

    pub fn matches(&self, target: &str) -> bool {
        let mut pattern = segments(&self.path);
        let mut actual = segments(normalize_path(target));
        loop {
            match (pattern.next(), actual.next()) {
                (None, None) => return true,
                (Some(p), Some(a)) if p.starts_with(':') || p == a => {}
                _ => return false,
            }
        }
    }
}

/// Ordered route list; the first matching descriptor wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDescriptor>) -> Self {
        Self { routes }
    }

    /// The auction frontend's routes.
    pub fn auction() -> Self {
        Self::new(vec![
            RouteDescriptor::public("Home", "/"),
            RouteDescriptor::public("Login", "/login"),
            RouteDescriptor::public("Register", "/register"),
            RouteDescriptor::public("AuctionDetail", "/auction/:id"),
            RouteDescriptor::protected("CreateAuction", "/create"),
            RouteDescriptor::protected("MyAuctions", "/my-auctions"),
            RouteDescriptor::protected("MyBids", "/my-bids"),
        ])
    }

    pub fn find(&self, target: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.matches(target))
    }

    /// Unknown paths do not require authentication.
    pub fn requires_auth(&self, target: &str) -> bool {
        self.find(target).is_some_and(|route| route.requires_auth)
    }
}

/// Strip query string, fragment and trailing slash. The root stays `/`.
pub fn normalize_path(raw: &str) -> &str {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let path = raw[..end].trim_end_matches('/');
    if path.is_empty() { "/" } else { path }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
