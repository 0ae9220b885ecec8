//! Route table shared by the router, header links, and the SSR server.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Top-level pages reachable by URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Login,
}

impl AppRoute {
    pub const ALL: [AppRoute; 2] = [AppRoute::Home, AppRoute::Login];

    /// Absolute URL path for links.
    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::Login => "/login",
        }
    }

    /// Path segment as the router matches it (no leading slash).
    pub fn segment(self) -> &'static str {
        match self {
            AppRoute::Home => "",
            AppRoute::Login => "login",
        }
    }

    /// Resolve a request path to a page. A single trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);
        Self::ALL.into_iter().find(|route| route.path() == trimmed)
    }
}
