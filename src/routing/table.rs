//! Route table
//!
//! An explicit path -> `Route` map with `Route::NotFound` as the default entry.

use std::collections::HashMap;

/// Every behaviour the server can dispatch to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`: HTML page with the workspace listing
    Index,
    /// `/api/files`: JSON workspace listing
    ApiFiles,
    /// `/health`: plain-text liveness probe
    Health,
    /// Fallback for every other path
    NotFound,
}

impl Route {
    /// Short name used in debug logs
    pub const fn name(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::ApiFiles => "api_files",
            Self::Health => "health",
            Self::NotFound => "not_found",
        }
    }
}

/// Exact-match route table with a default fallback
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: HashMap<&'static str, Route>,
    fallback: Route,
}

impl RouteTable {
    /// The worker bee's three endpoints
    pub fn worker() -> Self {
        Self::new(Route::NotFound)
            .with("/", Route::Index)
            .with("/api/files", Route::ApiFiles)
            .with("/health", Route::Health)
    }

    pub fn new(fallback: Route) -> Self {
        Self {
            routes: HashMap::new(),
            fallback,
        }
    }

    #[must_use]
    pub fn with(mut self, path: &'static str, route: Route) -> Self {
        self.routes.insert(path, route);
        self
    }

    /// Resolve a request path (no query string) to its route
    pub fn resolve(&self, path: &str) -> Route {
        self.routes.get(path).copied().unwrap_or(self.fallback)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::worker()
    }
}
