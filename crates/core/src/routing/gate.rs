//! Route gate
//!
//! Decides whether a browser page request may proceed based only on whether
//! a session is present. The session token itself is not validated here.

use polaris_domain::constants::{
    AUTH_PAGE_PREFIXES, DASHBOARD_PATH, PROTECTED_PATH_PREFIXES, SIGN_IN_PATH,
};

/// Outcome of [`RouteGate::decide`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    /// Unauthenticated request for a protected page.
    RedirectToSignIn { location: String },
    /// Signed-in user on a sign-in or sign-up page.
    RedirectToDashboard,
}

impl GateDecision {
    /// Redirect target, if any.
    pub fn location(&self) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::RedirectToSignIn { location } => Some(location),
            Self::RedirectToDashboard => Some(DASHBOARD_PATH),
        }
    }
}

/// Path-prefix based access rules.
#[derive(Debug, Clone)]
pub struct RouteGate {
    protected: Vec<String>,
    auth_pages: Vec<String>,
}

impl Default for RouteGate {
    fn default() -> Self {
        Self::new(PROTECTED_PATH_PREFIXES, AUTH_PAGE_PREFIXES)
    }
}

impl RouteGate {
    pub fn new<P, A>(protected: P, auth_pages: A) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        Self {
            protected: protected.into_iter().map(Into::into).collect(),
            auth_pages: auth_pages.into_iter().map(Into::into).collect(),
        }
    }

    /// Decide for `path` (no query string) and the raw `query`, if any.
    pub fn decide(&self, path: &str, query: Option<&str>, authenticated: bool) -> GateDecision {
        if !authenticated && self.is_protected(path) {
            let original = match query {
                Some(query) if !query.is_empty() => format!("{path}?{query}"),
                _ => path.to_string(),
            };
            return GateDecision::RedirectToSignIn {
                location: format!("{SIGN_IN_PATH}?redirect={}", urlencoding::encode(&original)),
            };
        }

        if authenticated && self.is_auth_page(path) {
            return GateDecision::RedirectToDashboard;
        }

        GateDecision::Allow
    }

    pub fn is_protected(&self, path: &str) -> bool {
        self.protected.iter().any(|prefix| matches_prefix(path, prefix))
    }

    pub fn is_auth_page(&self, path: &str) -> bool {
        self.auth_pages.iter().any(|prefix| matches_prefix(path, prefix))
    }
}

/// `/dashboard` matches `/dashboard` and `/dashboard/...` but not
/// `/dashboards`.
fn matches_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
