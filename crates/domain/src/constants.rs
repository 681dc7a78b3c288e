//! Domain constants

use std::time::Duration;

/// Backend used when `POLARIS_BACKEND_URL` is not set.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Listen address used when `POLARIS_BIND_ADDR` is not set.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Cookie that carries the browser session token.
pub const DEFAULT_SESSION_COOKIE: &str = "auth_token";

/// A cached location older than this must be refreshed.
pub const LOCATION_STALE_AFTER: Duration = Duration::from_secs(5 * 60);

/// Memory settings document path, relative to an API base URL.
pub const MEMORY_SETTINGS_PATH: &str = "/settings/memory";

/// Browser paths that require a session.
pub const PROTECTED_PATH_PREFIXES: [&str; 4] = ["/dashboard", "/profile", "/github", "/search"];

/// Browser paths that a signed-in user is bounced away from.
pub const AUTH_PAGE_PREFIXES: [&str; 2] = ["/signin", "/signup"];

pub const SIGN_IN_PATH: &str = "/signin";
pub const DASHBOARD_PATH: &str = "/dashboard";
