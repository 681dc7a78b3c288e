//! Credential extraction from request headers
//!
//! Nothing here validates a token; callers only learn whether one is present.

use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::HeaderMap;

const BEARER_PREFIX: &str = "Bearer ";

/// Token from `Authorization: Bearer <token>`.
///
/// `None` when the header is missing, not UTF-8, uses another scheme, or
/// carries an empty token.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix(BEARER_PREFIX)?.trim();
    (!token.is_empty()).then_some(token)
}

/// Value of cookie `name`, searched across every `Cookie` header.
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim())
}

/// A request counts as signed in if it carries a non-empty session cookie or
/// a bearer token.
pub fn has_session(headers: &HeaderMap, cookie_name: &str) -> bool {
    cookie_value(headers, cookie_name).is_some_and(|value| !value.is_empty())
        || bearer_token(headers).is_some()
}
