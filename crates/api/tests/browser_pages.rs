//! Integration tests for browser pages: route gate and OAuth callbacks
//!
//! **Coverage:**
//! - Protected pages redirect anonymous visitors to sign-in with the
//!   original path and query encoded
//! - Sign-in/sign-up pages bounce signed-in visitors to the dashboard
//! - `/api` routes are not gated
//! - Callback pages: decoded identity, error codes, redirect timing, GitHub
//!   session requirement, unknown providers

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use polaris_domain::Config;
use polaris_lib::{router, AppContext};
use tower::ServiceExt;

fn app() -> Router {
    router(AppContext::new(Config::default()).expect("context"))
}

async fn get(uri: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app().oneshot(builder.body(Body::empty()).unwrap()).await.expect("response")
}

fn location(response: &Response) -> &str {
    response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()).unwrap_or_default()
}

async fn html(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8")
}

#[tokio::test]
async fn anonymous_visitor_is_sent_to_sign_in_with_redirect() {
    let response = get("/dashboard/x?tab=memory", None).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/signin?redirect=%2Fdashboard%2Fx%3Ftab%3Dmemory");
}

#[tokio::test]
async fn signed_in_visitor_reaches_protected_page() {
    let response = get("/dashboard", Some("auth_token=abc")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(html(response).await.contains("data-path=\"/dashboard\""));
}

#[tokio::test]
async fn bearer_header_counts_as_session() {
    let request = Request::builder()
        .uri("/profile")
        .header(header::AUTHORIZATION, "Bearer t")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn signed_in_visitor_is_bounced_from_auth_pages() {
    for page in ["/signin", "/signup"] {
        let response = get(page, Some("theme=dark; auth_token=abc")).await;

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{page}");
        assert_eq!(location(&response), "/dashboard");
    }
}

#[tokio::test]
async fn unprotected_and_lookalike_paths_are_allowed() {
    for page in ["/", "/dashboards", "/signin"] {
        let response = get(page, None).await;
        assert_eq!(response.status(), StatusCode::OK, "{page}");
    }
}

#[tokio::test]
async fn api_routes_are_not_gated() {
    let response = get("/api/settings/memory", None).await;

    // Reaches the handler, which answers 401 itself instead of redirecting.
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_api_path_is_404() {
    let response = get("/api/unknown", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn google_success_shows_decoded_email_and_redirects_after_two_seconds() {
    let response = get("/auth/callback/google?success=true&email=a%40b.com", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let page = html(response).await;
    assert!(page.contains("Signed in as a@b.com"));
    assert!(page.contains("content=\"2;url=/dashboard\""));
    assert_eq!(page.matches("http-equiv=\"refresh\"").count(), 1);
}

#[tokio::test]
async fn error_callback_shows_code_with_longer_delay() {
    let response = get("/auth/callback/gmail?error=access_denied", None).await;

    let page = html(response).await;
    assert!(page.contains("access_denied"));
    assert!(page.contains("data-status=\"error\""));
    assert!(page.contains("content=\"5;url=/dashboard\""));
}

#[tokio::test]
async fn error_description_is_decoded_and_escaped() {
    let response = get(
        "/auth/callback/google?error=invalid_request&error_description=Bad%2520%3Cscope%3E",
        None,
    )
    .await;

    let page = html(response).await;
    assert!(page.contains("Bad &lt;scope&gt; (invalid_request)"));
    assert!(page.contains("content=\"3;url=/signin\""));
}

#[tokio::test]
async fn github_callback_requires_session() {
    let anonymous = html(get("/auth/callback/github?success=true&username=octo", None).await).await;
    assert!(anonymous.contains("Please sign in before connecting your GitHub account."));
    assert!(anonymous.contains("url=/signin"));

    let signed_in =
        html(get("/auth/callback/github?success=true&username=octo", Some("auth_token=1")).await)
            .await;
    assert!(signed_in.contains("GitHub account octo connected"));
    assert!(signed_in.contains("content=\"2;url=/dashboard\""));
}

#[tokio::test]
async fn callback_without_parameters_is_unexpected_response() {
    let page = html(get("/auth/callback/google", None).await).await;

    assert!(page.contains("Unexpected response from Google. Please try again."));
    assert!(page.contains("content=\"3;url=/signin\""));
}

#[tokio::test]
async fn unknown_provider_is_404() {
    let response = get("/auth/callback/myspace?success=true", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
