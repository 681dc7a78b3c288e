//! End-to-end: controller → forwarding routes → mock memory service
//!
//! The controller talks to this app's own `/api` surface over a real socket,
//! and the app forwards to a WireMock backend.

use std::net::SocketAddr;
use std::sync::Arc;

use polaris_core::{MemorySettingsController, MemorySettingsError};
use polaris_domain::{
    AutoDeleteDays, Config, MemorySettings, MemorySettingsPatch, SettingsEnvelope,
    DEFAULT_MEMORY_SETTINGS,
};
use polaris_infra::{MemorySettingsClient, StaticTokenProvider};
use polaris_lib::{router, AppContext};
use serde_json::json;
use tokio::net::TcpListener;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn serve_app(backend_url: String) -> SocketAddr {
    let mut config = Config::default();
    config.backend.base_url = backend_url;
    let app = router(AppContext::new(config).expect("context"));

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    addr
}

fn controller(app: SocketAddr, token: &str) -> MemorySettingsController {
    let client = MemorySettingsClient::new(format!("http://{app}/api")).expect("client");
    MemorySettingsController::new(Arc::new(client), Arc::new(StaticTokenProvider::new(token)))
}

#[tokio::test]
async fn fetch_edit_save_through_the_app() {
    let backend = MockServer::start().await;
    let remote =
        MemorySettings { auto_delete_days: AutoDeleteDays::Seven, ..DEFAULT_MEMORY_SETTINGS };
    Mock::given(method("GET"))
        .and(path("/settings/memory"))
        .and(header("authorization", "Bearer e2e-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(SettingsEnvelope { settings: remote }),
        )
        .expect(1)
        .mount(&backend)
        .await;
    Mock::given(method("PUT"))
        .and(path("/settings/memory"))
        .and(header("authorization", "Bearer e2e-token"))
        .respond_with(|request: &wiremock::Request| -> ResponseTemplate {
            let body: SettingsEnvelope = serde_json::from_slice(&request.body).expect("body");
            ResponseTemplate::new(200).set_body_json(body)
        })
        .expect(1)
        .mount(&backend)
        .await;

    let app = serve_app(backend.uri()).await;
    let controller = controller(app, "e2e-token");

    controller.fetch().await;
    assert_eq!(controller.settings(), remote);

    controller.update(&MemorySettingsPatch {
        weekly_digest_enabled: Some(true),
        ..MemorySettingsPatch::default()
    });
    let saved = controller.save().await.expect("save");

    assert!(saved.weekly_digest_enabled);
    assert_eq!(saved.auto_delete_days, AutoDeleteDays::Seven);
    assert_eq!(controller.snapshot().error, None);
}

#[tokio::test]
async fn backend_404_passes_through_as_defaults() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "Not found" })))
        .mount(&backend)
        .await;

    let app = serve_app(backend.uri()).await;
    let controller = controller(app, "t");

    controller.fetch().await;

    let state = controller.snapshot();
    assert_eq!(state.settings, DEFAULT_MEMORY_SETTINGS);
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn unreachable_backend_surfaces_app_500() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let dead = listener.local_addr().expect("addr");
    drop(listener);

    let app = serve_app(format!("http://{dead}")).await;
    let controller = controller(app, "t");

    let result = controller.delete_all().await;

    assert_eq!(
        result,
        Err(MemorySettingsError::Backend {
            status: 500,
            message: "Failed to reach the memory service".into()
        })
    );
}
