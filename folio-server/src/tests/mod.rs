use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use folio_core::{config::Configuration, state::FolioState};
use folio_dependencies::tower::ServiceExt;
use folio_models::CertificationRecord;

use crate::cli::server::app;

async fn get(app: Router, uri: &str) -> (StatusCode, String, String) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|x| x.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = hyper::body::to_bytes(resp.into_body()).await.unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

fn builtin_app() -> Router {
    app(FolioState::with_certifications(Configuration::default(), None))
}

#[tokio::test]
async fn test_index_serves_default_page() {
    let (status, content_type, body) = get(builtin_app(), "/").await;
    assert_eq!(StatusCode::OK, status);
    assert!(content_type.starts_with("text/html"), "{content_type}");
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("AWS Certifications"));
    assert_eq!(3, body.matches("Verify on Credly").count());
}

#[tokio::test]
async fn test_fragment_uses_configured_list() {
    let records = vec![
        CertificationRecord::new("Second", "Org", "2022"),
        CertificationRecord::new("First", "Org", "2021").with_credential_id("cid"),
    ];
    let state = FolioState::with_certifications(Configuration::default(), Some(records));
    let (status, _, body) = get(app(state), "/certifications").await;
    assert_eq!(StatusCode::OK, status);
    assert!(body.starts_with("<section"));
    assert!(body.find("Second").unwrap() < body.find("First").unwrap());
    assert_eq!(1, body.matches("Verify on Credly").count());
    assert!(body.contains("https://www.credly.com/badges/cid/public_url"));
}

#[tokio::test]
async fn test_configured_empty_list_stays_empty() {
    let state = FolioState::with_certifications(Configuration::default(), Some(Vec::new()));
    let (status, _, body) = get(app(state), "/certifications").await;
    assert_eq!(StatusCode::OK, status);
    assert!(body.contains("AWS Certifications"));
    assert!(!body.contains("Verify on Credly"));
}

#[tokio::test]
async fn test_page_title_from_config() {
    let config = Configuration {
        page_title: "Jane's credentials".to_string(),
        ..Configuration::default()
    };
    let (_, _, body) = get(app(FolioState::with_certifications(config, None)), "/").await;
    assert!(body.contains("<title>Jane's credentials</title>"));
}

#[tokio::test]
async fn test_healthz() {
    let (status, _, body) = get(builtin_app(), "/healthz").await;
    assert_eq!(StatusCode::OK, status);
    assert_eq!("ok", body);
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, _, body) = get(builtin_app(), "/nope").await;
    assert_eq!(StatusCode::NOT_FOUND, status);
    assert!(!body.contains("/nope"));
}
