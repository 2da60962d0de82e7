mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;
use uuid::Uuid;

use common::TestApp;

#[tokio::test]
async fn lists_and_renders_program_pages() {
    let app = TestApp::new(Vec::new()).await;

    let (status, body) = app.get("/api/kpr/programs").await;
    assert_eq!(status, StatusCode::OK);
    let programs = body.as_array().unwrap();
    assert!(!programs.is_empty());

    for program in programs {
        let slug = program["slug"].as_str().unwrap();
        assert_eq!(
            program["document_url"],
            format!("/api/kpr/programs/{}/document", slug)
        );
        let (status, page) = app.get(&format!("/api/kpr/programs/{}", slug)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!page["sections"].as_array().unwrap().is_empty());
    }

    let (status, _) = app.get("/api/kpr/programs/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn streams_program_documents_from_disk() {
    let dir = std::env::temp_dir().join(format!("kpr-docs-{}", Uuid::new_v4()));
    tokio::fs::create_dir_all(&dir).await.unwrap();
    tokio::fs::write(dir.join("kpr-overview.pdf"), b"%PDF-1.4 overview")
        .await
        .unwrap();
    let app = TestApp::with_documents(Vec::new(), dir.clone()).await;

    let resp = app
        .router
        .clone()
        .oneshot(
            Request::get("/api/kpr/programs/overview/document")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(
        resp.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"kpr-overview.pdf\""
    );
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"%PDF-1.4 overview");

    // Listed in the catalog but never copied to disk.
    let (status, _) = app.get("/api/kpr/programs/eligibility/document").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get("/api/kpr/programs/..%2F..%2Fetc/document").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    tokio::fs::remove_dir_all(&dir).await.ok();
}
