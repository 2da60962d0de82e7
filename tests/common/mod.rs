#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{Duration, TimeZone, Utc};
use serde_json::Value as JsonValue;
use tower::ServiceExt;
use uuid::Uuid;

use scholarship_backend::{
    database::{MemoryScholarshipStore, MemoryUserStore},
    models::scholarship::Scholarship,
    routes::{build_router, RouterOptions},
    utils::token::JwtKeys,
    AppState,
};

pub const JWT_SECRET: &str = "test_secret_key";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "admin-password";

pub fn options() -> RouterOptions {
    RouterOptions {
        public_rps: 1000,
        admin_rps: 1000,
        cors_origins: Vec::new(),
    }
}

/// A record open to everyone, created `minutes` after a fixed instant.
pub fn scholarship(name: &str, amount: &str, deadline: &str, minutes: i64) -> Scholarship {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(minutes);
    Scholarship {
        id: Uuid::new_v4(),
        name: name.to_string(),
        amount: amount.to_string(),
        education_level: "Bachelor's".to_string(),
        application_end_date: deadline.to_string(),
        description: String::new(),
        eligibility: String::new(),
        community: String::new(),
        gender_requirement: "All Genders".to_string(),
        status: "active".to_string(),
        application_link: None,
        organization_logo: None,
        application_form_data: None,
        created_at: created,
        updated_at: created,
    }
}

/// Fixture catalog shared by the listing tests.
pub fn catalog() -> Vec<Scholarship> {
    let mut robotics = scholarship("Robotics Excellence Award", "$5,000", "2025-01-01", 1);
    robotics.community = "STEM, Arts".into();
    robotics.education_level = "High School".into();

    let mut lab = scholarship("Future Engineers Grant", "1000", "2025-06-01", 2);
    lab.description = "Funds for students building robotics labs".into();
    lab.community = "Sports".into();
    lab.gender_requirement = "Female".into();

    let mut unknown = scholarship("Community Leaders Fund", "N/A", "2024-12-01", 3);
    unknown.community = "Community Service".into();

    let mut large = scholarship("Graduate Research Fellowship", "25000", "2026-03-15", 4);
    large.education_level = "Master's".into();
    large.status = "inactive".into();

    let mut small = scholarship("Book Stipend", "500", "not a date", 5);
    small.gender_requirement = "Male".into();

    vec![robotics, lab, unknown, large, small]
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub async fn new(records: Vec<Scholarship>) -> Self {
        Self::with_documents(records, std::env::temp_dir()).await
    }

    pub async fn with_documents(records: Vec<Scholarship>, documents: PathBuf) -> Self {
        let state = AppState::new(
            Arc::new(MemoryScholarshipStore::with_records(records)),
            Arc::new(MemoryUserStore::new()),
            JwtKeys::new(JWT_SECRET, 60),
            &documents.to_string_lossy(),
        );
        state
            .user_service
            .ensure_admin(ADMIN_EMAIL, ADMIN_PASSWORD)
            .await
            .expect("bootstrap admin");
        let router = build_router(state.clone(), &options());
        Self { router, state }
    }

    pub async fn send(&self, req: Request<Body>) -> (StatusCode, JsonValue) {
        let resp = self.router.clone().oneshot(req).await.expect("response");
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.expect("body");
        let body = if bytes.is_empty() {
            JsonValue::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null)
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, JsonValue) {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn names(&self, uri: &str) -> Vec<String> {
        let (status, body) = self.get(uri).await;
        assert_eq!(status, StatusCode::OK, "GET {} -> {}", uri, body);
        body.as_array()
            .expect("array body")
            .iter()
            .map(|item| item["name"].as_str().unwrap().to_string())
            .collect()
    }

    pub async fn login(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .send(json_request(
                "POST",
                "/api/auth/login",
                None,
                &serde_json::json!({ "email": email, "password": password }),
            ))
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", body);
        body["access_token"].as_str().unwrap().to_string()
    }

    pub async fn admin_token(&self) -> String {
        self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await
    }
}

pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: &JsonValue,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn bearer_request(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}
