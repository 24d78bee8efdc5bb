#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use tower::ServiceExt;

use polls_core::{FixedClock, MemoryStore, Question};
use polls_runtime::{GatewayConfig, GatewayServer};

/// A rendered response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn assert_status(&self, status: StatusCode) -> &Self {
        assert_eq!(self.status, status, "unexpected status, body:\n{}", self.body);
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Router over an in-memory store with a frozen clock.
pub struct TestApp {
    pub store: MemoryStore,
    pub clock: FixedClock,
    pub router: Router,
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap()
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(GatewayConfig {
            log_requests: false,
            ..GatewayConfig::default()
        })
    }

    pub fn with_config(config: GatewayConfig) -> Self {
        let store = MemoryStore::new();
        let clock = FixedClock::new(fixed_now());
        let server = GatewayServer::new(config, Arc::new(store.clone()), Arc::new(clock.clone()));
        Self {
            store,
            clock,
            router: server.router(),
        }
    }

    /// Create a question published `days` days from the frozen now.
    pub async fn question(&self, text: &str, days: i64) -> Question {
        polls_core::testing::create_question(&self.store, text, days, fixed_now())
            .await
            .unwrap()
    }

    pub async fn question_with_choices(&self, text: &str, days: i64, choices: &[&str]) -> Question {
        polls_core::testing::create_question_with_choices(
            &self.store,
            text,
            days,
            fixed_now(),
            choices,
        )
        .await
        .unwrap()
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn post_form(&self, uri: &str, form: &str) -> TestResponse {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        self.send(request).await
    }
}

/// Number of question links on an index page.
pub fn listed(body: &str) -> usize {
    body.matches("<li><a href=\"/polls/").count()
}
