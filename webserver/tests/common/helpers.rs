//! Test helper utilities for webserver integration tests

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scheduler::{MockPersistenceGateway, OfficeHours, SchedulerError};
use serde_json::Value;
use tower::ServiceExt;
use webserver::{build_router, AppState, Clock};

use super::fixtures::{create_test_ledger, create_test_roster, test_today};

/// Mock gateway serving the fixture tables; saves are left to the caller
pub fn create_mock_gateway() -> MockPersistenceGateway {
    let mut gateway = MockPersistenceGateway::new();
    gateway
        .expect_load()
        .returning(|| Ok((create_test_roster(), create_test_ledger())));
    gateway.expect_describe().returning(|| "mock".to_string());
    gateway
}

/// Router over `gateway` with a seeded rng and a fixed clock
pub async fn create_test_router(gateway: MockPersistenceGateway) -> Router {
    let office_hours = OfficeHours::load(gateway).await.unwrap();
    let state = AppState::with_rng(office_hours, StdRng::seed_from_u64(7)).with_clock(Clock::Fixed(test_today()));
    build_router(Arc::new(state), None)
}

pub fn storage_failure() -> SchedulerError {
    SchedulerError::StorageError {
        operation: "upload".to_string(),
        location: "mock".to_string(),
        message: "HTTP 500".to_string(),
    }
}

/// Send one request and decode the JSON response
pub async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}
