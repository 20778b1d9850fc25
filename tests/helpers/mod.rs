//! Shared setup for HTTP-level tests.

#![allow(dead_code)]

use std::{path::Path, time::Duration};

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use mailroom::AppState;
use mailroom_contact::SqliteStore;
use serde_json::Value;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub store: SqliteStore,
}

/// Router backed by a migrated SQLite file under `dir`.
pub async fn setup_test_app(dir: &Path) -> anyhow::Result<TestApp> {
    let url = format!("sqlite:{}", dir.join("db.sqlite3").display());
    let pool = mailroom::db::create_pool(&url, 5, Duration::from_secs(5)).await?;
    mailroom::db::migrate(&pool).await?;

    let store = SqliteStore::new(pool);
    let router = mailroom::router(AppState::new(store.clone()));

    Ok(TestApp { router, store })
}

pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

pub async fn submit(router: &Router, body: Value) -> (StatusCode, Value) {
    send(router, Method::POST, "/api/contact", Some(body)).await
}

pub async fn list(router: &Router) -> (StatusCode, Value) {
    send(router, Method::GET, "/api/contacts", None).await
}

pub async fn mark_read(router: &Router, id: &str) -> (StatusCode, Value) {
    send(
        router,
        Method::PATCH,
        &format!("/api/contacts/{id}/read"),
        None,
    )
    .await
}

pub fn valid_body(name: &str) -> Value {
    serde_json::json!({
        "name": name,
        "email": format!("{name}@mailroom.localhost"),
        "subject": "Hi",
        "message": "Hello",
    })
}
