use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
};
use mailroom_contact::ContactStore;
use tower_http::cors::CorsLayer;

mod contact;
mod health;

/// Matches the JSON body limit of the service this API replaces.
pub const DEFAULT_BODY_LIMIT: usize = 100 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContactStore>,
    pub body_limit: usize,
}

impl AppState {
    pub fn new(store: impl ContactStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    pub fn with_body_limit(mut self, body_limit: usize) -> Self {
        self.body_limit = body_limit;
        self
    }
}

pub fn router(app_state: AppState) -> Router {
    let body_limit = app_state.body_limit;

    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/api/test", get(contact::test))
        .route("/api/contact", post(contact::submit))
        .route("/api/contacts", get(contact::list))
        .route("/api/contacts/{id}/read", patch(contact::mark_read))
        .layer(DefaultBodyLimit::max(body_limit))
        // Any origin may call the API
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
