//! The `{ "success": ..., ... }` JSON wrapper every API handler answers with.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Success carrying only a human-readable message.
#[derive(Debug, Serialize)]
pub struct Acknowledged {
    pub success: bool,
    pub message: &'static str,
}

/// Success carrying a full collection and its size.
#[derive(Debug, Serialize)]
pub struct Listing<T> {
    pub success: bool,
    pub count: usize,
    pub data: Vec<T>,
}

/// Success carrying a single record; `data` serializes as `null` when absent.
#[derive(Debug, Serialize)]
pub struct Single<T> {
    pub success: bool,
    pub data: Option<T>,
}

/// Any failure. `message` names the category, never the underlying cause.
#[derive(Debug, Serialize)]
pub struct Failure {
    pub success: bool,
    pub message: &'static str,
}

impl Acknowledged {
    pub fn new(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}

impl<T: Serialize> Listing<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

impl<T: Serialize> Single<T> {
    pub fn new(data: Option<T>) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl Failure {
    pub fn new(message: &'static str) -> Self {
        Self {
            success: false,
            message,
        }
    }
}

/// Pairs an envelope with the status code it is sent under.
pub struct Reply<T>(pub StatusCode, pub T);

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        (self.0, Json(self.1)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn listing_counts_its_data() {
        let value = serde_json::to_value(Listing::new(vec!["a", "b"])).unwrap();
        assert_eq!(value, json!({"success": true, "count": 2, "data": ["a", "b"]}));
    }

    #[test]
    fn single_keeps_null_data() {
        let value = serde_json::to_value(Single::<String>::new(None)).unwrap();
        assert_eq!(value, json!({"success": true, "data": null}));
    }

    #[test]
    fn failure_is_unsuccessful() {
        let value = serde_json::to_value(Failure::new("Error getting messages")).unwrap();
        assert_eq!(value, json!({"success": false, "message": "Error getting messages"}));
    }
}
