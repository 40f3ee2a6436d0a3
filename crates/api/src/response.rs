//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope; list endpoints add a
//! `count` alongside the ordered sequence. Use these instead of ad-hoc
//! `serde_json::json!({ "data": ... })` to get compile-time type safety and
//! consistent serialization.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// List envelope: `{ "count": n, "data": [...] }`.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        ListResponse {
            count: data.len(),
            data,
        }
    }
}
