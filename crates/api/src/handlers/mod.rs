//! HTTP handlers, one module per resource.

pub mod analytics;
pub mod auth;
pub mod event;
pub mod gift;
