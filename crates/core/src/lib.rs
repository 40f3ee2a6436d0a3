//! Heartboard domain layer.
//!
//! This crate has zero internal dependencies so the DB and API layers (and
//! any future tooling) can share the same error taxonomy, role definitions,
//! access-control rules, and field validation.

pub mod access;
pub mod analytics;
pub mod error;
pub mod event;
pub mod gift;
pub mod roles;
pub mod types;
