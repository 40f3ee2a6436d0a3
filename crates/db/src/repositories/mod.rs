//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod analytics_repo;
pub mod event_repo;
pub mod gift_repo;
pub mod user_repo;

pub use analytics_repo::AnalyticsRepo;
pub use event_repo::EventRepo;
pub use gift_repo::GiftRepo;
pub use user_repo::UserRepo;
