pub mod analytics;
pub mod event;
pub mod gift;
pub mod user;
