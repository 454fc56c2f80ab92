//! Data models for the user search component

pub mod mock;
pub mod user;

pub use user::UserRecord;
