//! Leptos 0.7 CSR search-filterable user list
//!
//! Fetches the user list once from a fixed endpoint and lets the user narrow
//! it down with a case-insensitive substring search.
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7
//! - WASM compilation target (wasm32-unknown-unknown)
//! - Framework-free state container and render model, shared with the
//!   terminal binary and the test harness
//!
//! ## Module Structure
//! - `app`: Main application component
//! - `components`: The `UserSearch` component and its parts
//! - `api`: Data source adapter for the users endpoint
//! - `models`: User record and mock data
//! - `filter`: Pure search filter and its memo
//! - `store`: Observable state container
//! - `render`: Render model of the view
//! - `testing`: Harness for behavior tests (unit tests and the `testing` feature)
//! - `error`: Error types

#![forbid(unsafe_code)]

pub mod api;
pub mod app;
pub mod components;
pub mod error;
pub mod filter;
pub mod models;
pub mod render;
pub mod store;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[cfg(test)]
mod tests;

// Re-export main App component for convenience - Trunk will auto-mount it
pub use app::App;
pub use error::{FetchError, FetchResult};
pub use models::UserRecord;
