//! Leptos UI components

pub mod user_search;

pub use user_search::{SearchBox, UserListView, UserSearch};
