//! Mock data for component tests and local development
//!
//! Mirrors the shape of the users endpoint without touching the network.

use super::user::UserRecord;

/// The three reference users used throughout the behavior tests
pub fn mock_users() -> Vec<UserRecord> {
    vec![
        UserRecord::new(1, "John Doe"),
        UserRecord::new(2, "Jane Smith"),
        UserRecord::new(3, "Bob Johnson"),
    ]
}

/// JSON body equivalent to what the endpoint serves for `mock_users`
pub fn mock_users_body() -> String {
    users_to_body(&mock_users())
}

/// Encode users as the endpoint's JSON array
pub fn users_to_body(users: &[UserRecord]) -> String {
    serde_json::Value::Array(
        users
            .iter()
            .map(|user| serde_json::json!({ "id": user.id, "name": user.name }))
            .collect(),
    )
    .to_string()
}
