//! User record as served by the users endpoint

use serde::{Deserialize, Serialize};

/// One fetched user
///
/// The endpoint returns many more fields (email, address, company...);
/// only `id` and `name` are kept, everything else is ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
}

impl UserRecord {
    /// Creates a new user record
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Check if the user's name contains the search term (case-insensitive)
    #[must_use]
    pub fn matches_search(&self, search_term: &str) -> bool {
        self.name_contains_folded(&search_term.to_lowercase())
    }

    /// Same as `matches_search` with a needle that is already lowercased
    pub(crate) fn name_contains_folded(&self, folded_needle: &str) -> bool {
        folded_needle.is_empty() || self.name.to_lowercase().contains(folded_needle)
    }
}
