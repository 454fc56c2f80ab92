//! Filtering of the user list by search term
//!
//! `filter_users` is the pure derivation used by both the Leptos component
//! and the framework-free store. `FilterMemo` caches its result against the
//! version counters of its two inputs.

use std::rc::Rc;

use crate::models::UserRecord;

/// Keep the users whose name contains `query`, case-insensitively
///
/// The result preserves the input order. An empty query keeps everyone.
#[must_use]
pub fn filter_users(users: &[UserRecord], query: &str) -> Vec<UserRecord> {
    let needle = query.to_lowercase();
    users
        .iter()
        .filter(|user| user.name_contains_folded(&needle))
        .cloned()
        .collect()
}

/// Version counters of the memo's two inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputVersions {
    pub users: u64,
    pub search: u64,
}

impl InputVersions {
    /// Versions after the user list was replaced
    #[must_use]
    pub const fn bump_users(self) -> Self {
        Self {
            users: self.users.wrapping_add(1),
            search: self.search,
        }
    }

    /// Versions after the search term was replaced
    #[must_use]
    pub const fn bump_search(self) -> Self {
        Self {
            users: self.users,
            search: self.search.wrapping_add(1),
        }
    }
}

/// Single-entry cache of the filtered list
#[derive(Debug, Default)]
pub struct FilterMemo {
    cached: Option<(InputVersions, Rc<[UserRecord]>)>,
    computations: usize,
}

impl FilterMemo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached list when `versions` matches, otherwise recompute
    pub fn get_or_compute(
        &mut self,
        versions: InputVersions,
        users: &[UserRecord],
        query: &str,
    ) -> Rc<[UserRecord]> {
        if let Some((key, filtered)) = &self.cached {
            if *key == versions {
                return Rc::clone(filtered);
            }
        }

        let filtered: Rc<[UserRecord]> = filter_users(users, query).into();
        self.computations = self.computations.saturating_add(1);
        self.cached = Some((versions, Rc::clone(&filtered)));
        filtered
    }

    /// How many times the filter actually ran
    #[must_use]
    pub const fn computations(&self) -> usize {
        self.computations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mock::mock_users;

    fn names(users: &[UserRecord]) -> Vec<&str> {
        users.iter().map(|u| u.name.as_str()).collect()
    }

    #[test]
    fn test_filter_substring() {
        let users = mock_users();
        assert_eq!(names(&filter_users(&users, "john")), ["John Doe", "Bob Johnson"]);
    }

    #[test]
    fn test_filter_case_insensitive() {
        let users = mock_users();
        assert_eq!(names(&filter_users(&users, "jAnE")), ["Jane Smith"]);
    }

    #[test]
    fn test_filter_empty_query_keeps_order() {
        let users = mock_users();
        assert_eq!(filter_users(&users, ""), users);
    }

    #[test]
    fn test_filter_no_match() {
        let users = mock_users();
        assert!(filter_users(&users, "zzz").is_empty());
    }

    #[test]
    fn test_filter_empty_list() {
        assert!(filter_users(&[], "john").is_empty());
    }

    #[test]
    fn test_versions_bump_independently() {
        let versions = InputVersions::default().bump_users().bump_search().bump_search();
        assert_eq!(versions, InputVersions { users: 1, search: 2 });
    }

    #[test]
    fn test_memo_reuses_result_for_same_versions() {
        let users = mock_users();
        let mut memo = FilterMemo::new();
        let versions = InputVersions::default();

        let first = memo.get_or_compute(versions, &users, "jo");
        let second = memo.get_or_compute(versions, &users, "jo");

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(memo.computations(), 1);
    }

    #[test]
    fn test_memo_recomputes_on_version_change() {
        let users = mock_users();
        let mut memo = FilterMemo::new();
        let versions = InputVersions::default();

        let all = memo.get_or_compute(versions, &users, "");
        let some = memo.get_or_compute(versions.bump_search(), &users, "smith");

        assert_eq!(all.len(), 3);
        assert_eq!(names(&some), ["Jane Smith"]);
        assert_eq!(memo.computations(), 2);
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_users() -> impl Strategy<Value = Vec<UserRecord>> {
            prop::collection::vec((any::<u64>(), "[a-zA-Z ]{0,12}"), 0..20).prop_map(|pairs| {
                pairs
                    .into_iter()
                    .map(|(id, name)| UserRecord::new(id, name))
                    .collect()
            })
        }

        proptest! {
            /// Property: filtering is a pure function of its inputs
            #[test]
            fn prop_filter_is_idempotent(users in arb_users(), query in "[a-zA-Z ]{0,4}") {
                prop_assert_eq!(filter_users(&users, &query), filter_users(&users, &query));
            }

            /// Property: the result is an order-preserving subsequence of exactly the matches
            #[test]
            fn prop_filter_is_ordered_subsequence(users in arb_users(), query in "[a-zA-Z]{0,3}") {
                let filtered = filter_users(&users, &query);
                let expected: Vec<UserRecord> = users
                    .iter()
                    .filter(|u| u.name.to_lowercase().contains(&query.to_lowercase()))
                    .cloned()
                    .collect();
                prop_assert_eq!(filtered, expected);
            }

            /// Property: filtering with the same query twice changes nothing
            #[test]
            fn prop_filter_twice_is_filter_once(users in arb_users(), query in "[a-zA-Z]{0,3}") {
                let once = filter_users(&users, &query);
                let twice = filter_users(&once, &query);
                prop_assert_eq!(once, twice);
            }
        }
    }
}
