//! Behavioral tests for searching the loaded user list

#![allow(clippy::arithmetic_side_effects)]

use crate::models::mock::mock_users;
use crate::render::SEARCH_PLACEHOLDER;
use crate::testing::{HarnessError, MockTransport, MountedUserSearch};

fn loaded() -> Result<MountedUserSearch<MockTransport>, HarnessError> {
    let mut mounted = MountedUserSearch::mount(MockTransport::resolving_with(&mock_users()))?;
    mounted.settle();
    Ok(mounted)
}

// ============================================================================
// SUBSTRING SEARCH BEHAVIORS
// ============================================================================

#[test]
fn given_loaded_users_when_searching_first_name_then_only_matching_users_remain()
-> Result<(), HarnessError> {
    // Given
    let mut mounted = loaded()?;

    // When
    mounted.change_input(SEARCH_PLACEHOLDER, "jane")?;

    // Then
    assert!(mounted.query_by_text("Jane Smith").is_some());
    assert!(mounted.query_by_text("John Doe").is_none());
    assert!(mounted.query_by_text("Bob Johnson").is_none());
    Ok(())
}

#[test]
fn given_loaded_users_when_searching_john_then_every_name_containing_it_remains()
-> Result<(), HarnessError> {
    // Given
    let mut mounted = loaded()?;

    // When
    mounted.change_input(SEARCH_PLACEHOLDER, "john")?;

    // Then
    assert_eq!(
        mounted.view().texts(),
        ["John Doe", "Bob Johnson"],
        "Search matches anywhere in the name"
    );
    assert!(mounted.query_by_text("Jane Smith").is_none());
    Ok(())
}

#[test]
fn given_loaded_users_when_searching_mixed_case_then_match_ignores_case()
-> Result<(), HarnessError> {
    // Given
    let mut mounted = loaded()?;

    // When
    mounted.change_input(SEARCH_PLACEHOLDER, "jAnE")?;

    // Then
    assert_eq!(mounted.view().texts(), ["Jane Smith"]);
    Ok(())
}

#[test]
fn given_active_search_when_cleared_then_full_list_returns_in_order()
-> Result<(), HarnessError> {
    // Given
    let mut mounted = loaded()?;
    mounted.change_input(SEARCH_PLACEHOLDER, "john")?;

    // When
    mounted.change_input(SEARCH_PLACEHOLDER, "")?;

    // Then
    assert_eq!(mounted.list_items().len(), 3);
    assert_eq!(
        mounted.view().texts(),
        ["John Doe", "Jane Smith", "Bob Johnson"]
    );
    Ok(())
}

#[test]
fn given_loaded_users_when_search_matches_nothing_then_list_is_empty()
-> Result<(), HarnessError> {
    // Given
    let mut mounted = loaded()?;

    // When
    mounted.change_input(SEARCH_PLACEHOLDER, "xyz")?;

    // Then
    assert!(mounted.list_items().is_empty());
    assert!(mounted.get_by_placeholder_text(SEARCH_PLACEHOLDER).is_some());
    Ok(())
}

#[test]
fn given_typed_characters_when_each_keystroke_fires_then_input_value_tracks_it()
-> Result<(), HarnessError> {
    // Given
    let mut mounted = loaded()?;

    // When / Then
    for typed in ["b", "bo", "bob"] {
        mounted.change_input(SEARCH_PLACEHOLDER, typed)?;
        let input = mounted.get_by_placeholder_text(SEARCH_PLACEHOLDER);
        assert_eq!(input.map(|i| i.value), Some(typed.to_string()));
    }
    assert_eq!(mounted.view().texts(), ["Bob Johnson"]);
    Ok(())
}

#[test]
fn given_unknown_placeholder_when_changing_input_then_harness_reports_missing_input()
-> Result<(), HarnessError> {
    // Given
    let mut mounted = loaded()?;

    // When
    let result = mounted.change_input("Search tasks...", "john");

    // Then
    assert_eq!(
        result,
        Err(HarnessError::InputNotFound("Search tasks...".to_string()))
    );
    assert_eq!(mounted.list_items().len(), 3);
    Ok(())
}

// ============================================================================
// MEMOIZATION BEHAVIORS
// ============================================================================

#[test]
fn given_unchanged_state_when_rerendering_then_filter_is_not_recomputed()
-> Result<(), HarnessError> {
    // Given
    let mut mounted = loaded()?;
    mounted.change_input(SEARCH_PLACEHOLDER, "o")?;
    let computed = mounted.filter_computations();
    let rendered = mounted.render_count();

    // When
    mounted.rerender()?;
    mounted.rerender()?;

    // Then
    assert_eq!(mounted.filter_computations(), computed);
    assert_eq!(mounted.render_count(), rendered + 2);
    Ok(())
}

#[test]
fn given_new_search_when_rendering_then_filter_is_recomputed_once()
-> Result<(), HarnessError> {
    // Given
    let mut mounted = loaded()?;
    let computed = mounted.filter_computations();

    // When
    mounted.change_input(SEARCH_PLACEHOLDER, "smith")?;

    // Then
    assert_eq!(mounted.filter_computations(), computed + 1);
    Ok(())
}
