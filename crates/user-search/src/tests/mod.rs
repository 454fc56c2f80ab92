//! Behavioral tests for the user search view
//!
//! This module provides BDD-style tests using given-when-then naming convention.
//! Tests focus on component behavior rather than implementation details.

mod search_behaviors;
