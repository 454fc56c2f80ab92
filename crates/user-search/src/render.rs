//! Render model of the user search view
//!
//! A plain description of what the component puts on screen: one text
//! input and one list item per visible user. The Leptos component renders
//! the same shape to the DOM; natively this model is what tests query and
//! what the terminal binary prints.

use std::fmt;

use crate::models::UserRecord;

/// Placeholder text of the search input
pub const SEARCH_PLACEHOLDER: &str = "Search users...";

/// The search text input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInput {
    pub placeholder: &'static str,
    pub value: String,
}

/// One `<li>` of the user list, keyed by user id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub key: u64,
    pub text: String,
}

impl From<&UserRecord> for ListItem {
    fn from(user: &UserRecord) -> Self {
        Self {
            key: user.id,
            text: user.name.clone(),
        }
    }
}

/// Complete rendered output of the component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub input: SearchInput,
    pub items: Vec<ListItem>,
}

impl Default for RenderedView {
    fn default() -> Self {
        Self::new(String::new(), &[])
    }
}

impl RenderedView {
    /// Render the search value and the already-filtered users
    pub fn new(search: impl Into<String>, visible_users: &[UserRecord]) -> Self {
        tracing::trace!(items = visible_users.len(), "rendering user list");
        Self {
            input: SearchInput {
                placeholder: SEARCH_PLACEHOLDER,
                value: search.into(),
            },
            items: visible_users.iter().map(ListItem::from).collect(),
        }
    }

    /// The input carrying exactly this placeholder, if rendered
    #[must_use]
    pub fn find_by_placeholder(&self, placeholder: &str) -> Option<&SearchInput> {
        (self.input.placeholder == placeholder).then_some(&self.input)
    }

    /// First list item whose visible text is exactly `text`
    #[must_use]
    pub fn find_by_text(&self, text: &str) -> Option<&ListItem> {
        self.items.iter().find(|item| item.text == text)
    }

    /// All elements with the list-item role
    #[must_use]
    pub fn list_items(&self) -> &[ListItem] {
        &self.items
    }

    /// Visible texts of the list items, in order
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.text.as_str()).collect()
    }
}

impl fmt::Display for RenderedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.input.value.is_empty() {
            writeln!(f, "[ {} ]", self.input.placeholder)?;
        } else {
            writeln!(f, "[ {} ]", self.input.value)?;
        }
        for item in &self.items {
            writeln!(f, "  - {}", item.text)?;
        }
        Ok(())
    }
}
