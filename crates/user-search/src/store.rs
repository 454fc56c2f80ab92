//! State container for the user search view
//!
//! Owns the two pieces of observable state (the fetched user list and the
//! search term), the memoized filtered list and the one-shot mount guard.
//! Every state replacement re-renders and hands the result to the single
//! subscriber, synchronously, on the owning thread.

use std::fmt;
use std::rc::Rc;

use crate::error::FetchResult;
use crate::filter::{FilterMemo, InputVersions};
use crate::models::UserRecord;
use crate::render::RenderedView;

/// Loading phase of the view; there is no error phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Loaded,
}

impl fmt::Display for LoadPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading"),
            Self::Loaded => write!(f, "Loaded"),
        }
    }
}

type Subscriber = Box<dyn FnMut(&RenderedView)>;

/// Observable state of one mounted user search view
#[derive(Default)]
pub struct SearchStore {
    users: Vec<UserRecord>,
    search: String,
    versions: InputVersions,
    phase: LoadPhase,
    memo: FilterMemo,
    mounted: bool,
    subscriber: Option<Subscriber>,
}

impl fmt::Debug for SearchStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchStore")
            .field("users", &self.users.len())
            .field("search", &self.search)
            .field("versions", &self.versions)
            .field("phase", &self.phase)
            .field("mounted", &self.mounted)
            .field("subscribed", &self.subscriber.is_some())
            .finish()
    }
}

impl SearchStore {
    /// Empty store: no users, empty search, still loading
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub const fn phase(&self) -> LoadPhase {
        self.phase
    }

    #[must_use]
    pub const fn versions(&self) -> InputVersions {
        self.versions
    }

    /// Register the render subscriber and render once immediately
    ///
    /// A later call replaces the previous subscriber.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&RenderedView) + 'static) {
        self.subscriber = Some(Box::new(subscriber));
        self.notify();
    }

    /// One-shot mount guard; `true` only on the first call
    pub fn begin_mount(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        true
    }

    /// Replace the user list wholesale
    pub fn replace_users(&mut self, users: Vec<UserRecord>) {
        tracing::debug!(count = users.len(), "user list replaced");
        self.users = users;
        self.versions = self.versions.bump_users();
        self.phase = LoadPhase::Loaded;
        self.notify();
    }

    /// Replace the search term
    ///
    /// Setting the value it already holds is a no-op, like a signal write
    /// of an equal value.
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if search == self.search {
            return;
        }
        self.search = search;
        self.versions = self.versions.bump_search();
        self.notify();
    }

    /// Apply the outcome of the mount fetch
    ///
    /// Failures leave the list untouched and are only traced.
    pub fn complete_fetch(&mut self, result: FetchResult<Vec<UserRecord>>) {
        match result {
            Ok(users) => self.replace_users(users),
            Err(err) => tracing::debug!(%err, "user fetch failed; list stays empty"),
        }
    }

    /// Filtered users for the current state, memoized by input versions
    pub fn filtered(&mut self) -> Rc<[UserRecord]> {
        self.memo
            .get_or_compute(self.versions, &self.users, &self.search)
    }

    /// How many times the filter actually ran
    #[must_use]
    pub const fn filter_computations(&self) -> usize {
        self.memo.computations()
    }

    pub fn render(&mut self) -> RenderedView {
        let visible = self.filtered();
        RenderedView::new(self.search.clone(), &visible)
    }

    /// Re-render without a state change
    pub fn refresh(&mut self) {
        self.notify();
    }

    fn notify(&mut self) {
        if self.subscriber.is_none() {
            return;
        }
        let view = self.render();
        if let Some(subscriber) = self.subscriber.as_mut() {
            subscriber(&view);
        }
    }
}
