//! Test harness for the user search view
//!
//! Mounts a `SearchStore` the way the component does: subscribe the render
//! function, run the mount effect once, and drive the fetch on a
//! single-threaded task queue. Tests then query the last rendered output by
//! placeholder, text or list-item role and fire input change events.
//!
//! ```
//! use user_search::testing::{MockTransport, MountedUserSearch};
//! use user_search::models::mock::mock_users;
//!
//! let mut mounted = MountedUserSearch::mount(MockTransport::resolving_with(&mock_users()))?;
//! mounted.settle();
//! assert_eq!(mounted.list_items().len(), 3);
//! # Ok::<(), user_search::testing::HarnessError>(())
//! ```

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;
use thiserror::Error;

use crate::api::{Transport, fetch_users};
use crate::error::{FetchError, FetchResult};
use crate::models::UserRecord;
use crate::models::mock::users_to_body;
use crate::render::{ListItem, RenderedView, SearchInput};
use crate::store::{LoadPhase, SearchStore};

/// Errors raised by harness interactions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarnessError {
    #[error("no input with placeholder '{0}'")]
    InputNotFound(String),

    #[error("failed to spawn mount effect: {0}")]
    Spawn(String),
}

enum Reply {
    Body(String),
    Failure(FetchError),
    Deferred(oneshot::Receiver<FetchResult<String>>),
}

/// Scripted transport that records every requested URL
pub struct MockTransport {
    reply: RefCell<Option<Reply>>,
    requested: RefCell<Vec<String>>,
}

impl MockTransport {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply: RefCell::new(Some(reply)),
            requested: RefCell::new(Vec::new()),
        }
    }

    /// Answer every request with `users` encoded as the endpoint does
    #[must_use]
    pub fn resolving_with(users: &[UserRecord]) -> Self {
        Self::with_body(users_to_body(users))
    }

    /// Answer every request with a raw body
    #[must_use]
    pub fn with_body(body: impl Into<String>) -> Self {
        Self::with_reply(Reply::Body(body.into()))
    }

    /// Fail every request with `error`
    #[must_use]
    pub fn rejecting(error: FetchError) -> Self {
        Self::with_reply(Reply::Failure(error))
    }

    /// Hold the first request until the returned `Responder` answers it
    #[must_use]
    pub fn deferred() -> (Self, Responder) {
        let (sender, receiver) = oneshot::channel();
        (
            Self::with_reply(Reply::Deferred(receiver)),
            Responder { sender },
        )
    }

    /// URLs requested so far, in order
    #[must_use]
    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn get_text(&self, url: &str) -> FetchResult<String> {
        self.requested.borrow_mut().push(url.to_owned());

        let reply = self.reply.borrow_mut().take();
        match reply {
            Some(Reply::Body(body)) => {
                *self.reply.borrow_mut() = Some(Reply::Body(body.clone()));
                Ok(body)
            }
            Some(Reply::Failure(error)) => {
                *self.reply.borrow_mut() = Some(Reply::Failure(error.clone()));
                Err(error)
            }
            Some(Reply::Deferred(receiver)) => match receiver.await {
                Ok(result) => result,
                Err(_) => Err(FetchError::network("deferred response dropped")),
            },
            None => Err(FetchError::network("no scripted response")),
        }
    }
}

/// Completes a deferred `MockTransport` request
pub struct Responder {
    sender: oneshot::Sender<FetchResult<String>>,
}

impl Responder {
    /// Resolve the pending request with `users`
    pub fn resolve_with(self, users: &[UserRecord]) {
        self.respond(Ok(users_to_body(users)));
    }

    /// Reject the pending request
    pub fn reject(self, error: FetchError) {
        self.respond(Err(error));
    }

    pub fn respond(self, result: FetchResult<String>) {
        // The request may already be gone with its component
        let _ = self.sender.send(result);
    }
}

/// A mounted user search view backed by transport `T`
pub struct MountedUserSearch<T> {
    store: Rc<RefCell<SearchStore>>,
    transport: Rc<T>,
    pool: LocalPool,
    latest: Rc<RefCell<RenderedView>>,
    renders: Rc<Cell<usize>>,
}

impl<T> MountedUserSearch<T>
where
    T: Transport + 'static,
{
    /// Render the view and run its mount effect
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::Spawn` if the fetch task cannot be queued.
    pub fn mount(transport: T) -> Result<Self, HarnessError> {
        let store = Rc::new(RefCell::new(SearchStore::new()));
        let latest = Rc::new(RefCell::new(RenderedView::default()));
        let renders = Rc::new(Cell::new(0_usize));

        {
            let latest = Rc::clone(&latest);
            let renders = Rc::clone(&renders);
            store.borrow_mut().subscribe(move |view| {
                *latest.borrow_mut() = view.clone();
                renders.set(renders.get().saturating_add(1));
            });
        }

        let mut mounted = Self {
            store,
            transport: Rc::new(transport),
            pool: LocalPool::new(),
            latest,
            renders,
        };
        mounted.run_mount_effect()?;
        Ok(mounted)
    }

    /// Re-invoke the view without a state change
    ///
    /// Effects are re-run too; the mount guard keeps the fetch from firing
    /// again.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::Spawn` if the fetch task cannot be queued.
    pub fn rerender(&mut self) -> Result<(), HarnessError> {
        self.store.borrow_mut().refresh();
        self.run_mount_effect()
    }

    fn run_mount_effect(&mut self) -> Result<(), HarnessError> {
        if !self.store.borrow_mut().begin_mount() {
            return Ok(());
        }

        let store = Rc::downgrade(&self.store);
        let transport = Rc::clone(&self.transport);
        self.pool
            .spawner()
            .spawn_local(async move {
                let result = fetch_users(transport.as_ref()).await;
                deliver(&store, result);
            })
            .map_err(|e| HarnessError::Spawn(e.to_string()))
    }
}

impl<T> MountedUserSearch<T> {
    /// Run queued tasks until none can make progress
    pub fn settle(&mut self) {
        self.pool.run_until_stalled();
    }

    /// Last rendered output
    #[must_use]
    pub fn view(&self) -> RenderedView {
        self.latest.borrow().clone()
    }

    #[must_use]
    pub fn get_by_placeholder_text(&self, placeholder: &str) -> Option<SearchInput> {
        self.latest.borrow().find_by_placeholder(placeholder).cloned()
    }

    #[must_use]
    pub fn query_by_text(&self, text: &str) -> Option<ListItem> {
        self.latest.borrow().find_by_text(text).cloned()
    }

    #[must_use]
    pub fn list_items(&self) -> Vec<ListItem> {
        self.latest.borrow().list_items().to_vec()
    }

    /// Fire a change event on the input with `placeholder`
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::InputNotFound` when no rendered input carries
    /// that placeholder.
    pub fn change_input(
        &mut self,
        placeholder: &str,
        value: impl Into<String>,
    ) -> Result<(), HarnessError> {
        if self.get_by_placeholder_text(placeholder).is_none() {
            return Err(HarnessError::InputNotFound(placeholder.to_owned()));
        }
        self.store.borrow_mut().set_search(value);
        self.settle();
        Ok(())
    }

    #[must_use]
    pub fn phase(&self) -> LoadPhase {
        self.store.borrow().phase()
    }

    #[must_use]
    pub fn filter_computations(&self) -> usize {
        self.store.borrow().filter_computations()
    }

    /// Number of times the render subscriber ran
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.renders.get()
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Tear the view down, keeping its task queue alive
    ///
    /// Pending fetches still run when the returned handle settles; their
    /// results find no store and are discarded.
    #[must_use]
    pub fn unmount(self) -> Unmounted {
        let store = Rc::downgrade(&self.store);
        Unmounted {
            pool: self.pool,
            store,
            renders: self.renders,
        }
    }
}

impl MountedUserSearch<MockTransport> {
    /// Number of requests the view has sent through its transport
    #[must_use]
    pub fn fetch_calls(&self) -> usize {
        self.transport.requested_urls().len()
    }
}

/// Task queue of a torn-down view
pub struct Unmounted {
    pool: LocalPool,
    store: Weak<RefCell<SearchStore>>,
    renders: Rc<Cell<usize>>,
}

impl Unmounted {
    pub fn settle(&mut self) {
        self.pool.run_until_stalled();
    }

    /// Whether the view's state has been dropped
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.store.upgrade().is_none()
    }

    #[must_use]
    pub fn render_count(&self) -> usize {
        self.renders.get()
    }
}

fn deliver(store: &Weak<RefCell<SearchStore>>, result: FetchResult<Vec<UserRecord>>) {
    match store.upgrade() {
        Some(store) => store.borrow_mut().complete_fetch(result),
        None => tracing::debug!("view unmounted before users arrived; discarding result"),
    }
}
