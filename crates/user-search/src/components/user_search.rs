//! UserSearch component: fetched user list with a live search box

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{Transport, fetch_users};
use crate::filter::filter_users;
use crate::models::UserRecord;
use crate::render::SEARCH_PLACEHOLDER;

/// Search input over the users fetched from the endpoint
///
/// Starts empty, loads the users once on mount and narrows the list on
/// every keystroke. A failed load leaves the list empty; nothing is shown.
/// Requests go through `transport`; [`crate::App`] passes the default one.
#[component]
pub fn UserSearch<T>(transport: T) -> impl IntoView
where
    T: Transport + 'static,
{
    let transport = Rc::new(transport);

    // Reactive state
    let users = RwSignal::new(Vec::<UserRecord>::new());
    let search_term = RwSignal::new(String::new());

    // Fetch users on mount; the effect reads no signals so it never re-runs
    Effect::new(move |_| {
        let transport = Rc::clone(&transport);
        spawn_local(async move {
            match fetch_users(transport.as_ref()).await {
                Ok(fetched) => {
                    if users.try_set(fetched).is_some() {
                        tracing::debug!("view unmounted before users arrived; discarding result");
                    }
                }
                Err(err) => tracing::debug!(%err, "user fetch failed; list stays empty"),
            }
        });
    });

    // Derived signal for filtered users
    let filtered_users = Memo::new(move |_| {
        users.with(|all| search_term.with(|term| filter_users(all, term)))
    });

    view! {
        <div class="user-search">
            <SearchBox search_term=search_term />
            <UserListView users=filtered_users />
        </div>
    }
}

/// Text input bound to the search term
#[component]
pub fn SearchBox(search_term: RwSignal<String>) -> impl IntoView {
    view! {
        <input
            type="text"
            placeholder=SEARCH_PLACEHOLDER
            on:input=move |ev| {
                search_term.set(event_target_value(&ev));
            }
            prop:value=move || search_term.get()
        />
    }
}

/// Unordered list of users, keyed by id
#[component]
pub fn UserListView(users: Memo<Vec<UserRecord>>) -> impl IntoView {
    view! {
        <ul class="user-list">
            <For
                each=move || {
                    tracing::trace!("rendering user list");
                    users.get()
                }
                key=|user| user.id
                children=move |user| {
                    view! {
                        <li>{user.name}</li>
                    }
                }
            />
        </ul>
    }
}
