//! Main application component

use leptos::prelude::*;

use crate::api::DefaultTransport;
use crate::components::UserSearch;

/// Root of the Leptos application: a single user search region
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app-container">
            <main class="app-main">
                <UserSearch transport=DefaultTransport::default() />
            </main>
        </div>
    }
}
