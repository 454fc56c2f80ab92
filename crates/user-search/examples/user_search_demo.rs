//! Demonstration of the UserSearch component
//!
//! To run in browser (requires trunk): `trunk serve examples/user_search_demo.rs`

use leptos::prelude::*;
use user_search::api::DefaultTransport;
use user_search::components::UserSearch;

/// Demo app showcasing UserSearch
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div style="max-width: 480px; margin: 0 auto; padding: 20px;">
            <h1>"Users"</h1>
            <UserSearch transport=DefaultTransport::default() />
        </div>
    }
}

/// WASM entry point
#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // The demo runs in WASM via trunk; natively use the user-search binary
    println!("This example should be run with trunk serve");
    println!("Run: trunk serve examples/user_search_demo.rs");
}
