//! Entry point
//!
//! On wasm32 this is what Trunk compiles: it mounts the Leptos App to the
//! document body. Natively it prints a text rendition of the same view.

#[cfg(not(target_arch = "wasm32"))]
mod cli;

#[cfg(target_arch = "wasm32")]
fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(user_search::App);
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    cli::run().await
}
