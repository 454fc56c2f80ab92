//! Terminal rendition of the user search view

use clap::Parser;
use user_search::api::{NativeTransport, Transport, fetch_users};
use user_search::render::RenderedView;
use user_search::store::SearchStore;

#[derive(Debug, Parser)]
#[command(name = "user-search", about = "Print the user list, optionally filtered")]
struct Cli {
    /// Case-insensitive substring to filter names by
    #[arg(short, long, default_value = "")]
    query: String,
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let view = render_once(&NativeTransport::default(), &cli.query).await;
    print!("{view}");
    Ok(())
}

/// Mount, load, apply the query and render once
async fn render_once<T>(transport: &T, query: &str) -> RenderedView
where
    T: Transport + ?Sized,
{
    let mut store = SearchStore::new();
    if store.begin_mount() {
        store.complete_fetch(fetch_users(transport).await);
    }
    store.set_search(query);
    store.render()
}
