//! Data source adapter for the users endpoint
//!
//! One `GET` to a fixed URL, body decoded as a JSON array of users.
//! No retry, no caching, no timeout. The HTTP call goes through the
//! `Transport` seam so the browser, the terminal binary and the tests
//! each plug in their own client.

use std::rc::Rc;

use async_trait::async_trait;

use crate::error::{FetchError, FetchResult};
use crate::models::UserRecord;

/// Endpoint serving the user list
pub const USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Minimal HTTP client used by the adapter
///
/// Futures are not required to be `Send`: everything runs on the single
/// UI thread.
#[async_trait(?Send)]
pub trait Transport {
    /// Fetch `url` with a plain `GET` and return the response body
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Network` when the request or body read fails and
    /// `FetchError::Status` for a non-success response.
    async fn get_text(&self, url: &str) -> FetchResult<String>;
}

/// Shared transports, so a caller can keep a handle on the one it passes down
#[async_trait(?Send)]
impl<T> Transport for Rc<T>
where
    T: Transport + ?Sized,
{
    async fn get_text(&self, url: &str) -> FetchResult<String> {
        self.as_ref().get_text(url).await
    }
}

/// Load the user list from `USERS_ENDPOINT`
///
/// # Errors
///
/// Propagates transport failures and returns `FetchError::Parse` when the
/// body is not a JSON array of users.
pub async fn fetch_users<T>(transport: &T) -> FetchResult<Vec<UserRecord>>
where
    T: Transport + ?Sized,
{
    tracing::debug!(url = USERS_ENDPOINT, "fetching users");
    let body = transport.get_text(USERS_ENDPOINT).await?;
    parse_users(&body)
}

/// Decode a response body into user records
///
/// # Errors
///
/// Returns `FetchError::Parse` when the body is not a JSON array of objects
/// with at least an integer `id` and a string `name`.
pub fn parse_users(body: &str) -> FetchResult<Vec<UserRecord>> {
    serde_json::from_str(body).map_err(|e| FetchError::parse(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserTransport;

/// Transport used by the component on the current target
#[cfg(target_arch = "wasm32")]
pub type DefaultTransport = BrowserTransport;

#[cfg(not(target_arch = "wasm32"))]
pub use native::NativeTransport;

/// Transport used by the component on the current target
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultTransport = NativeTransport;

#[cfg(target_arch = "wasm32")]
mod browser {
    use async_trait::async_trait;
    use gloo_net::http::Request;

    use super::Transport;
    use crate::error::{FetchError, FetchResult};

    /// Browser `fetch` via gloo-net
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserTransport;

    #[async_trait(?Send)]
    impl Transport for BrowserTransport {
        async fn get_text(&self, url: &str) -> FetchResult<String> {
            let response = Request::get(url)
                .send()
                .await
                .map_err(|e| FetchError::network(e.to_string()))?;

            if !response.ok() {
                return Err(FetchError::Status(response.status()));
            }

            response
                .text()
                .await
                .map_err(|e| FetchError::network(e.to_string()))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use async_trait::async_trait;

    use super::Transport;
    use crate::error::{FetchError, FetchResult};

    /// Async reqwest client for the terminal rendition
    #[derive(Debug, Clone, Default)]
    pub struct NativeTransport {
        client: reqwest::Client,
    }

    impl NativeTransport {
        #[must_use]
        pub const fn new(client: reqwest::Client) -> Self {
            Self { client }
        }
    }

    #[async_trait(?Send)]
    impl Transport for NativeTransport {
        async fn get_text(&self, url: &str) -> FetchResult<String> {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| FetchError::network(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            response
                .text()
                .await
                .map_err(|e| FetchError::network(e.to_string()))
        }
    }
}
