//! Concurrent HTTP request engine.
//!
//! Issues outbound GET/POST requests, singly or in large concurrent
//! batches, with per-request timeout, proxy and redirect control, and
//! returns a uniform [`Outcome`] per request. The blocking surface
//! (`get`, `post`, `get_batch`) drives the engine's own runtime;
//! the async surface (`get_async`, `post_async`) queues on it. Callers
//! already inside an async context can use [`execute`] and
//! [`execute_batch`] directly.

pub mod debug;
mod dispatch;
pub mod headers;
pub mod network;
pub mod outcome;
pub mod request;
mod utils;

pub use debug::set_debug;
pub use headers::{HeaderSet, RawHeader};
pub use network::ProxyError;
pub use outcome::{Failure, FailureKind, Outcome, Response};
pub use request::{execute, execute_batch, Method, RequestItem, RequestOptions, DEFAULT_TIMEOUT_MS};

use once_cell::sync::Lazy;
use reqwest::redirect::Policy;
use reqwest::Client;

pub(crate) const APP_USER_AGENT: &str = concat!("rapid-req/", env!("CARGO_PKG_VERSION"));

// Shared HTTP client for requests without a proxy. Automatic redirects
// are off: the executor drives hops itself so per-request policy and the
// whole-operation timeout apply across the chain.
pub(crate) static GLOBAL_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .redirect(Policy::none())
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .user_agent(APP_USER_AGENT)
        .build()
        .expect("Failed to create HTTP client")
});

/// Blocking GET. Must not be called from inside an async context; use
/// [`get_async`] or [`execute`] there.
pub fn get(url: impl Into<String>, headers: HeaderSet, options: RequestOptions) -> Outcome {
    dispatch::block_on(execute(RequestItem::get(url, headers, options)))
}

/// Blocking POST with a text body.
pub fn post(
    url: impl Into<String>,
    headers: HeaderSet,
    body: impl Into<String>,
    options: RequestOptions,
) -> Outcome {
    dispatch::block_on(execute(RequestItem::post(url, headers, body, options)))
}

/// GET queued on the engine runtime. Resolves to the same outcome shape
/// as [`get`]; there is no pending handle and no cancellation beyond the
/// per-request timeout.
pub async fn get_async(
    url: impl Into<String>,
    headers: HeaderSet,
    options: RequestOptions,
) -> Outcome {
    dispatch::run_on_engine(execute(RequestItem::get(url, headers, options))).await
}

/// POST queued on the engine runtime.
pub async fn post_async(
    url: impl Into<String>,
    headers: HeaderSet,
    body: impl Into<String>,
    options: RequestOptions,
) -> Outcome {
    dispatch::run_on_engine(execute(RequestItem::post(url, headers, body, options))).await
}

/// Blocking batch GET: the same headers and options apply to every URL.
/// Returns one outcome per URL, in input order, after every request has
/// reached a terminal outcome.
pub fn get_batch(urls: Vec<String>, headers: HeaderSet, options: RequestOptions) -> Vec<Outcome> {
    let items = urls
        .into_iter()
        .map(|url| RequestItem::get(url, headers.clone(), options.clone()))
        .collect();
    dispatch::block_on(execute_batch(items))
}
