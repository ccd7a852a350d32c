// src/dispatch.rs

use std::future::Future;

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

use crate::outcome::{FailureKind, Outcome};

// The engine's own multi-worker runtime. All network I/O for the
// blocking and async surfaces runs here.
static RUNTIME: Lazy<Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create engine runtime")
});

/// Drive a future to completion on the engine runtime, blocking the
/// calling thread. Must not be called from inside an async context.
pub(crate) fn block_on<F: Future>(future: F) -> F::Output {
    RUNTIME.block_on(future)
}

/// Queue a request future on the engine runtime and await its result.
/// Always resolves to a terminal `Outcome`; a worker task that dies
/// before producing one is reported as a failure, not a panic.
pub(crate) async fn run_on_engine<F>(future: F) -> Outcome
where
    F: Future<Output = Outcome> + Send + 'static,
{
    match RUNTIME.spawn(future).await {
        Ok(outcome) => outcome,
        Err(e) => Outcome::failure(
            FailureKind::ConnectionError,
            format!("engine task aborted: {}", e),
        ),
    }
}
