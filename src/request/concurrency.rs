// request/concurrency.rs

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Semaphore;

use crate::outcome::{FailureKind, Outcome};
use crate::request::executor::execute;
use crate::request::request_item::RequestItem;

// Upper bound on requests in flight at once. Excess batch entries wait
// for a permit rather than fail; a queued request's timeout clock starts
// only when it runs.
const MAX_IN_FLIGHT: usize = 64;

/// Execute a batch of requests concurrently.
///
/// Returns exactly one outcome per input descriptor, at the same
/// position, whatever order the requests complete in. Requests run in
/// isolation: one failing, timing out or stalling never cancels another.
/// The coordinator waits for every request to reach a terminal outcome
/// before returning.
pub async fn execute_batch(items: Vec<RequestItem>) -> Vec<Outcome> {
    let total = items.len();
    let permits = Arc::new(Semaphore::new(MAX_IN_FLIGHT));

    let handles: Vec<_> = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let permits = Arc::clone(&permits);
            tokio::spawn(async move {
                // The semaphore is never closed, so acquire cannot fail.
                let _permit = permits.acquire_owned().await.ok();
                (index, execute(item).await)
            })
        })
        .collect();

    // Completed outcomes land in indexed slots keyed by input position.
    let mut slots: Vec<Option<Outcome>> = Vec::with_capacity(total);
    slots.resize_with(total, || None);

    for joined in join_all(handles).await {
        if let Ok((index, outcome)) = joined {
            slots[index] = Some(outcome);
        }
    }

    slots
        .into_iter()
        .map(|slot| {
            slot.unwrap_or_else(|| {
                Outcome::failure(
                    FailureKind::ConnectionError,
                    "request task aborted before completion",
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::HeaderSet;
    use crate::request::options::RequestOptions;

    #[tokio::test]
    async fn batch_of_invalid_urls_yields_one_outcome_each() {
        let items: Vec<_> = (0..5)
            .map(|i| {
                RequestItem::get(
                    format!("invalid-url-{}", i),
                    HeaderSet::new(),
                    RequestOptions::default(),
                )
            })
            .collect();
        let outcomes = execute_batch(items).await;
        assert_eq!(outcomes.len(), 5);
        for (i, outcome) in outcomes.iter().enumerate() {
            let failure = outcome.failure_info().expect("expected failure");
            assert_eq!(failure.kind, FailureKind::InvalidUrl);
            assert!(failure.detail.contains(&format!("invalid-url-{}", i)));
        }
    }

    #[tokio::test]
    async fn empty_batch_returns_empty_result() {
        let outcomes = execute_batch(Vec::new()).await;
        assert!(outcomes.is_empty());
    }
}
