// request/mod.rs

pub mod request_item;
pub mod executor;
pub mod concurrency;
pub mod options;

// re-exports for the crate surface
pub use request_item::{Method, RequestItem};
pub use executor::execute;
pub use concurrency::execute_batch;
pub use options::{RequestOptions, DEFAULT_TIMEOUT_MS};
