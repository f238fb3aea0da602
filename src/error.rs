//! Error definitions shared across library modules.
//! Each type models a specific failure scenario (batch capacity,
//! command queue saturation).
use thiserror_no_std::Error;

#[derive(Error, Debug, PartialEq, Eq)]
/// Errors that can occur while assembling a catalog batch.
pub enum CatalogError {
    /// The batch already holds its maximum number of items.
    #[error("Batch is full: capacity {capacity}")]
    BatchFull { capacity: usize },
}

#[derive(Error, Debug, PartialEq, Eq)]
/// Errors raised by the non-blocking side of the fetch handle.
pub enum FetchHandleError {
    /// The command queue has no free slot; the command was not enqueued.
    #[error("Fetch command queue is full")]
    QueueFull,
}
