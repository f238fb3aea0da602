//! Delivery capability invoked once a deferred fetch completes.
use crate::catalog::batch::CatalogBatch;

/// Consumer of a completed fetch.
///
/// Invoked at most once per scheduled fetch, never before the configured
/// delay has elapsed, and never after an abort.
pub trait FetchCallback {
    /// Receive the delivered batch.
    fn on_done(&mut self, batch: &CatalogBatch);
}
