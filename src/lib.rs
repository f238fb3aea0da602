//! `tisane-fetch` library: a simulated catalog download for `no_std`
//! environments. A fetch shows a transient status message, waits out a fixed
//! delay on the caller's own execution context, then delivers a fixed tea
//! assortment to an optional consumer. No network, no persistence; the crate
//! exists to exercise asynchronous UI flows and test-harness synchronization.
#![no_std]
//==================================================================================
/// Catalog data types: items, batches, and the canonical assortment.
pub mod catalog;
/// Domain errors (batch capacity, command queue saturation).
pub mod error;
/// Deferred fetch: timing constants, capability traits, the one-shot fetch
/// operation, and the channel-based fetch service.
pub mod fetch;
//==================================================================================
