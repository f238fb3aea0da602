//! Deferred catalog retrieval: timing constants, capability traits, the
//! one-shot fetch operation, and the channel-based fetch service.
//!
//! ## Timing Constants
//!
//! These constants define the simulated transfer characteristics. They are
//! fixed for the process; tests that cannot afford real-time waits override
//! the delay at fetcher construction instead of changing the constant.

pub mod fetcher;
pub mod service;
pub mod traits;

/// Simulated transfer time of the catalog artwork (ms).
///
/// A fetch never delivers earlier than this delay. There is no guarantee of
/// exact timing beyond "no earlier than": the deferred action runs on the
/// caller's own execution context and is subject to executor scheduling.
///
/// # Choice of value
///
/// - **3000 ms** is long enough that a UI flow visibly passes through its
///   loading state, and that an un-synchronized test harness will reliably
///   race the delivery and fail — which is the point of the idle signal.
/// - Timing-sensitive tests should use
///   [`CatalogFetcher::with_delay_ms`](fetcher::CatalogFetcher::with_delay_ms)
///   rather than waiting out the full delay.
pub const FETCH_DELAY_MS: u32 = 3000;

/// Transient message shown to the user when a fetch starts.
///
/// Displayed synchronously, before the delay begins, through the
/// [`StatusDisplay`](traits::status_display::StatusDisplay) capability.
pub const FETCH_STATUS_MESSAGE: &str = "Fetching the catalog, hang tight...";
