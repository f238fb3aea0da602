//! One-shot deferred fetch: mark the harness busy, surface a status message,
//! wait out the simulated transfer, then deliver a fresh canonical batch.
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use futures_util::future::{select, Either};
use futures_util::pin_mut;

use crate::catalog::{batch::CatalogBatch, canonical_batch};
use crate::fetch::traits::{
    delay_timer::DelayTimer, fetch_callback::FetchCallback, idle_signal::IdleSignal,
    status_display::StatusDisplay,
};
use crate::fetch::{FETCH_DELAY_MS, FETCH_STATUS_MESSAGE};

/// Resolution of a scheduled fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The delay elapsed. The batch was handed to the callback when one was
    /// registered, and is returned to the caller either way.
    Completed(CatalogBatch),
    /// The abort signal won the race against the delay; nothing was delivered.
    Aborted,
}

/// Explicit cancellation handle for an in-flight fetch.
///
/// Raising the signal makes the racing fetch resolve to
/// [`FetchOutcome::Aborted`] without delivering. The handle is reusable:
/// call [`reset`](Self::reset) before arming it for another fetch.
pub struct FetchAbort {
    inner: Signal<CriticalSectionRawMutex, ()>,
}

impl FetchAbort {
    /// Create an un-raised abort handle.
    pub const fn new() -> Self {
        Self {
            inner: Signal::new(),
        }
    }

    /// Raise the abort. Idempotent.
    pub fn abort(&self) {
        self.inner.signal(());
    }

    /// Wait until the abort is raised.
    pub async fn wait(&self) {
        self.inner.wait().await;
    }

    /// `true` once the abort has been raised and not reset since.
    pub fn is_aborted(&self) -> bool {
        self.inner.signaled()
    }

    /// Clear a previously raised abort so the handle can be reused.
    pub fn reset(&self) {
        self.inner.reset();
    }
}

impl Default for FetchAbort {
    fn default() -> Self {
        Self::new()
    }
}

/// Driver for deferred catalog fetches.
///
/// Owns the timer and the status display; callback and idle signal are
/// per-call capabilities so a single fetcher can serve callers with and
/// without a test harness attached.
pub struct CatalogFetcher<T: DelayTimer, D: StatusDisplay> {
    /// Timer enforcing the simulated transfer time.
    timer: T,
    /// Surface for the transient "fetch in progress" message.
    display: D,
    /// Configured delay; [`FETCH_DELAY_MS`] unless overridden.
    delay_ms: u32,
}

impl<T: DelayTimer, D: StatusDisplay> CatalogFetcher<T, D> {
    /// Build a fetcher with the contractual delay of [`FETCH_DELAY_MS`].
    pub fn new(timer: T, display: D) -> Self {
        Self::with_delay_ms(timer, display, FETCH_DELAY_MS)
    }

    /// Build a fetcher with an explicit delay.
    ///
    /// Intended for timing-sensitive tests and demos; production callers
    /// use [`new`](Self::new).
    pub fn with_delay_ms(timer: T, display: D, delay_ms: u32) -> Self {
        Self {
            timer,
            display,
            delay_ms,
        }
    }

    /// Configured delay in milliseconds.
    pub const fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Run one deferred fetch to completion.
    ///
    /// Steps, in order:
    /// 1. Mark the idle signal busy, when one is attached.
    /// 2. Show the transient status message, synchronously.
    /// 3. Build a fresh canonical batch.
    /// 4. Wait out the configured delay on the caller's execution context.
    /// 5. Hand the batch to the callback, when one is attached, then mark
    ///    the idle signal idle again.
    ///
    /// The callback fires at most once and never before the delay has
    /// elapsed. An absent callback skips the delivery step silently.
    /// Dropping the returned future before completion cancels the fetch
    /// without delivering; for cancellation that also settles the idle
    /// signal, use [`schedule_abortable`](Self::schedule_abortable).
    pub async fn schedule(
        &mut self,
        callback: Option<&mut dyn FetchCallback>,
        idle: Option<&mut dyn IdleSignal>,
    ) -> FetchOutcome {
        self.run(callback, idle, None).await
    }

    /// Run one deferred fetch, racing the delay against `abort`.
    ///
    /// When the abort wins, the fetch resolves to
    /// [`FetchOutcome::Aborted`]: no delivery happens and the idle signal
    /// is still released, so a synchronized harness never hangs on an
    /// aborted fetch. An abort raised before the call resolves the fetch
    /// immediately; [`FetchAbort::reset`] re-arms the handle.
    pub async fn schedule_abortable(
        &mut self,
        callback: Option<&mut dyn FetchCallback>,
        idle: Option<&mut dyn IdleSignal>,
        abort: &FetchAbort,
    ) -> FetchOutcome {
        self.run(callback, idle, Some(abort)).await
    }

    async fn run(
        &mut self,
        callback: Option<&mut dyn FetchCallback>,
        mut idle: Option<&mut dyn IdleSignal>,
        abort: Option<&FetchAbort>,
    ) -> FetchOutcome {
        // Background work is in flight from this point on.
        if let Some(signal) = idle.as_deref_mut() {
            signal.set_idle(false);
        }

        // Immediate, synchronous user feedback before any waiting happens.
        self.display.show_transient(FETCH_STATUS_MESSAGE);

        // Fresh batch per fetch; no state is shared between invocations.
        let batch = canonical_batch();

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Catalog fetch started: {} items, delaying {} ms",
            batch.len(),
            self.delay_ms
        );

        // Wait out the simulated transfer, watching for an abort.
        let aborted = match abort {
            Some(abort) => {
                let delay = self.timer.delay_ms(self.delay_ms);
                pin_mut!(delay);
                let abort_raised = abort.wait();
                pin_mut!(abort_raised);

                matches!(select(delay, abort_raised).await, Either::Right(_))
            }
            None => {
                self.timer.delay_ms(self.delay_ms).await;
                false
            }
        };

        if aborted {
            #[cfg(feature = "defmt")]
            defmt::info!("Catalog fetch aborted before the delay elapsed");

            // Release the harness even though nothing was delivered.
            if let Some(signal) = idle.as_deref_mut() {
                signal.set_idle(true);
            }
            return FetchOutcome::Aborted;
        }

        if let Some(callback) = callback {
            callback.on_done(&batch);
            #[cfg(feature = "defmt")]
            defmt::debug!("Catalog batch delivered to callback");
        }

        if let Some(signal) = idle.as_deref_mut() {
            signal.set_idle(true);
        }

        FetchOutcome::Completed(batch)
    }
}
