//! Asynchronous timer abstraction providing the delay primitive behind
//! deferred deliveries.

/// Contract for the delay primitive a fetch waits on.
pub trait DelayTimer {
    /// Asynchronously wait for `millis` milliseconds.
    fn delay_ms<'a>(
        &'a mut self,
        millis: u32,
    ) -> impl core::future::Future<Output = ()> + 'a;
}

/// [`DelayTimer`] implementation backed by `embassy-time`.
///
/// Usable as-is on any target with an embassy time driver; other runtimes
/// plug in their own implementation of the trait.
pub struct EmbassyTimer;

impl DelayTimer for EmbassyTimer {
    async fn delay_ms(&mut self, millis: u32) {
        embassy_time::Timer::after_millis(millis as u64).await;
    }
}
