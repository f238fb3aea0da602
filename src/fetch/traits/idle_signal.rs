//! Test-harness synchronization hook reporting whether background work is
//! in flight. Consumed, never implemented, by this library.

/// Binary busy/idle flag for an external test harness.
///
/// While the flag is busy (`false`), a synchronized harness holds off its
/// next action; once idle (`true`), it may proceed. Production callers
/// simply pass no signal.
pub trait IdleSignal {
    /// `false` while a deferred fetch is in flight, `true` once it settled.
    fn set_idle(&mut self, idle: bool);
}
