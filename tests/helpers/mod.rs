/// Test doubles to simulate the timer, display, idle flag, and callback
/// during integration tests.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tisane_fetch::catalog::batch::CatalogBatch;
use tisane_fetch::fetch::traits::{
    delay_timer::DelayTimer, fetch_callback::FetchCallback, idle_signal::IdleSignal,
    status_display::StatusDisplay,
};
use tokio::time::{sleep, Duration};

#[allow(dead_code)]
/// Timer based on `tokio::time::sleep` to drive real delays in tests.
pub struct MockTimer;

impl DelayTimer for MockTimer {
    async fn delay_ms(&mut self, millis: u32) {
        sleep(Duration::from_millis(millis as u64)).await;
    }
}

#[derive(Clone, Default)]
#[allow(dead_code)]
/// Timer that resolves immediately and records every requested delay.
pub struct InstantTimer {
    requested: Arc<Mutex<Vec<u32>>>,
}

#[allow(dead_code)]
impl InstantTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays requested so far, in call order.
    pub fn requested(&self) -> Vec<u32> {
        self.requested.lock().unwrap().clone()
    }
}

impl DelayTimer for InstantTimer {
    async fn delay_ms(&mut self, millis: u32) {
        self.requested.lock().unwrap().push(millis);
    }
}

#[derive(Clone, Default)]
#[allow(dead_code)]
/// Display that records every transient message it is asked to show.
pub struct RecordingDisplay {
    messages: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl StatusDisplay for RecordingDisplay {
    fn show_transient(&mut self, message: &str) {
        self.messages.lock().unwrap().push(message.to_owned());
    }
}

#[allow(dead_code)]
/// Display that swallows messages, for tests that do not care about them.
pub struct NullDisplay;

impl StatusDisplay for NullDisplay {
    fn show_transient(&mut self, _message: &str) {}
}

#[derive(Clone)]
#[allow(dead_code)]
/// Busy/idle flag shared between the fetch under test and the assertions.
pub struct SharedIdleFlag(Arc<AtomicBool>);

#[allow(dead_code)]
impl SharedIdleFlag {
    /// Start idle, the state a harness observes before any fetch.
    pub fn new_idle() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_idle(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl IdleSignal for SharedIdleFlag {
    fn set_idle(&mut self, idle: bool) {
        self.0.store(idle, Ordering::SeqCst);
    }
}

#[derive(Clone, Default)]
#[allow(dead_code)]
/// Callback collecting every delivered batch.
pub struct CollectingCallback {
    batches: Arc<Mutex<Vec<CatalogBatch>>>,
}

#[allow(dead_code)]
impl CollectingCallback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Batches delivered so far, in delivery order.
    pub fn delivered(&self) -> Vec<CatalogBatch> {
        self.batches.lock().unwrap().clone()
    }
}

impl FetchCallback for CollectingCallback {
    fn on_done(&mut self, batch: &CatalogBatch) {
        self.batches.lock().unwrap().push(batch.clone());
    }
}
