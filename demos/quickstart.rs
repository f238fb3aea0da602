//! # Quickstart Demo
//!
//! Minimal walkthrough of tisane-fetch:
//! - Plug console implementations into the capability traits
//! - Run a deferred fetch and receive the canonical assortment
//! - Abort a fetch before its delay elapses
//!
//! This demo uses `std` and tokio for a quick trial run; on an embassy
//! target the same code runs with `EmbassyTimer` and a real display.
//!
//! ```bash
//! cargo run --example quickstart
//! ```

use tisane_fetch::catalog::batch::CatalogBatch;
use tisane_fetch::fetch::fetcher::{CatalogFetcher, FetchAbort, FetchOutcome};
use tisane_fetch::fetch::traits::{
    delay_timer::DelayTimer, fetch_callback::FetchCallback, status_display::StatusDisplay,
};
use tokio::time::{sleep, Duration};

/// Timer backed by `tokio::time::sleep`.
struct TokioTimer;

impl DelayTimer for TokioTimer {
    async fn delay_ms(&mut self, millis: u32) {
        sleep(Duration::from_millis(millis as u64)).await;
    }
}

/// Display printing transient messages to the terminal.
struct ConsoleDisplay;

impl StatusDisplay for ConsoleDisplay {
    fn show_transient(&mut self, message: &str) {
        println!("   [status] {}", message);
    }
}

/// Callback listing every delivered item.
struct ConsoleCallback;

impl FetchCallback for ConsoleCallback {
    fn on_done(&mut self, batch: &CatalogBatch) {
        println!("   Delivered {} items:", batch.len());
        for item in batch {
            println!("     - {}", item);
        }
    }
}

#[tokio::main]
async fn main() {
    println!("=== tisane-fetch Quickstart ===\n");

    // ======================================================================
    // 1. Run a deferred fetch with the contractual delay
    // ======================================================================
    println!("1. Fetching the catalog (3 s simulated transfer)");

    let mut fetcher = CatalogFetcher::new(TokioTimer, ConsoleDisplay);
    let mut callback = ConsoleCallback;

    match fetcher.schedule(Some(&mut callback), None).await {
        FetchOutcome::Completed(batch) => {
            println!("   Caller also owns the batch: {} items\n", batch.len());
        }
        FetchOutcome::Aborted => {
            println!("   Unexpected abort\n");
        }
    }

    // ======================================================================
    // 2. Abort a fetch before the delay elapses
    // ======================================================================
    println!("2. Aborting a fetch after 500 ms");

    let abort = FetchAbort::new();
    let (outcome, _) = tokio::join!(
        fetcher.schedule_abortable(Some(&mut callback), None, &abort),
        async {
            sleep(Duration::from_millis(500)).await;
            abort.abort();
        }
    );
    match outcome {
        FetchOutcome::Aborted => println!("   Fetch aborted, nothing delivered\n"),
        FetchOutcome::Completed(_) => println!("   Fetch completed before the abort\n"),
    }

    // ======================================================================
    println!("Quickstart complete.");
}
