//! Fetch service built on top of [`CatalogFetcher`].
//!
//! It keeps a command loop alive and optionally offers:
//!
//! * a request handle (`FetchHandle`) to queue fetch/abort commands;
//! * a batch receiver (`FetchBatches`) to pull completed deliveries.
//!
//! The caller chooses its feature set through the pre-allocated
//! [`embassy_sync::channel::Channel`] instances it hands in; the library
//! itself never allocates and assumes nothing about the platform.

use embassy_sync::{
    blocking_mutex::raw::CriticalSectionRawMutex,
    channel::{Channel, Receiver, Sender},
};
use futures_util::{future::select, future::Either, pin_mut};

use crate::catalog::batch::CatalogBatch;
use crate::error::FetchHandleError;
use crate::fetch::fetcher::{CatalogFetcher, FetchAbort, FetchOutcome};
use crate::fetch::traits::{
    delay_timer::DelayTimer, idle_signal::IdleSignal, status_display::StatusDisplay,
};

/// Commands queued by producer tasks.
#[derive(Clone)]
pub enum FetchCommand {
    /// Start a deferred fetch.
    Fetch,
    /// Abort the fetch currently in flight. Ignored when none is.
    Abort,
}

/// Service assembling the fetch components.
pub struct FetchService<'a, T, D, const CMD_CAP: usize, const BATCH_CAP: usize>
where
    T: DelayTimer,
    D: StatusDisplay,
{
    fetcher: CatalogFetcher<T, D>,
    command_channel: &'a Channel<CriticalSectionRawMutex, FetchCommand, CMD_CAP>,
    batch_channel: Option<&'a Channel<CriticalSectionRawMutex, CatalogBatch, BATCH_CAP>>,
    idle: Option<&'a mut dyn IdleSignal>,
}

impl<'a, T, D, const CMD_CAP: usize, const BATCH_CAP: usize>
    FetchService<'a, T, D, CMD_CAP, BATCH_CAP>
where
    T: DelayTimer,
    D: StatusDisplay,
{
    /// Wrap an already-configured [`CatalogFetcher`].
    ///
    /// The command channel drives the service; the batch channel is the
    /// delivery path and may be absent, in which case completed batches are
    /// dropped (the no-consumer case). The idle signal, when provided, is
    /// toggled around every fetch exactly as in the direct API.
    pub fn new(
        fetcher: CatalogFetcher<T, D>,
        command_channel: &'a Channel<CriticalSectionRawMutex, FetchCommand, CMD_CAP>,
        batch_channel: Option<&'a Channel<CriticalSectionRawMutex, CatalogBatch, BATCH_CAP>>,
        idle: Option<&'a mut dyn IdleSignal>,
    ) -> Self {
        Self {
            fetcher,
            command_channel,
            batch_channel,
            idle,
        }
    }

    /// Split into handle/receiver/runner components.
    pub fn into_parts(self) -> FetchServiceParts<'a, T, D, CMD_CAP, BATCH_CAP> {
        let handle = FetchHandle {
            sender: self.command_channel.sender(),
        };
        let batches = self.batch_channel.map(|channel| FetchBatches {
            receiver: channel.receiver(),
        });
        FetchServiceParts {
            handle,
            batches,
            runner: FetchRunner {
                fetcher: self.fetcher,
                command_channel: self.command_channel,
                batch_channel: self.batch_channel,
                idle: self.idle,
            },
        }
    }
}

/// Bundle returned by [`FetchService::into_parts`].
pub struct FetchServiceParts<'a, T, D, const CMD_CAP: usize, const BATCH_CAP: usize>
where
    T: DelayTimer,
    D: StatusDisplay,
{
    pub handle: FetchHandle<'a, CMD_CAP>,
    pub batches: Option<FetchBatches<'a, BATCH_CAP>>,
    pub runner: FetchRunner<'a, T, D, CMD_CAP, BATCH_CAP>,
}

/// Runner that drives the fetch loop.
pub struct FetchRunner<'a, T, D, const CMD_CAP: usize, const BATCH_CAP: usize>
where
    T: DelayTimer,
    D: StatusDisplay,
{
    fetcher: CatalogFetcher<T, D>,
    command_channel: &'a Channel<CriticalSectionRawMutex, FetchCommand, CMD_CAP>,
    batch_channel: Option<&'a Channel<CriticalSectionRawMutex, CatalogBatch, BATCH_CAP>>,
    idle: Option<&'a mut dyn IdleSignal>,
}

impl<'a, T, D, const CMD_CAP: usize, const BATCH_CAP: usize>
    FetchRunner<'a, T, D, CMD_CAP, BATCH_CAP>
where
    T: DelayTimer,
    D: StatusDisplay,
{
    /// Endless command loop.
    ///
    /// At most one fetch is in flight at a time. While one is, the command
    /// channel stays armed so an [`FetchCommand::Abort`] can interrupt the
    /// delay; further [`FetchCommand::Fetch`] commands arriving mid-flight
    /// are coalesced into the running one. Completed batches are forwarded
    /// to the batch channel when one is attached.
    pub async fn drive(self) {
        let Self {
            mut fetcher,
            command_channel,
            batch_channel,
            mut idle,
        } = self;
        let abort = FetchAbort::new();

        loop {
            match command_channel.receive().await {
                FetchCommand::Abort => {
                    // No fetch in flight: stale abort, nothing to interrupt.
                    #[cfg(feature = "defmt")]
                    defmt::debug!("Stale abort command ignored");
                }
                FetchCommand::Fetch => {
                    abort.reset();

                    let outcome = {
                        let idle_ref: Option<&mut dyn IdleSignal> =
                            idle.as_mut().map(|s| &mut **s as &mut dyn IdleSignal);
                        let fetch =
                            fetcher.schedule_abortable(None, idle_ref, &abort);
                        pin_mut!(fetch);

                        loop {
                            let next_command = command_channel.receive();
                            pin_mut!(next_command);

                            match select(fetch.as_mut(), next_command).await {
                                Either::Left((outcome, _)) => break outcome,
                                Either::Right((FetchCommand::Abort, _)) => {
                                    abort.abort();
                                }
                                Either::Right((FetchCommand::Fetch, _)) => {
                                    // A fetch is already in flight: coalesce.
                                    #[cfg(feature = "defmt")]
                                    defmt::debug!("Fetch command coalesced into running fetch");
                                }
                            }
                        }
                    };

                    if let FetchOutcome::Completed(batch) = outcome {
                        if let Some(batch_ch) = batch_channel {
                            batch_ch.send(batch).await;
                        }
                    }
                }
            }
        }
    }
}

/// Request handle feeding the command loop.
pub struct FetchHandle<'a, const CMD_CAP: usize> {
    sender: Sender<'a, CriticalSectionRawMutex, FetchCommand, CMD_CAP>,
}

impl<'a, const CMD_CAP: usize> FetchHandle<'a, CMD_CAP> {
    /// Queue a fetch, waiting for a free slot in the command channel.
    pub async fn request_fetch(&self) {
        self.sender.send(FetchCommand::Fetch).await;
    }

    /// Queue a fetch without waiting.
    ///
    /// Returns [`FetchHandleError::QueueFull`] when the command channel has
    /// no free slot; the command is not enqueued in that case.
    pub fn try_request_fetch(&self) -> Result<(), FetchHandleError> {
        self.sender
            .try_send(FetchCommand::Fetch)
            .map_err(|_| FetchHandleError::QueueFull)
    }

    /// Queue an abort for the fetch currently in flight.
    pub async fn abort(&self) {
        self.sender.send(FetchCommand::Abort).await;
    }
}

/// Receiver returning completed batches.
pub struct FetchBatches<'a, const BATCH_CAP: usize> {
    receiver: Receiver<'a, CriticalSectionRawMutex, CatalogBatch, BATCH_CAP>,
}

impl<'a, const BATCH_CAP: usize> FetchBatches<'a, BATCH_CAP> {
    /// Wait for the next completed batch.
    pub async fn recv(&mut self) -> CatalogBatch {
        self.receiver.receive().await
    }
}
