// ABOUTME: Cancellable background task that refreshes health data on a fixed interval
// ABOUTME: Handle-based lifecycle: stop signals the timer, dropping the handle also stops it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

use super::service::HealthSyncService;
use epic_run_core::models::HealthData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

/// Receives each successful background refresh
pub type SyncCallback = Arc<dyn Fn(HealthData) + Send + Sync>;

/// Handle to a running background sync
///
/// Each tick spawns its own fetch, so a slow platform can have several reads
/// in flight. Stopping prevents future ticks only; fetches already started
/// still complete and invoke the callback.
#[derive(Debug)]
pub struct BackgroundSync {
    shutdown_tx: mpsc::Sender<()>,
    timer: JoinHandle<()>,
}

impl BackgroundSync {
    pub(super) fn spawn(
        service: Arc<HealthSyncService>,
        period: Duration,
        callback: SyncCallback,
        active: Arc<AtomicBool>,
    ) -> Self {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        let timer = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let service = Arc::clone(&service);
                        let callback = Arc::clone(&callback);
                        tokio::spawn(async move {
                            if let Some(data) = service.get_today_data().await {
                                callback(data);
                            }
                        });
                    }
                    _ = shutdown_rx.recv() => {
                        debug!("Background health sync received shutdown signal");
                        break;
                    }
                }
            }
            active.store(false, Ordering::Release);
        });

        Self { shutdown_tx, timer }
    }

    /// Stop future ticks and wait for the timer task to exit
    pub async fn stop(self) {
        let Self { shutdown_tx, timer } = self;
        // A full channel means a stop is already pending
        let _ = shutdown_tx.try_send(());
        drop(shutdown_tx);
        if let Err(e) = timer.await {
            debug!(error = %e, "Background health sync task ended abnormally");
        }
    }

    /// Whether the timer task has exited
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }
}
