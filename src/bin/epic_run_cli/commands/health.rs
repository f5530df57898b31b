// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors
// ABOUTME: Health sync command for epic-run-cli
// ABOUTME: Drives the sync service over the synthetic platform and credits results to a profile

use crate::helpers::display;
use anyhow::{bail, Result};
use chrono::{Local, Utc};
use epic_run_server::database::Database;
use epic_run_server::health_sync::{HealthSyncService, SyntheticHealthPlatform};
use epic_run_server::models::HealthData;
use epic_run_server::services::progress;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Activity recorded on the synthetic platform before syncing
#[derive(Debug, Clone, Copy)]
pub struct SeedActivity {
    pub steps: f64,
    pub meters: f64,
    pub calories: f64,
}

/// Activity added on the synthetic platform after each refresh
const TICK_ACTIVITY: SeedActivity = SeedActivity {
    steps: 650.0,
    meters: 500.0,
    calories: 25.0,
};

pub async fn run_sync(
    db: Option<&Database>,
    user_id: Option<Uuid>,
    seed: SeedActivity,
    ticks: u32,
    interval: Duration,
) -> Result<()> {
    let platform = SyntheticHealthPlatform::new();
    platform.record_activity(seed.steps, seed.meters, seed.calories, Utc::now());

    let service = Arc::new(HealthSyncService::new(Arc::new(platform.clone())));
    if !service.initialize().await || !service.request_authorization().await {
        display::sync_status(&service.status().await);
        bail!("Health platform is not usable");
    }

    let (tx, mut rx) = mpsc::unbounded_channel::<HealthData>();
    let handle = service.start_background_sync(
        interval,
        Arc::new(move |data| {
            // Receiver gone means the command is finishing
            let _ = tx.send(data);
        }),
    )?;

    for tick in 1..=ticks.max(1) {
        let Some(data) = rx.recv().await else {
            break;
        };
        println!("Sync {tick}:");
        display::health_data(&data);

        if let (Some(db), Some(user_id)) = (db, user_id) {
            let outcome =
                progress::apply_health_snapshot(db, user_id, Local::now().date_naive(), &data)
                    .await?;
            display::outcome(&outcome);
        }

        platform.record_activity(
            TICK_ACTIVITY.steps,
            TICK_ACTIVITY.meters,
            TICK_ACTIVITY.calories,
            Utc::now(),
        );
    }

    handle.stop().await;
    display::sync_status(&service.status().await);
    Ok(())
}
