// ABOUTME: Epic Run CLI - command-line tool for journeys, profiles, and health sync
// ABOUTME: Computes journey positions offline and drives the profile store directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors
//!
//! Usage:
//! ```bash
//! # List destinations
//! epic-run-cli destinations
//!
//! # Where am I after 235 km towards Mordor?
//! epic-run-cli progress --destination mordor --covered 235
//!
//! # Map overlay payload as JSON
//! epic-run-cli map --destination hogwarts --covered 25
//!
//! # Seed a demo runner with a week of activity
//! epic-run-cli seed-demo
//!
//! # Pull synthetic health data into a profile three times, two seconds apart
//! epic-run-cli health-sync --user <uuid> --ticks 3 --interval-secs 2
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use epic_run_server::constants::env_config;
use epic_run_server::database::Database;
use std::env;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "epic-run-cli",
    about = "Epic Run journey tracker CLI",
    long_about = "Command-line tool for exploring journeys, managing runner profiles, and exercising health data sync."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List journey destinations
    Destinations,

    /// Show progress and current position for a journey
    Progress {
        /// Destination id
        #[arg(long)]
        destination: String,

        /// Kilometers covered
        #[arg(long, default_value_t = 0.0)]
        covered: f64,

        /// Print every path point
        #[arg(long)]
        show_path: bool,
    },

    /// Print the map overlay payload as JSON
    Map {
        /// Destination id
        #[arg(long)]
        destination: String,

        /// Kilometers covered
        #[arg(long, default_value_t = 0.0)]
        covered: f64,
    },

    /// Profile management commands
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Create a demo runner with onboarding, a journey, and a week of runs
    SeedDemo {
        /// Destination for the demo journey
        #[arg(long, default_value = "mordor")]
        destination: String,
    },

    /// Read synthetic health data through the sync service
    HealthSync {
        /// Profile to credit the synced activity to
        #[arg(long)]
        user: Option<Uuid>,

        /// Steps recorded before the first sync
        #[arg(long, default_value_t = 8_000.0)]
        steps: f64,

        /// Meters recorded before the first sync
        #[arg(long, default_value_t = 6_200.0)]
        meters: f64,

        /// Calories recorded before the first sync
        #[arg(long, default_value_t = 310.0)]
        calories: f64,

        /// Number of background refreshes to wait for
        #[arg(long, default_value_t = 1)]
        ticks: u32,

        /// Seconds between background refreshes
        #[arg(long, default_value_t = 2)]
        interval_secs: u64,
    },
}

#[derive(Subcommand)]
enum ProfileCommand {
    /// Create a profile
    Create {
        /// Contact email
        #[arg(long)]
        email: Option<String>,

        /// Display name
        #[arg(long)]
        name: Option<String>,
    },

    /// Show a profile with stats and achievements
    Show {
        /// Profile id
        user_id: Uuid,
    },

    /// Start a journey
    StartJourney {
        /// Profile id
        user_id: Uuid,

        /// Destination id
        #[arg(long)]
        destination: String,
    },

    /// Log a manual run for today
    LogRun {
        /// Profile id
        user_id: Uuid,

        /// Kilometers run
        #[arg(long)]
        km: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    match cli.command {
        Command::Destinations => {
            commands::journey::list_destinations();
            Ok(())
        }
        Command::Progress {
            destination,
            covered,
            show_path,
        } => commands::journey::show_progress(&destination, covered, show_path),
        Command::Map {
            destination,
            covered,
        } => commands::journey::print_map_overlay(&destination, covered),
        Command::Profile { action } => {
            let db = open_database(cli.database_url).await?;
            match action {
                ProfileCommand::Create { email, name } => {
                    commands::profile::create(&db, email, name).await
                }
                ProfileCommand::Show { user_id } => commands::profile::show(&db, user_id).await,
                ProfileCommand::StartJourney {
                    user_id,
                    destination,
                } => commands::profile::start_journey(&db, user_id, &destination).await,
                ProfileCommand::LogRun { user_id, km } => {
                    commands::profile::log_run(&db, user_id, km).await
                }
            }
        }
        Command::SeedDemo { destination } => {
            let db = open_database(cli.database_url).await?;
            commands::profile::seed_demo(&db, &destination).await
        }
        Command::HealthSync {
            user,
            steps,
            meters,
            calories,
            ticks,
            interval_secs,
        } => {
            let db = match user {
                Some(_) => Some(open_database(cli.database_url).await?),
                None => None,
            };
            commands::health::run_sync(
                db.as_ref(),
                user,
                commands::health::SeedActivity {
                    steps,
                    meters,
                    calories,
                },
                ticks,
                Duration::from_secs(interval_secs),
            )
            .await
        }
    }
}

async fn open_database(override_url: Option<String>) -> Result<Database> {
    let database_url = override_url
        .or_else(|| env::var(env_config::DATABASE_URL).ok())
        .unwrap_or_else(|| "sqlite:./data/epic_run.db".into());
    info!("Connecting to database: {}", database_url);
    Ok(Database::new(&database_url).await?)
}
