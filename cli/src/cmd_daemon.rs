// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, time::Duration};

use clap::{ArgMatches, Command};
use termitodo_core::APP_NAME;
use tokio::time::{self, MissedTickBehavior};

use crate::config::DaemonConfig;

#[derive(Debug, Clone, Copy)]
pub struct CmdDaemon;

impl CmdDaemon {
    pub const NAME: &str = "daemon";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Run as background service")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub async fn run(self, config: &DaemonConfig) -> Result<(), Box<dyn Error>> {
        let interval = config.check_interval.duration();

        println!("Starting {APP_NAME} daemon...");
        println!(
            "Daemon running - checking for reminders {}",
            describe_interval(interval)
        );

        watch(interval, None).await;
        Ok(())
    }
}

/// Ticks every `interval`, stopping after `max_ticks` if given. Returns the number of ticks.
async fn watch(interval: Duration, max_ticks: Option<u64>) -> u64 {
    let mut timer = time::interval(interval);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // the first tick completes immediately
    timer.tick().await;

    let mut ticks = 0;
    while max_ticks.is_none_or(|max| ticks < max) {
        timer.tick().await;
        ticks += 1;
        tracing::debug!(ticks, "checking for reminders");
    }
    ticks
}

fn describe_interval(interval: Duration) -> String {
    let secs = interval.as_secs();
    let (n, unit) = if secs % 3600 == 0 {
        (secs / 3600, "hour")
    } else if secs % 60 == 0 {
        (secs / 60, "minute")
    } else {
        (secs, "second")
    };

    match n {
        1 => format!("every {unit}"),
        n => format!("every {n} {unit}s"),
    }
}
