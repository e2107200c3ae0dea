// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

/// Format of a date container, e.g. `2025-01-15`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which date container to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateChoice {
    /// The current date.
    Today,

    /// One day before the current date.
    Yesterday,

    /// A specific date.
    Custom(NaiveDate),
}

impl DateChoice {
    /// Resolves the choice to a date container relative to `now`.
    pub fn resolve(&self, now: &DateTime<Utc>) -> NaiveDate {
        match self {
            DateChoice::Today => now.date_naive(),
            DateChoice::Yesterday => now.date_naive() - TimeDelta::days(1),
            DateChoice::Custom(date) => *date,
        }
    }
}

impl FromStr for DateChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "today" => return Ok(Self::Today),
            "yesterday" => return Ok(Self::Yesterday),
            _ => {}
        }

        parse_date(s).map(Self::Custom)
    }
}

impl fmt::Display for DateChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateChoice::Today => write!(f, "today"),
            DateChoice::Yesterday => write!(f, "yesterday"),
            DateChoice::Custom(date) => write!(f, "{}", date.format(DATE_FORMAT)),
        }
    }
}

/// Parses a date in the `YYYY-MM-DD` format.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| format!("Invalid date `{s}`. Expected format: YYYY-MM-DD"))
}
