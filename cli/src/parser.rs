// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Local, Utc};
use clap::{Arg, ArgMatches, arg, value_parser};
use termitodo_core::DateChoice;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

pub fn arg_date() -> Arg {
    arg!(--date <DATE> "Date of the items: today, yesterday or YYYY-MM-DD")
        .value_parser(|s: &str| s.parse::<DateChoice>())
}

pub fn get_date(matches: &ArgMatches) -> Option<DateChoice> {
    matches.get_one::<DateChoice>("date").copied()
}

/// Formats a creation timestamp in the local time zone.
pub fn format_datetime(t: &DateTime<Utc>) -> String {
    t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}
