// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod cli;
mod cmd_create;
mod cmd_daemon;
mod cmd_delete;
mod config;
mod parser;
mod prompt;
mod table;
mod todo_formatter;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::{CheckInterval, Config, DaemonConfig};
