// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::LocalBoxFuture};
use termitodo_core::{APP_NAME, TermiTodo};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

use crate::cmd_create::CmdCreate;
use crate::cmd_daemon::CmdDaemon;
use crate::cmd_delete::CmdDelete;
use crate::config::{is_production, parse_config};

const LOG_ENV: &str = "TERMI_TODO_LOG";

/// Run the termi-todo command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Directory holding the todo items, overrides the configuration
    pub data_dir: Option<PathBuf>,

    /// The command to execute, `None` prints the help
    pub command: Option<Commands>,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("A terminal based todo list, one folder per day.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false)
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config <CONFIG> "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/termi-todo/config.toml on Linux and \
MacOS, %APPDATA%/termi-todo/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(-d --"data-dir" <DIR> "Directory holding the todo items")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::DirPath),
            )
            .subcommand(CmdCreate::command())
            .subcommand(CmdDelete::command())
            .subcommand(CmdDaemon::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdCreate::NAME, matches)) => Some(Create(CmdCreate::from(matches)?)),
            Some((CmdDelete::NAME, matches)) => Some(Delete(CmdDelete::from(matches))),
            Some((CmdDaemon::NAME, matches)) => Some(Daemon(CmdDaemon::from(matches))),
            None => None,
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
        };

        Ok(Cli {
            config: matches.get_one("config").cloned(),
            data_dir: matches.get_one("data-dir").cloned(),
            command,
        })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        match self.command {
            Some(command) => command.run(self.config, self.data_dir).await,
            None => Ok(Self::print_bare(&mut io::stdout())?),
        }
    }

    /// Print the help for a bare invocation, nothing in production
    fn print_bare(out: &mut impl io::Write) -> io::Result<()> {
        if is_production() {
            tracing::debug!("no command given in production, exiting");
            return Ok(());
        }
        Self::command().write_help(out)
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Create a new todo item
    Create(CmdCreate),

    /// Delete a todo item
    Delete(CmdDelete),

    /// Run as background service
    Daemon(CmdDaemon),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(
        self,
        config: Option<PathBuf>,
        data_dir: Option<PathBuf>,
    ) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Create(a) => Self::run_with(config, data_dir, |x| a.run(x).boxed_local()).await,
            Delete(a) => Self::run_with(config, data_dir, |x| a.run(x).boxed_local()).await,
            Daemon(a) => {
                let (_, config) = parse_config(config).await?;
                a.run(&config.daemon).await
            }
        }
    }

    async fn run_with<F>(
        config: Option<PathBuf>,
        data_dir: Option<PathBuf>,
        f: F,
    ) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a TermiTodo) -> LocalBoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let (mut core_config, _config) = parse_config(config).await?;
        if let Some(data_dir) = data_dir {
            core_config.data_dir = Some(data_dir);
        }

        let termitodo = TermiTodo::new(core_config)?;
        f(&termitodo).await
    }
}
