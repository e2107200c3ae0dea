// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use termitodo_core::{DATE_FORMAT, DateChoice, Deletion, TermiTodo};

use crate::parser::{arg_date, get_date};
use crate::prompt::{prompt_date, prompt_item};

#[derive(Debug, Clone)]
pub struct CmdDelete {
    pub date: Option<DateChoice>,
    pub id: Option<String>,
}

impl CmdDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete a todo item of a given date")
            .arg(arg_date())
            .arg(arg!(--id <ID> "Identifier of the item, prompted when omitted"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: get_date(matches),
            id: matches.get_one::<String>("id").cloned(),
        }
    }

    pub async fn run(self, termitodo: &TermiTodo) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting todo item...");

        let choice = match self.date {
            Some(choice) => choice,
            None => match prompt_date(termitodo.today())? {
                Some(choice) => choice,
                None => {
                    tracing::info!("user cancelled the date selection");
                    return Ok(());
                }
            },
        };
        let date = termitodo.resolve(choice);
        let date_str = date.format(DATE_FORMAT);

        let id = match self.id {
            Some(id) => id,
            None => {
                let items = termitodo.list(date).await?;
                if items.is_empty() {
                    println!("No todo items found for the selected date: {date_str}");
                    return Ok(());
                }

                match prompt_item(&items)? {
                    Some(id) => id,
                    None => {
                        tracing::info!("user cancelled the item selection");
                        return Ok(());
                    }
                }
            }
        };

        match termitodo.delete(date, &id).await? {
            Deletion::NotFound => println!("{}", format!("Item with ID {id} not found.").yellow()),
            Deletion::Removed { removed_container } => {
                println!("{}", format!("Successfully deleted item {id}").green());
                if let Some(dir) = removed_container {
                    println!("Removed empty directory: {}", dir.display());
                }
            }
        }
        Ok(())
    }
}
