// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use termitodo_core::{TermiTodo, TodoDraft};

use crate::parser::ArgOutputFormat;
use crate::prompt::prompt_draft;
use crate::todo_formatter::TodoFormatter;

#[derive(Debug, Clone)]
pub struct CmdCreate {
    pub title: Option<String>,
    pub description: Option<String>,

    pub output_format: ArgOutputFormat,
}

impl CmdCreate {
    pub const NAME: &str = "create";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("new")
            .about("Create a new todo item")
            .arg(arg!(-t --title <TITLE> "Title of the todo item, prompted when omitted"))
            .arg(arg!(--description <DESCRIPTION> "Description of the todo item"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let title = matches.get_one::<String>("title").cloned();
        let description = matches.get_one::<String>("description").cloned();
        if title.is_none() && description.is_some() {
            return Err("Title is required when a description is given".into());
        }

        Ok(Self {
            title,
            description,
            output_format: ArgOutputFormat::from(matches),
        })
    }

    pub async fn run(self, termitodo: &TermiTodo) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "creating todo item...");

        let draft = match self.title {
            Some(title) => TodoDraft {
                title,
                description: self.description,
            },
            None => match prompt_draft(termitodo.config().default_description())? {
                Some(draft) => draft,
                None => {
                    tracing::info!("user cancelled the todo creation");
                    return Ok(());
                }
            },
        };

        let item = termitodo.create(draft).await?;

        println!("{}", "Todo item created".green());
        let formatter = TodoFormatter::new().with_output_format(self.output_format);
        println!("{}", formatter.format(&[item]));
        Ok(())
    }
}
