// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use chrono::NaiveDate;
use cliclack::{input, intro, outro, outro_cancel, select};
use termitodo_core::{DATE_FORMAT, DateChoice, TodoDraft, TodoItem, parse_date};

use crate::parser::format_datetime;

/// Asks for the title and description of a new item.
///
/// Returns `None` when the user cancels.
pub fn prompt_draft(default_description: &str) -> Result<Option<TodoDraft>, Box<dyn Error>> {
    intro("New todo item")?;

    let title: String = match cancellable(
        input("Title:")
            .placeholder("What needs to be done?")
            .validate(|s: &String| {
                if s.trim().is_empty() {
                    Err("Title is required")
                } else {
                    Ok(())
                }
            })
            .interact(),
    )? {
        Some(title) => title,
        None => return cancelled(),
    };

    let description: String = match cancellable(
        input("Description:")
            .placeholder(default_description)
            .required(false)
            .interact(),
    )? {
        Some(description) => description,
        None => return cancelled(),
    };

    outro("Todo item drafted")?;
    Ok(Some(TodoDraft {
        title,
        description: Some(description).filter(|a| !a.trim().is_empty()),
    }))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateOption {
    Today,
    Yesterday,
    Custom,
}

/// Asks which date container to work on.
pub fn prompt_date(today: NaiveDate) -> Result<Option<DateChoice>, Box<dyn Error>> {
    let option = match cancellable(
        select("Select a date:")
            .item(DateOption::Today, "Today", today.format(DATE_FORMAT))
            .item(DateOption::Yesterday, "Yesterday", "")
            .item(DateOption::Custom, "Custom Date", "YYYY-MM-DD")
            .interact(),
    )? {
        Some(option) => option,
        None => return cancelled(),
    };

    let choice = match option {
        DateOption::Today => DateChoice::Today,
        DateOption::Yesterday => DateChoice::Yesterday,
        DateOption::Custom => {
            let today = today.format(DATE_FORMAT).to_string();
            let date: String = match cancellable(
                input("Enter a date (YYYY-MM-DD):")
                    .placeholder("YYYY-MM-DD")
                    .default_input(&today)
                    .validate(|s: &String| parse_date(s).map(|_| ()))
                    .interact(),
            )? {
                Some(date) => date,
                None => return cancelled(),
            };
            DateChoice::Custom(parse_date(&date)?)
        }
    };
    Ok(Some(choice))
}

/// Asks the user to pick one of `items`, returning its id.
pub fn prompt_item(items: &[TodoItem]) -> Result<Option<String>, Box<dyn Error>> {
    intro("View items to delete")?;

    let mut prompt = select("Select an item to delete:");
    for item in items {
        prompt = prompt.item(
            item.id.clone(),
            item.title.as_str(),
            format_datetime(&item.created_at),
        );
    }

    match cancellable(prompt.interact())? {
        Some(id) => Ok(Some(id)),
        None => cancelled(),
    }
}

/// Maps an interrupted prompt (Esc or Ctrl-C) to `None`.
fn cancellable<T>(result: io::Result<T>) -> io::Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e),
    }
}

fn cancelled<T>() -> Result<Option<T>, Box<dyn Error>> {
    outro_cancel("Cancelled")?;
    Ok(None)
}
