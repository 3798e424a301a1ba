//! Shared dialoguer prompts and field parsers for `new` and `edit`.

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use dialoguer::{Input, Select};
use evman_core::event::{Category, Priority};
use owo_colors::OwoColorize;

/// Prompt the user with retry on parse errors.
pub fn prompt_with_retry<T, F>(prompt: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Like [`prompt_with_retry`], pre-filled with a default value.
pub fn prompt_with_retry_default<T, F>(prompt: &str, default: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?;
        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Parse an event date in the form the original entry field uses.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        anyhow::anyhow!("Could not parse date: \"{}\" (expected YYYY-MM-DD)", input)
    })
}

/// Parse an event time, with or without seconds.
pub fn parse_time(input: &str) -> Result<NaiveTime> {
    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| anyhow::anyhow!("Could not parse time: \"{}\" (expected HH:MM)", input))
}

pub fn prompt_category(current: Option<Category>) -> Result<Category> {
    let items: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
    let default = current
        .and_then(|c| Category::ALL.iter().position(|x| *x == c))
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("  Category")
        .items(&items)
        .default(default)
        .interact()?;

    Ok(Category::ALL[selection])
}

pub fn prompt_priority(current: Option<Priority>) -> Result<Priority> {
    let items: Vec<&str> = Priority::ALL.iter().map(|p| p.label()).collect();
    let default = current
        .and_then(|p| Priority::ALL.iter().position(|x| *x == p))
        .unwrap_or(1);

    let selection = Select::new()
        .with_prompt("  Priority")
        .items(&items)
        .default(default)
        .interact()?;

    Ok(Priority::ALL[selection])
}

/// Optional attendee cap; an empty answer means no cap.
pub fn prompt_max_attendees(current: Option<u32>) -> Result<Option<u32>> {
    loop {
        let initial = current.map(|m| m.to_string()).unwrap_or_default();
        let input: String = Input::new()
            .with_prompt("  Max attendees? (skip)")
            .default(initial)
            .show_default(false)
            .interact_text()?;

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        match trimmed.parse::<u32>() {
            Ok(n) => return Ok(Some(n)),
            Err(_) => {
                eprintln!(
                    "  {}",
                    format!("Could not parse number: \"{}\"", trimmed).red()
                );
            }
        }
    }
}
