use anyhow::Result;
use chrono::Utc;
use dialoguer::Input;
use evman_core::error::EvmanError;
use evman_core::event::{Event, EventDraft};
use evman_core::evman::Evman;
use owo_colors::OwoColorize;

use crate::render;
use crate::utils::prompt::{
    parse_date, parse_time, prompt_category, prompt_max_attendees, prompt_priority,
    prompt_with_retry,
};

#[allow(clippy::too_many_arguments)]
pub fn run(
    evman: &Evman,
    title: Option<String>,
    description: Option<String>,
    date: Option<String>,
    time: Option<String>,
    location: Option<String>,
    category: Option<String>,
    priority: Option<String>,
    max_attendees: Option<u32>,
) -> Result<()> {
    let interactive = title.is_none()
        || description.is_none()
        || date.is_none()
        || time.is_none()
        || location.is_none()
        || category.is_none()
        || priority.is_none();

    // --- Title ---
    let title = match title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Title")
            .interact_text()?,
    };

    // --- Description ---
    let description = match description {
        Some(d) => d,
        None => Input::<String>::new()
            .with_prompt("  Description")
            .interact_text()?,
    };

    // --- Date / Time ---
    let date = match date {
        Some(d) => parse_date(&d)?,
        None => prompt_with_retry("  Date (YYYY-MM-DD)", parse_date)?,
    };

    let time = match time {
        Some(t) => parse_time(&t)?,
        None => prompt_with_retry("  Time (HH:MM)", parse_time)?,
    };

    // --- Location ---
    let location = match location {
        Some(l) => l,
        None => Input::<String>::new()
            .with_prompt("  Location")
            .interact_text()?,
    };

    // --- Category / Priority ---
    let category = match category {
        Some(c) => c.parse().map_err(|e: String| anyhow::anyhow!(e))?,
        None => prompt_category(None)?,
    };

    let priority = match priority {
        Some(p) => p.parse().map_err(|e: String| anyhow::anyhow!(e))?,
        None => prompt_priority(None)?,
    };

    // --- Max attendees (optional) ---
    let max_attendees = if max_attendees.is_some() {
        max_attendees
    } else if interactive {
        prompt_max_attendees(None)?
    } else {
        None
    };

    let draft = EventDraft {
        title,
        description,
        date: Some(date),
        time: Some(time),
        location,
        category: Some(category),
        priority: Some(priority),
        max_attendees,
    };

    let event = match Event::from_draft(&draft, Utc::now()) {
        Ok(event) => event,
        Err(EvmanError::Validation(errors)) => {
            eprintln!("{}", render::field_errors(&errors));
            anyhow::bail!("Event not created");
        }
        Err(e) => return Err(e.into()),
    };

    evman.event_store().insert(event.clone())?;

    if interactive {
        println!();
    }
    println!("{}", format!("  Created: {}", event.title).green());

    Ok(())
}
