use anyhow::Result;
use chrono::Utc;
use dialoguer::Input;
use evman_core::error::EvmanError;
use evman_core::event::EventDraft;
use evman_core::evman::Evman;
use owo_colors::OwoColorize;

use crate::render;
use crate::utils::prompt::{
    parse_date, parse_time, prompt_category, prompt_max_attendees, prompt_priority,
    prompt_with_retry_default,
};

#[allow(clippy::too_many_arguments)]
pub fn run(
    evman: &Evman,
    id: &str,
    title: Option<String>,
    description: Option<String>,
    date: Option<String>,
    time: Option<String>,
    location: Option<String>,
    category: Option<String>,
    priority: Option<String>,
    max_attendees: Option<u32>,
) -> Result<()> {
    let store = evman.event_store();
    let event = store.find(id)?;

    // With no field flags at all, walk through every field pre-filled with
    // the current value, like the edit form it replaces.
    let interactive = title.is_none()
        && description.is_none()
        && date.is_none()
        && time.is_none()
        && location.is_none()
        && category.is_none()
        && priority.is_none()
        && max_attendees.is_none();

    let mut draft = EventDraft::from(&event);

    if interactive {
        draft.title = Input::new()
            .with_prompt("  Title")
            .default(draft.title.clone())
            .interact_text()?;
        draft.description = Input::new()
            .with_prompt("  Description")
            .default(draft.description.clone())
            .interact_text()?;
        draft.date = Some(prompt_with_retry_default(
            "  Date (YYYY-MM-DD)",
            &event.date.format("%Y-%m-%d").to_string(),
            parse_date,
        )?);
        draft.time = Some(prompt_with_retry_default(
            "  Time (HH:MM)",
            &event.time.format("%H:%M").to_string(),
            parse_time,
        )?);
        draft.location = Input::new()
            .with_prompt("  Location")
            .default(draft.location.clone())
            .interact_text()?;
        draft.category = Some(prompt_category(Some(event.category))?);
        draft.priority = Some(prompt_priority(Some(event.priority))?);
        draft.max_attendees = prompt_max_attendees(event.max_attendees)?;
    } else {
        if let Some(t) = title {
            draft.title = t;
        }
        if let Some(d) = description {
            draft.description = d;
        }
        if let Some(d) = date {
            draft.date = Some(parse_date(&d)?);
        }
        if let Some(t) = time {
            draft.time = Some(parse_time(&t)?);
        }
        if let Some(l) = location {
            draft.location = l;
        }
        if let Some(c) = category {
            draft.category = Some(c.parse().map_err(|e: String| anyhow::anyhow!(e))?);
        }
        if let Some(p) = priority {
            draft.priority = Some(p.parse().map_err(|e: String| anyhow::anyhow!(e))?);
        }
        if let Some(m) = max_attendees {
            draft.max_attendees = Some(m);
        }
    }

    let updated = match event.apply(&draft, Utc::now()) {
        Ok(updated) => updated,
        Err(EvmanError::Validation(errors)) => {
            eprintln!("{}", render::field_errors(&errors));
            anyhow::bail!("Event not updated");
        }
        Err(e) => return Err(e.into()),
    };

    store.update(id, updated.clone())?;

    if interactive {
        println!();
    }
    println!("{}", format!("  Updated: {}", updated.title).green());

    Ok(())
}
