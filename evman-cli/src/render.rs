//! TUI rendering for evman types.
//!
//! Extension traits adding colored terminal rendering to evman-core types
//! using owo_colors.

use chrono::NaiveDateTime;
use evman_core::event::{Event, EventStatus, Priority};
use evman_core::validate::FieldError;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventStatus {
    fn render(&self) -> String {
        match self {
            EventStatus::Today => "[today]".green().to_string(),
            EventStatus::Upcoming => "[upcoming]".magenta().to_string(),
            EventStatus::Past => "[past]".dimmed().to_string(),
        }
    }
}

impl Render for Priority {
    fn render(&self) -> String {
        match self {
            Priority::Low => self.label().green().to_string(),
            Priority::Medium => self.label().yellow().to_string(),
            Priority::High => self.label().red().to_string(),
        }
    }
}

/// One listing line: time, title, status badge, id.
pub fn event_line(event: &Event, now: NaiveDateTime) -> String {
    let time = format!("{:>5}", event.time.format("%H:%M"));
    let id_tag = format!("[{}]", event.id);
    format!(
        "{} {} {} {}",
        time,
        event.title,
        event.status(now).render(),
        id_tag.dimmed()
    )
}

/// Full detail view for `evman show`.
pub fn event_detail(event: &Event, now: NaiveDateTime) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "{} {}",
        event.title.bold(),
        event.status(now).render()
    ));
    lines.push(format!("  {}", event.description));
    lines.push(String::new());
    lines.push(format!(
        "  {}  {} {}",
        "When:    ".dimmed(),
        event.date.format("%Y-%m-%d"),
        event.time.format("%H:%M")
    ));
    lines.push(format!("  {}  {}", "Where:   ".dimmed(), event.location));
    lines.push(format!("  {}  {}", "Category:".dimmed(), event.category));
    lines.push(format!(
        "  {}  {}",
        "Priority:".dimmed(),
        event.priority.render()
    ));
    if let Some(max) = event.max_attendees {
        lines.push(format!(
            "  {}  up to {} attendees",
            "Capacity:".dimmed(),
            max
        ));
    }
    lines.push(String::new());
    lines.push(format!("  {}  {}", "Id:      ".dimmed(), event.id));
    lines.push(format!(
        "  {}  {}",
        "Created: ".dimmed(),
        event.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    lines.push(format!(
        "  {}  {}",
        "Updated: ".dimmed(),
        event.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    lines.join("\n")
}

/// Render validation failures, one red line per field.
pub fn field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| {
            format!(
                "  {} {}",
                format!("{}:", e.field).dimmed(),
                e.message.red()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
