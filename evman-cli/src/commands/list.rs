use anyhow::Result;
use chrono::{Local, NaiveDate};
use evman_core::evman::Evman;
use evman_core::query::{self, StatusFilter};
use owo_colors::OwoColorize;

use crate::render;

pub fn run(evman: &Evman, search: Option<String>, status: StatusFilter) -> Result<()> {
    let all = evman.event_store().load();
    let total = all.len();
    let now = Local::now().naive_local();

    let events = query::filter_and_sort(all, search.as_deref(), status, now);

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        if total == 0 {
            println!(
                "{}",
                "Get started by creating your first event:\n  evman new".dimmed()
            );
        } else {
            println!("{}", "Try adjusting your search criteria".dimmed());
        }
        return Ok(());
    }

    // Group events by day and print
    let mut current_date: Option<String> = None;

    for event in &events {
        let date_label = format_date_label(event.date, now.date());

        if current_date.as_ref() != Some(&date_label) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", date_label.bold());
            current_date = Some(date_label);
        }

        println!("  {}", render::event_line(event, now));
    }

    println!();
    let mut footer = format!("Showing {} of {} events", events.len(), total);
    if let Some(term) = search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        footer.push_str(&format!(" matching \"{}\"", term));
    }
    println!("{}", footer.dimmed());

    Ok(())
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Fri Mar 20")
fn format_date_label(date: NaiveDate, today: NaiveDate) -> String {
    let diff = (date - today).num_days();
    match diff {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d %Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_label_relative_days() {
        let today = day(2026, 3, 20);
        assert_eq!(format_date_label(today, today), "Today");
        assert_eq!(format_date_label(day(2026, 3, 21), today), "Tomorrow");
    }

    #[test]
    fn date_label_absolute_for_everything_else() {
        let today = day(2026, 3, 20);
        assert_eq!(format_date_label(day(2026, 3, 19), today), "Thu Mar 19 2026");
        assert_eq!(format_date_label(day(2026, 4, 2), today), "Thu Apr 2 2026");
    }
}
