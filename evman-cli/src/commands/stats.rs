use anyhow::Result;
use chrono::Local;
use evman_core::evman::Evman;
use evman_core::query;
use owo_colors::OwoColorize;

pub fn run(evman: &Evman) -> Result<()> {
    let events = evman.event_store().load();
    let now = Local::now().naive_local();
    let stats = query::stats(&events, now);

    println!("{}", "Events".bold());
    println!("  Total:     {}", stats.total);
    println!("  Today:     {}", stats.today.green());
    println!("  Upcoming:  {}", stats.upcoming.magenta());
    println!("  Past:      {}", stats.past.dimmed());

    Ok(())
}
