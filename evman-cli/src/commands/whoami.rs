use anyhow::Result;
use evman_core::evman::Evman;
use owo_colors::OwoColorize;

pub fn run(evman: &Evman) -> Result<()> {
    match evman.session_store().current() {
        Some(session) => {
            println!("Logged in as {}", session.username.bold());
            println!(
                "{}",
                format!("Since {}", session.logged_in_at.format("%Y-%m-%d %H:%M UTC")).dimmed()
            );
        }
        None => {
            println!("{}", "Not logged in".dimmed());
        }
    }
    Ok(())
}
