use anyhow::Result;
use evman_core::evman::Evman;
use owo_colors::OwoColorize;

pub fn run(evman: &Evman) -> Result<()> {
    evman.session_store().clear()?;
    println!("{}", "Logged out".dimmed());
    Ok(())
}
