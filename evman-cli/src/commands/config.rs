use anyhow::Result;
use evman_core::config::GlobalConfig;
use evman_core::evman::Evman;
use owo_colors::OwoColorize;

pub fn run(evman: &Evman) -> Result<()> {
    let config_path = GlobalConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:   {}", config_path.display());
    println!("  Data:     {}", evman.display_path().display());
    println!("  Events:   {}", evman.events_path().display());
    println!("  Session:  {}", evman.session_path().display());

    Ok(())
}
