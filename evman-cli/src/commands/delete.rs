use anyhow::Result;
use dialoguer::Confirm;
use evman_core::evman::Evman;
use owo_colors::OwoColorize;

pub fn run(evman: &Evman, id: &str, yes: bool) -> Result<()> {
    let store = evman.event_store();
    let event = store.find(id)?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "  Are you sure you want to delete \"{}\"?",
                event.title
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Aborted".dimmed());
            return Ok(());
        }
    }

    store.delete(id)?;
    println!("{}", format!("  Deleted: {}", event.title).green());

    Ok(())
}
