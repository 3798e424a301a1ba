use anyhow::Result;
use chrono::Local;
use evman_core::evman::Evman;

use crate::render;

pub fn run(evman: &Evman, id: &str) -> Result<()> {
    let event = evman.event_store().find(id)?;
    let now = Local::now().naive_local();

    println!("{}", render::event_detail(&event, now));

    Ok(())
}
