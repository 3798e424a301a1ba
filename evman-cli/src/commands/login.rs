use anyhow::Result;
use dialoguer::Input;
use evman_core::error::EvmanError;
use evman_core::evman::Evman;
use owo_colors::OwoColorize;

pub fn run(evman: &Evman, username: Option<String>, password: Option<String>) -> Result<()> {
    let username = match username {
        Some(u) => u,
        None => Input::<String>::new()
            .with_prompt("  Username")
            .interact_text()?,
    };

    let password = match password {
        Some(p) => p,
        None => rpassword::prompt_password("  Password: ")?,
    };

    match evman.session_store().login(&username, &password) {
        Ok(session) => {
            println!("{}", format!("Logged in as {}", session.username).green());
            Ok(())
        }
        Err(EvmanError::InvalidCredentials) => {
            anyhow::bail!("Invalid username or password")
        }
        Err(e) => Err(e.into()),
    }
}
