mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use evman_core::auth::Session;
use evman_core::evman::Evman;
use evman_core::query::StatusFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "evman")]
#[command(about = "Manage your local events from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with demo credentials
    Login {
        #[arg(short, long)]
        username: Option<String>,

        #[arg(short, long)]
        password: Option<String>,
    },
    /// Log out and forget the session
    Logout,
    /// Show who is currently logged in
    Whoami,
    /// List events, filtered and sorted by date and time
    List {
        /// Match events whose title, description or location contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Only show events with this status (all, upcoming, today, past)
        #[arg(long)]
        status: Option<String>,
    },
    /// Show one event in full
    Show { id: String },
    /// Create a new event
    New {
        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// Event date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Event time (HH:MM)
        #[arg(long)]
        time: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        /// One of the fixed categories (e.g. "Community", "Technology")
        #[arg(short, long)]
        category: Option<String>,

        /// low, medium or high
        #[arg(short, long)]
        priority: Option<String>,

        /// Attendee cap (1-10000)
        #[arg(long)]
        max_attendees: Option<u32>,
    },
    /// Edit an existing event
    Edit {
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// Event date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Event time (HH:MM)
        #[arg(long)]
        time: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        /// One of the fixed categories (e.g. "Community", "Technology")
        #[arg(short, long)]
        category: Option<String>,

        /// low, medium or high
        #[arg(short, long)]
        priority: Option<String>,

        /// Attendee cap (1-10000)
        #[arg(long)]
        max_attendees: Option<u32>,
    },
    /// Delete an event
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show event counters (total / today / upcoming / past)
    Stats,
    /// Show resolved configuration paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let evman = Evman::load()?;

    match cli.command {
        Commands::Login { username, password } => commands::login::run(&evman, username, password),
        Commands::Logout => commands::logout::run(&evman),
        Commands::Whoami => commands::whoami::run(&evman),
        Commands::Config => commands::config::run(&evman),
        Commands::List { search, status } => {
            require_session(&evman)?;
            let status = parse_status(status.as_deref())?;
            commands::list::run(&evman, search, status)
        }
        Commands::Show { id } => {
            require_session(&evman)?;
            commands::show::run(&evman, &id)
        }
        Commands::New {
            title,
            description,
            date,
            time,
            location,
            category,
            priority,
            max_attendees,
        } => {
            require_session(&evman)?;
            commands::new::run(
                &evman,
                title,
                description,
                date,
                time,
                location,
                category,
                priority,
                max_attendees,
            )
        }
        Commands::Edit {
            id,
            title,
            description,
            date,
            time,
            location,
            category,
            priority,
            max_attendees,
        } => {
            require_session(&evman)?;
            commands::edit::run(
                &evman,
                &id,
                title,
                description,
                date,
                time,
                location,
                category,
                priority,
                max_attendees,
            )
        }
        Commands::Delete { id, yes } => {
            require_session(&evman)?;
            commands::delete::run(&evman, &id, yes)
        }
        Commands::Stats => {
            require_session(&evman)?;
            commands::stats::run(&evman)
        }
    }
}

fn require_session(evman: &Evman) -> Result<Session> {
    evman.session_store().require().map_err(|_| {
        anyhow::anyhow!(
            "Not logged in.\n\n\
            Log in with:\n  \
            evman login\n\n\
            Demo credentials: admin / admin123 or user / user123"
        )
    })
}

fn parse_status(status: Option<&str>) -> Result<StatusFilter> {
    status
        .map(|s| s.parse::<StatusFilter>())
        .transpose()
        .map_err(|e| anyhow::anyhow!(e))
        .map(Option::unwrap_or_default)
}
