//! Seatmap - pick a seat in one of the rooms
//!
//! Terminal front-end with a home tab (profile hero) and an explore tab
//! (roster strip and room seating).

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod render;
mod shell;
mod state;

use state::{AppState, Tab};

#[derive(Parser)]
#[command(name = "seatmap")]
#[command(about = "Pick yourself or a contact and assign them a seat", long_about = None)]
struct Cli {
    /// Roster file (TOML) replacing the built-in contacts
    #[arg(long, env = "SEATMAP_ROSTER")]
    roster: Option<PathBuf>,

    /// Tab to open on start
    #[arg(long, value_enum, default_value_t = Tab::Explore)]
    tab: Tab,

    /// Print the explore screen as JSON and exit
    #[arg(long)]
    json: bool,
}

fn main() {
    // Logs go to stderr so they never interleave with the screen
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    tracing::info!("Starting Seatmap");

    let roster = match seatmap_core::load_roster(cli.roster) {
        Ok(roster) => roster,
        Err(e) => {
            tracing::error!("Failed to load roster: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState::new(roster, cli.tab);

    if cli.json {
        match state.session.lock().explore_view().to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                tracing::error!("Failed to serialize view: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = shell::run(&state, stdin.lock(), stdout.lock()) {
        tracing::error!("Terminal error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Seatmap closed");
}
