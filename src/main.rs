// ABOUTME: Entry point for shanti — a terminal Naam Jaap counter and assistant.
// ABOUTME: Parses CLI args, loads config, and launches the app.

use clap::Parser;

use shanti::app::App;
use shanti::config::Config;
use shanti::session::SessionStore;

/// A devotional counter with a Gemini-backed assistant.
#[derive(Parser)]
#[command(name = "shanti", version, about)]
struct Cli {
    /// Override the assistant model from config.
    #[arg(long)]
    model: Option<String>,

    /// Delete the stored session history and exit.
    #[arg(long)]
    clear_history: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.clear_history {
        SessionStore::open_default().clear()?;
        println!("Session history cleared.");
        return Ok(());
    }

    let mut config = Config::load()?;
    if let Some(model) = cli.model {
        config.assistant.model = model;
    }

    App::new(config).run().await
}
