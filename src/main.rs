use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

mod client;
mod commands;
mod constants;
mod domain;
mod logging;
mod state;
mod theme;
mod tui;
mod ui;
mod widgets;

use crate::domain::{ContentCatalog, DailyPicks, daily_rng};
use crate::state::{App, AppConfig, SiteSection, StartupOptions};

// Positively version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

const LOGO: &str = r"
 ✦  P o s i t i v e l y  ✦
    affirmations · quotes · books
";

/// Positively - affirmations, quotes and book search in the terminal
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use only the built-in catalog; no network requests
    #[arg(long, global = true)]
    offline: bool,

    /// Page to open on startup
    #[arg(long, global = true, value_enum)]
    page: Option<SiteSection>,

    /// Load affirmations and quotes from this JSON file
    #[arg(long, global = true, value_name = "PATH")]
    content: Option<PathBuf>,

    /// Write logs here instead of the config directory
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print today's quote and affirmation, then exit
    Daily,
    /// Write the effective settings to the config file
    InitConfig,
    /// Display version with the logo
    Version,
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let mut config = AppConfig::load();
    if cli.offline {
        config.offline = true;
    }
    if cli.content.is_some() {
        config.content_file.clone_from(&cli.content);
    }
    let catalog = Arc::new(ContentCatalog::load_or_builtin(
        config.content_file.as_deref(),
    ));

    if let Some(command) = &cli.command {
        return handle_cli_command(command, &config, &catalog);
    }

    let options = StartupOptions { section: cli.page };
    let mut app = App::new(config, catalog, options)?;

    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal).await;
    tui::restore()?;
    result
}

/// Runs a one-shot subcommand.
fn handle_cli_command(
    command: &Commands,
    config: &AppConfig,
    catalog: &ContentCatalog,
) -> Result<()> {
    match command {
        Commands::InitConfig => {
            config.save()?;
            println!("Wrote {}", AppConfig::config_path()?.display());
        }
        Commands::Version => {
            println!("{LOGO}");
            println!("v{VERSION}");
        }
        Commands::Daily => {
            let picks = if config.stable_daily {
                DailyPicks::choose(catalog, &mut daily_rng(Local::now().date_naive()))
            } else {
                DailyPicks::choose(catalog, &mut rand::thread_rng())
            };
            match picks {
                Some(picks) => {
                    println!("Quote of the Day:\n  {}\n", picks.quote);
                    println!("Affirmation of the Day:\n  {}", picks.affirmation);
                }
                None => eprintln!("The catalog has no quotes or affirmations."),
            }
        }
    }
    Ok(())
}
