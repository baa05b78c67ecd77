use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod extract;
mod scrape;

#[derive(Debug, Parser)]
#[command(name = "zauba-cli")]
#[command(about = "Scrape recently registered companies from ZaubaCorp into CSV")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape the listing page and its company detail pages (default)
    Scrape {
        /// Maximum number of company pages to fetch
        #[arg(long)]
        max_companies: Option<usize>,
        /// CSV file to write
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Save the raw listing HTML to this path before parsing
        #[arg(long)]
        dump_listing: Option<PathBuf>,
    },
    /// Run the detail-page extractor on a saved HTML file
    Extract {
        /// Saved company detail page
        file: PathBuf,
        /// Source URL to record (defaults to the file path)
        #[arg(long)]
        url: Option<String>,
    },
}

/// Log level for commands that run without loading config.
const DEFAULT_LOG_LEVEL: &str = "info";

/// The subcommand to run; no subcommand means a default scrape.
fn command_or_default(command: Option<Commands>) -> Commands {
    command.unwrap_or(Commands::Scrape {
        max_companies: None,
        output: None,
        dump_listing: None,
    })
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    match command_or_default(cli.command) {
        Commands::Scrape {
            max_companies,
            output,
            dump_listing,
        } => {
            let config = zauba_core::load_app_config_from_env()?;
            init_tracing(&config.log_level)?;
            scrape::run_scrape(
                &config,
                max_companies,
                output.as_deref(),
                dump_listing.as_deref(),
            )
            .await?;
        }
        Commands::Extract { file, url } => {
            init_tracing(DEFAULT_LOG_LEVEL)?;
            extract::run_extract(&file, url.as_deref())?;
        }
    }

    Ok(())
}
