use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use locators_core::config::{ConfigLoader, LocatorsConfig};
use locators_core::{Locator, LocatorsDatabase};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "locators", version, about = "Inspect a locator database")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Configuration file (defaults to ./locators.yaml or ~/.locators/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// List every locator with its type
    List {
        /// Database file (defaults to the configured path)
        database: Option<PathBuf>,
    },
    /// Print a single locator as JSON
    Show {
        name: String,
        #[arg(long)]
        database: Option<PathBuf>,
    },
    /// Exit with an error if the database cannot be loaded
    Check {
        database: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ConfigLoader::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ConfigLoader::load_default().unwrap_or_else(|e| {
            tracing::warn!("Ignoring default config: {}", e);
            LocatorsConfig::default()
        }),
    };

    match args.command {
        Command::List { database } => {
            let database = open(database, &config);
            if let Some(error) = database.error() {
                eprintln!("{}", error);
            }
            for (name, locator) in database.locators() {
                println!("{}", describe(name, locator));
            }
        }
        Command::Show { name, database } => {
            let database = open(database, &config);
            if let Some(error) = database.error() {
                bail!("{}", error);
            }
            let Some(locator) = database.get(&name) else {
                bail!("No locator named '{}'", name);
            };
            println!("{}", serde_json::to_string_pretty(locator)?);
        }
        Command::Check { database } => {
            let database = open(database, &config);
            if let Some(error) = database.error() {
                bail!("{}", error);
            }
            println!("{} locators OK", database.len());
        }
    }

    Ok(())
}

fn open(path: Option<PathBuf>, config: &LocatorsConfig) -> LocatorsDatabase {
    let path = path.unwrap_or_else(|| config.database.path.clone());
    tracing::debug!("Loading locators from {}", path.display());

    let mut database = LocatorsDatabase::with_source(path);
    database.load();
    database
}

fn describe(name: &str, locator: &Locator) -> String {
    let detail = match locator {
        Locator::Browser(l) => format!("{}={}", l.strategy, l.value),
        Locator::Image(l) => l.path.clone(),
        Locator::Ocr(l) => format!("{:?}", l.text),
        Locator::Point(l) => format!("({}, {})", l.x, l.y),
        Locator::Offset(l) => format!("{:+} {:+}", l.x, l.y),
        Locator::Region(l) => {
            let region = l.region();
            format!(
                "{}x{} at ({}, {})",
                region.width(),
                region.height(),
                region.left,
                region.top
            )
        }
        Locator::Size(l) => format!("{}x{}", l.width, l.height),
    };
    format!("{}\t{}\t{}", name, locator.kind(), detail)
}
