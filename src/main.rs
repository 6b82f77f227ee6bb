use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mail_labeler::{
    app::LabelerApp,
    config,
    infrastructure::{directories, logging, shutdown},
};

/// Offline-first email categorisation with optional cloud providers.
#[derive(Debug, Parser)]
#[command(name = "mail-labeler", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify a JSON array of messages and print one decision per line.
    Classify {
        messages: PathBuf,
        /// JSON array of label names already present in the mailbox.
        #[arg(long)]
        labels: Option<PathBuf>,
    },
    /// Record a user correction for the sender's domain.
    Learn {
        #[arg(long)]
        sender: String,
        #[arg(long)]
        category: String,
    },
    /// Print classifier diagnostics.
    Stats,
    #[command(subcommand)]
    Keywords(KeywordsCommand),
    #[command(subcommand)]
    Learned(LearnedCommand),
}

/// Manage the user keyword store.
#[derive(Debug, Subcommand)]
enum KeywordsCommand {
    Export { file: PathBuf },
    Import { file: PathBuf },
}

/// Manage patterns learned from corrections.
#[derive(Debug, Subcommand)]
enum LearnedCommand {
    Summary,
    Clear,
    Import { file: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = config::load_config()?;
    let paths = directories::ensure_directories(&config.directories)?;
    logging::init_tracing(&config, &paths)?;

    let (shutdown, _) = shutdown::Shutdown::new();
    shutdown::install_signal_handlers(shutdown.clone());

    let app = LabelerApp::initialize(config, paths, shutdown).await?;
    let outcome = dispatch(&app, cli.command).await;
    app.close().await;
    outcome
}

async fn dispatch(app: &LabelerApp, command: Command) -> Result<()> {
    match command {
        Command::Classify { messages, labels } => {
            app.classify_file(&messages, labels.as_deref()).await?;
        }
        Command::Learn { sender, category } => app.learn(&sender, &category).await?,
        Command::Stats => println!("{}", serde_json::to_string_pretty(&app.stats().await?)?),
        Command::Keywords(KeywordsCommand::Export { file }) => app.export_keywords(&file).await?,
        Command::Keywords(KeywordsCommand::Import { file }) => app.import_keywords(&file).await?,
        Command::Learned(LearnedCommand::Summary) => {
            println!("{}", serde_json::to_string_pretty(&app.learned_summary().await?)?)
        }
        Command::Learned(LearnedCommand::Clear) => app.clear_learned().await?,
        Command::Learned(LearnedCommand::Import { file }) => app.import_learned(&file).await?,
    }
    Ok(())
}
