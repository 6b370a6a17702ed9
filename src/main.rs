//! gitgenius - CLI entry point.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gitgenius::confirm::StdinReader;
use gitgenius::format::HttpFormatter;
use gitgenius::workflow::{run_add, WorkflowOptions};

/// Simplify Git usage with AI-powered commit messages.
#[derive(Parser, Debug)]
#[command(name = "gitgenius")]
#[command(about = "A tool to simplify Git usage with AI-powered commit messages")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add files and make a commit with a formatted message, then push the changes.
    Add {
        /// Files to stage for the commit
        #[arg(required = true)]
        files: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Add { files } => {
            let formatter = HttpFormatter::new();
            let mut reader = StdinReader;
            let mut out = std::io::stdout();

            run_add(
                Path::new("."),
                &files,
                &formatter,
                &mut reader,
                &mut out,
                &WorkflowOptions::default(),
            )
            .await
            .context("add workflow failed")?;
        }
    }

    Ok(())
}
