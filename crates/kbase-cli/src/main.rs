use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "kbase")]
#[command(about = "KBase CLI - Ask the enterprise knowledge base", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a single question and print the answer
    Ask {
        /// The question to ask
        query: String,
        /// Print the answer message as JSON
        #[arg(long)]
        json: bool,
        /// Skip the simulated latency and failures
        #[arg(long)]
        instant: bool,
    },
    /// List the documents in the knowledge base
    Documents,
    /// List the suggested starter questions
    Suggestions,
    /// Show the resolved configuration and where it lives
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ask {
            query,
            json,
            instant,
        } => commands::ask::run(&query, json, instant).await?,
        Commands::Documents => commands::documents::list(),
        Commands::Suggestions => commands::suggestions::list(),
        Commands::Config => commands::config::show()?,
    }

    Ok(())
}
