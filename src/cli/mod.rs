use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod chat;
pub mod init;
pub mod query;
pub mod serve;

use crate::core::AppConfig;

#[derive(Subcommand)]
enum Command {
    /// Create the storage directory and database
    Init {},
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "2222")]
        port: String,
    },
    /// Show the clip search query built from some text
    Query {
        #[arg(long)]
        text: String,
        /// Don't anchor the query with "movie"
        #[arg(long, default_value = "false")]
        no_context: bool,
    },
    /// Start an interactive chat session
    Chat {
        #[arg(long)]
        session_id: Option<String>,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Init {}) => {
            init::run(&AppConfig::default()).await?;
        }
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await?;
        }
        Some(Command::Query { text, no_context }) => {
            query::run(&text, !no_context);
        }
        Some(Command::Chat { session_id }) => {
            chat::run(AppConfig::default(), session_id).await?;
        }
        None => {}
    }

    Ok(())
}
