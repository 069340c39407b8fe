use anyhow::Result;
use clipchat::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
