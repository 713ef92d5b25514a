use anyhow::Result;
use simchat::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
