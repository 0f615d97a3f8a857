//! MRB CLI - serve the water scarcity dashboard or inspect a basin dataset.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "mrb-cli",
    version,
    about = "Major river basin water scarcity dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: mrb_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Starting mrb-cli");
    mrb_cmd::run(cli.command).await
}
