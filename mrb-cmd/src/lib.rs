//! Command implementations for the river basin dashboard CLI.
//!
//! `serve` hosts the built dashboard and its data endpoints; `inspect` loads
//! a dataset and reports what the map would draw from it.

use clap::Subcommand;

pub mod config;
pub mod handlers;
pub mod inspect;
pub mod remote;
pub mod routes;
pub mod serve;

#[derive(Subcommand)]
pub enum Command {
    /// Serve the dashboard, static data and the data endpoints
    Serve(config::ServeArgs),

    /// Load a basin dataset and print its summary
    Inspect {
        /// Path to the GeoJSON dataset
        #[arg(short = 'f', long, default_value = mrb_basins::loader::BASINS_FILE)]
        file: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Serve(args) => serve::run_serve(args).await,
        Command::Inspect { file } => inspect::run_inspect(&file),
    }
}
