//! Server settings.

use clap::Args;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Where the alternate data endpoint fetches the dataset from.
pub const DEFAULT_REMOTE_URL: &str =
    "https://storage.googleapis.com/danhvercel/updated_mrb_basins.json";

/// Elements of the remote payload returned by `/api/loadFile`.
pub const DEFAULT_SAMPLE_SIZE: usize = 1000;

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// Directory served under /public (holds updated_mrb_basins.json)
    #[arg(long, default_value = "public")]
    pub public_dir: PathBuf,

    /// Built front-end served for every other path
    #[arg(long, default_value = "dist")]
    pub dist_dir: PathBuf,

    /// Dataset fetched by /api/loadFile
    #[arg(long, default_value = DEFAULT_REMOTE_URL)]
    pub remote_url: String,

    /// Timeout for the remote fetch
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Number of elements kept from the remote payload
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub sample_size: usize,
}
