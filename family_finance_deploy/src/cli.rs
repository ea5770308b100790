use std::path::PathBuf;

use clap::Parser;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "family-finance-deploy")]
#[command(
    author,
    version,
    about = "Deploy the family finance contract suite to a configured network"
)]
pub struct Cli {
    /// The verbosity level.
    #[arg(short, long, env = "FF_VERBOSITY", default_value_t = LevelFilter::INFO)]
    pub verbosity: LevelFilter,

    /// The network profile to deploy against.
    #[arg(short, long, env = "FF_NETWORK", default_value = "hardhat")]
    pub network: String,

    /// Root of the compiled contract artifacts directory.
    #[arg(long, env = "FF_ARTIFACTS", default_value = "artifacts")]
    pub artifacts: PathBuf,
}
