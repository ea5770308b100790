//! Deploys the family finance contract suite (SmartAllowance,
//! CommunitySavings, EmployeePayment) to a configured network, in that
//! order, and prints each resulting on-chain address.

mod cli;

use anyhow::{anyhow, Result};
use clap::Parser;
use dotenv::dotenv;

use cli::Cli;
use family_finance_contracts::{
    artifacts::HardhatArtifacts,
    client::get_deployer_client,
    config::ProjectConfig,
    deploy::{run_deployment, EthersDeployTarget},
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    // Initialize the logger.
    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity)
        .init();

    let config = ProjectConfig::load();

    tracing::info!(
        solc = %config.solidity.version,
        optimizer_enabled = config.solidity.optimizer_enabled,
        optimizer_runs = config.solidity.optimizer_runs,
        "Compiler settings"
    );

    let profile = config
        .network(&cli.network)
        .ok_or_else(|| anyhow!("unknown network '{}'", cli.network))?;

    tracing::info!(
        network = %profile.name,
        chain_id = profile.chain_id,
        "Using network profile"
    );

    let client = get_deployer_client(profile)?;
    let target = EthersDeployTarget::new(client, HardhatArtifacts::new(cli.artifacts));

    run_deployment(&target).await?;

    Ok(())
}
