use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use ethers::contract::ContractFactory;
use ethers::types::{Address, TxHash};

use crate::artifacts::HardhatArtifacts;
use crate::client::EtherSigner;

/// The family finance contract suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContractKind {
    SmartAllowance,
    CommunitySavings,
    EmployeePayment,
}

impl ContractKind {
    pub fn name(&self) -> &'static str {
        match self {
            ContractKind::SmartAllowance => "SmartAllowance",
            ContractKind::CommunitySavings => "CommunitySavings",
            ContractKind::EmployeePayment => "EmployeePayment",
        }
    }
}

/// Deployment order of the suite. Each contract is only submitted after the
/// previous one is confirmed.
pub const DEPLOY_ORDER: [ContractKind; 3] = [
    ContractKind::SmartAllowance,
    ContractKind::CommunitySavings,
    ContractKind::EmployeePayment,
];

/// A confirmed deployment. Held in memory for the duration of the run only,
/// nothing is persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentRecord {
    pub contract: ContractKind,
    pub address: Address,
    pub transaction_hash: TxHash,
}

/// Where deployment transactions go. The orchestration loop only cares that
/// a contract kind eventually turns into a confirmed record.
#[async_trait]
pub trait DeployTarget {
    async fn deploy(&self, contract: ContractKind) -> Result<DeploymentRecord>;
}

pub struct EthersDeployTarget {
    client: Arc<EtherSigner>,
    artifacts: HardhatArtifacts,
}

impl EthersDeployTarget {
    pub fn new(client: Arc<EtherSigner>, artifacts: HardhatArtifacts) -> Self {
        Self { client, artifacts }
    }
}

#[async_trait]
impl DeployTarget for EthersDeployTarget {
    async fn deploy(&self, contract: ContractKind) -> Result<DeploymentRecord> {
        let artifact = self.artifacts.load(contract.name())?;

        let factory = ContractFactory::new(
            artifact.abi.clone(),
            artifact.bytecode.clone(),
            self.client.clone(),
        );

        tracing::debug!(
            contract = contract.name(),
            "submitting deployment transaction"
        );

        // none of the suite takes constructor arguments
        let (deployed, receipt) = factory
            .deploy(())
            .map_err(|e| anyhow!(e.to_string()))?
            .send_with_receipt()
            .await
            .map_err(|e| anyhow!(e.to_string()))?;

        tracing::debug!(
            contract = contract.name(),
            tx = ?receipt.transaction_hash,
            "deployment confirmed"
        );

        Ok(DeploymentRecord {
            contract,
            address: deployed.address(),
            transaction_hash: receipt.transaction_hash,
        })
    }
}

/// Deploy the full suite strictly in order, logging each confirmed address.
/// The first error aborts the remainder of the sequence; contracts confirmed
/// before it stay deployed.
pub async fn run_deployment(target: &impl DeployTarget) -> Result<Vec<DeploymentRecord>> {
    println!("Deploying contracts...");

    let mut records = Vec::with_capacity(DEPLOY_ORDER.len());
    for contract in DEPLOY_ORDER {
        let record = target.deploy(contract).await?;

        // note that debug fmt of the address is the full '0x..' hex encoding,
        // where as .to_string() (fmt) truncates it
        println!("{} deployed to: {:?}", contract.name(), record.address);

        records.push(record);
    }

    Ok(records)
}
