use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use ethers::abi::Abi;
use ethers::types::Bytes;
use serde::Deserialize;

/// One compiled contract, as emitted by the solidity toolchain into its
/// `artifacts/` output tree. Only the fields needed for deployment are kept.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    pub contract_name: String,
    pub abi: Abi,
    pub bytecode: Bytes,
}

/// Looks up compiled artifacts by contract name, following the
/// `contracts/<Name>.sol/<Name>.json` layout of a hardhat output tree.
pub struct HardhatArtifacts {
    root: PathBuf,
}

impl HardhatArtifacts {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn artifact_path(&self, contract_name: &str) -> PathBuf {
        self.root
            .join("contracts")
            .join(format!("{contract_name}.sol"))
            .join(format!("{contract_name}.json"))
    }

    pub fn load(&self, contract_name: &str) -> Result<ContractArtifact> {
        let path = self.artifact_path(contract_name);

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read contract artifact {}", path.display()))?;
        let artifact = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse contract artifact {}", path.display()))?;

        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_ARTIFACT: &str = r#"{
        "_format": "hh-sol-artifact-1",
        "contractName": "SmartAllowance",
        "sourceName": "contracts/SmartAllowance.sol",
        "abi": [
            { "type": "constructor", "stateMutability": "nonpayable", "inputs": [] },
            {
                "type": "function",
                "name": "owner",
                "stateMutability": "view",
                "inputs": [],
                "outputs": [{ "name": "", "type": "address", "internalType": "address" }]
            }
        ],
        "bytecode": "0x6080604052348015600e575f5ffd5b50607980601a5f395ff3fe",
        "deployedBytecode": "0x",
        "linkReferences": {},
        "deployedLinkReferences": {}
    }"#;

    fn artifacts_with_sample() -> HardhatArtifacts {
        let root = std::env::temp_dir().join(format!("artifacts-{}", uuid::Uuid::new_v4()));
        let contract_dir = root.join("contracts").join("SmartAllowance.sol");
        std::fs::create_dir_all(&contract_dir).unwrap();
        std::fs::write(contract_dir.join("SmartAllowance.json"), SAMPLE_ARTIFACT).unwrap();

        HardhatArtifacts::new(root)
    }

    #[test]
    fn artifact_path_follows_hardhat_layout() {
        let artifacts = HardhatArtifacts::new("artifacts");

        assert_eq!(
            artifacts.artifact_path("CommunitySavings"),
            PathBuf::from("artifacts/contracts/CommunitySavings.sol/CommunitySavings.json")
        );
    }

    #[test]
    fn loads_compiled_artifact() {
        let artifacts = artifacts_with_sample();

        let artifact = artifacts.load("SmartAllowance").unwrap();
        assert_eq!(artifact.contract_name, "SmartAllowance");
        assert_eq!(artifact.abi.functions().count(), 1);
        assert!(!artifact.bytecode.is_empty());
    }

    #[test]
    fn missing_artifact_error_names_the_path() {
        let artifacts = HardhatArtifacts::new("artifacts");

        let err = artifacts.load("EmployeePayment").unwrap_err();
        assert!(format!("{err:#}").contains("EmployeePayment.json"));
    }
}
