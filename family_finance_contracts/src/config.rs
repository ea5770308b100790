use dotenv::dotenv;

const SEPOLIA_RPC_URL_ENV_VAR: &str = "SEPOLIA_RPC_URL";
const SEPOLIA_PRIVATE_KEY_ENV_VAR: &str = "SEPOLIA_PRIVATE_KEY";

pub const LOCAL_NETWORK_NAME: &str = "hardhat";
pub const SEPOLIA_NETWORK_NAME: &str = "sepolia";

const DEFAULT_LOCAL_RPC_URL: &str = "http://localhost:8545";
const LOCAL_CHAIN_ID: u64 = 31337;
const SEPOLIA_CHAIN_ID: u64 = 11155111;

// First funded account of a freshly started local dev node.
const DEFAULT_LOCAL_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

pub const SOLIDITY_VERSION: &str = "0.8.30";
pub const OPTIMIZER_RUNS: u32 = 200;

/// Compiler settings handed through to the external toolchain. The same
/// settings apply to every invocation, regardless of target network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompilerSettings {
    pub version: String,
    pub optimizer_enabled: bool,
    pub optimizer_runs: u32,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            version: SOLIDITY_VERSION.to_owned(),
            optimizer_enabled: true,
            optimizer_runs: OPTIMIZER_RUNS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NetworkKind {
    /// A local dev node (e.g. `hardhat node` or anvil).
    Simulated,
    /// A remote JSON-RPC endpoint over HTTP.
    RemoteHttp,
}

/// How to reach and authenticate against one network. Built once at startup
/// and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkProfile {
    pub name: String,
    pub kind: NetworkKind,
    pub rpc_url: Option<String>,
    /// Hex private keys usable for signing. May be empty, in which case the
    /// network is unusable for deployments.
    pub accounts: Vec<String>,
    pub chain_id: u64,
}

pub struct ProjectConfig {
    pub solidity: CompilerSettings,
    pub networks: Vec<NetworkProfile>,
}

impl ProjectConfig {
    /// Load from env (plus `.env` if present). Absent sepolia values are
    /// tolerated here and only surface once a deployment is attempted
    /// against that network.
    pub fn load() -> Self {
        dotenv().ok();

        Self::from_env_values(
            std::env::var(SEPOLIA_RPC_URL_ENV_VAR).ok(),
            std::env::var(SEPOLIA_PRIVATE_KEY_ENV_VAR).ok(),
        )
    }

    pub(crate) fn from_env_values(
        sepolia_rpc_url: Option<String>,
        sepolia_private_key: Option<String>,
    ) -> Self {
        let local = NetworkProfile {
            name: LOCAL_NETWORK_NAME.to_owned(),
            kind: NetworkKind::Simulated,
            rpc_url: Some(DEFAULT_LOCAL_RPC_URL.to_owned()),
            accounts: vec![DEFAULT_LOCAL_PRIVATE_KEY.to_owned()],
            chain_id: LOCAL_CHAIN_ID,
        };

        let sepolia = NetworkProfile {
            name: SEPOLIA_NETWORK_NAME.to_owned(),
            kind: NetworkKind::RemoteHttp,
            rpc_url: sepolia_rpc_url,
            accounts: sepolia_private_key.into_iter().collect(),
            chain_id: SEPOLIA_CHAIN_ID,
        };

        Self {
            solidity: CompilerSettings::default(),
            networks: vec![local, sepolia],
        }
    }

    pub fn network(&self, name: &str) -> Option<&NetworkProfile> {
        self.networks.iter().find(|network| network.name == name)
    }
}
