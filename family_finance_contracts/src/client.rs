use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use ethers::{
    core::k256::ecdsa::SigningKey,
    middleware::SignerMiddleware,
    providers::{Http, Provider},
    signers::{LocalWallet, Signer, Wallet},
};

use crate::config::NetworkProfile;

pub type EtherSigner = SignerMiddleware<Provider<Http>, Wallet<SigningKey>>;

/// Build the signing client used to submit deployment transactions against
/// `profile`. A profile with no endpoint or an empty credential set cannot
/// submit signed transactions, and that surfaces here.
pub fn get_deployer_client(profile: &NetworkProfile) -> Result<Arc<EtherSigner>> {
    let rpc_url = profile
        .rpc_url
        .as_deref()
        .ok_or_else(|| anyhow!("no RPC endpoint configured for network '{}'", profile.name))?;
    let private_key = profile.accounts.first().ok_or_else(|| {
        anyhow!(
            "no signing credential configured for network '{}'",
            profile.name
        )
    })?;

    let wallet = private_key
        .parse::<LocalWallet>()
        .with_context(|| format!("invalid signing key for network '{}'", profile.name))?
        .with_chain_id(profile.chain_id);

    let provider = Provider::<Http>::try_from(rpc_url)
        .with_context(|| format!("invalid RPC endpoint for network '{}'", profile.name))?;

    Ok(Arc::new(SignerMiddleware::new(provider, wallet)))
}
