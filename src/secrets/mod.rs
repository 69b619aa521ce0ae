//! Resolving bucket credentials at run time.
//!
//! The usual setup runs the binary under a secrets-injection runner that
//! exports the two credential variables. Azure Key Vault is the fallback for
//! hosts without such a runner.

pub mod azure;
pub mod credentials;

pub use azure::{DeferredKeyVaultSource, KeyVaultSecretStore};
pub use credentials::{
    ChainCredentialSource, Credentials, EnvCredentialSource, KeyVaultCredentialSource,
};

use crate::args::KeyVaultArgs;
use crate::interfaces::CredentialSource;
use crate::utils::log_utils;

/// Build the credential chain for this run: `env` first, then the key vault
/// if one was configured.
///
/// Nothing is read from the vault, and its client secret is not loaded, until
/// `env` reports missing credentials.
pub fn credential_chain(
    env: EnvCredentialSource,
    kv: &KeyVaultArgs,
    verbose: u8,
) -> ChainCredentialSource {
    let mut sources: Vec<Box<dyn CredentialSource>> = vec![Box::new(env)];

    if kv.enabled() {
        log_utils::debug("Key Vault configured as credential fallback", verbose);
        sources.push(Box::new(DeferredKeyVaultSource::new(kv.clone(), verbose)));
    }

    ChainCredentialSource::new(sources)
}
