use crate::args::KeyVaultArgs;
use crate::errors::{Result, SyncError};
use crate::interfaces::{CredentialSource, SecretStore};
use crate::secrets::credentials::{Credentials, KeyVaultCredentialSource};
use crate::utils::log_utils;

use azure_core::Url;
use azure_core::auth::TokenCredential;
use azure_identity::ClientSecretCredential;
use azure_security_keyvault::KeyvaultClient;
use reqwest::Client;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Azure Key Vault backed [`SecretStore`]
pub struct KeyVaultSecretStore {
    client: KeyvaultClient,
    runtime: Runtime,
}

impl KeyVaultSecretStore {
    /// Build a store from the `--vault-name` family of flags
    ///
    /// # Errors
    ///
    /// Returns an error if a required flag is missing, the client secret
    /// cannot be read, or the client cannot be created.
    pub fn from_args(kv: &KeyVaultArgs) -> Result<Self> {
        let missing = |flag: &str| SyncError::KeyVault(format!("{flag} is required"));
        let vault_name = kv.vault_name.as_deref().ok_or_else(|| missing("--vault-name"))?;
        let client_id = kv.client_id.as_deref().ok_or_else(|| missing("--client-id"))?;
        let tenant_id = kv.tenant_id.as_deref().ok_or_else(|| missing("--tenant-id"))?;
        let secret_path = kv
            .client_secret_path
            .as_deref()
            .ok_or_else(|| missing("--client-secret-path"))?;

        let client = get_keyvault_client(client_id, secret_path, tenant_id, vault_name)?;
        let runtime = Runtime::new()
            .map_err(|e| SyncError::Runtime(format!("Failed to create runtime: {e}")))?;
        Ok(Self { client, runtime })
    }
}

impl SecretStore for KeyVaultSecretStore {
    fn get_secret(&self, name: &str) -> Result<String> {
        let secret_client = self.client.secret_client();
        let response = self
            .runtime
            .block_on(async { secret_client.get(name).await })
            .map_err(|e| SyncError::KeyVault(format!("Failed to get secret '{name}': {e}")))?;
        Ok(response.value.to_string())
    }
}

/// Key Vault credentials, connecting only when they are first asked for
pub struct DeferredKeyVaultSource {
    args: KeyVaultArgs,
    verbose: u8,
}

impl DeferredKeyVaultSource {
    #[must_use]
    pub fn new(args: KeyVaultArgs, verbose: u8) -> Self {
        Self { args, verbose }
    }
}

impl CredentialSource for DeferredKeyVaultSource {
    fn credentials(&self) -> Result<Credentials> {
        log_utils::debug("Reading bucket credentials from Key Vault", self.verbose);
        let store = KeyVaultSecretStore::from_args(&self.args)?;
        KeyVaultCredentialSource::new(
            store,
            &self.args.access_key_secret,
            &self.args.secret_key_secret,
        )
        .credentials()
    }
}

/// Get a KeyVault client for Azure operations
///
/// # Errors
///
/// Returns an error if:
/// - Unable to read the client secret file
/// - Unable to create the Azure credential
/// - Unable to create the KeyVault client
pub fn get_keyvault_client(
    client_id: &str,
    client_secret_path: &Path,
    tenant_id: &str,
    key_vault_name: &str,
) -> Result<KeyvaultClient> {
    let secret = fs::read_to_string(client_secret_path)
        .map_err(|e| {
            SyncError::KeyVault(format!(
                "Failed to read client secret '{}': {e}",
                client_secret_path.display()
            ))
        })?
        .trim()
        .to_string();

    let client_id = value_or_file_content(client_id)?;
    let tenant_id = value_or_file_content(tenant_id)?;
    let vault_url = vault_url(&value_or_file_content(key_vault_name)?);

    let http_client = Arc::new(Client::new());
    let authority_host = Url::parse("https://login.microsoftonline.com/")
        .map_err(|e| SyncError::KeyVault(format!("Failed to parse authority URL: {e}")))?;

    let credential = Arc::new(ClientSecretCredential::new(
        http_client,
        authority_host,
        tenant_id,
        client_id,
        secret,
    )) as Arc<dyn TokenCredential>;

    KeyvaultClient::new(&vault_url, credential)
        .map_err(|e| SyncError::KeyVault(format!("Failed to create KeyVault client: {e}")))
}

/// Values containing a path separator are read from that file, trimmed
fn value_or_file_content(value: &str) -> Result<String> {
    if value.contains(std::path::MAIN_SEPARATOR) {
        let content = fs::read_to_string(value)
            .map_err(|e| SyncError::KeyVault(format!("Failed to read file '{value}': {e}")))?;
        Ok(content.trim().to_string())
    } else {
        Ok(value.to_string())
    }
}

/// Accepts either a bare vault name or a full vault URL
fn vault_url(name_or_url: &str) -> String {
    let name = if name_or_url.contains("vault.azure.net") {
        name_or_url
            .split("//")
            .nth(1)
            .and_then(|host| host.split('.').next())
            .unwrap_or(name_or_url)
    } else {
        name_or_url
    };
    format!("https://{name}.vault.azure.net")
}
