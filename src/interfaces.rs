use crate::errors::Result;
use crate::secrets::Credentials;
use crate::storage::RemoteObject;
use mockall::automock;
use std::path::Path;

/// Interface to the bucket being mirrored, to facilitate testing
#[automock]
pub trait ObjectStore {
    /// Every object currently in the bucket
    fn list_objects(&self) -> Result<Vec<RemoteObject>>;

    /// Upload a local file under `key` with a public-read ACL
    fn put_public_object(&self, key: &str, local_path: &Path, content_type: &str) -> Result<()>;

    fn delete_object(&self, key: &str) -> Result<()>;
}

/// Somewhere bucket credentials can be read from
#[automock]
pub trait CredentialSource {
    fn credentials(&self) -> Result<Credentials>;
}

/// Named-secret lookup, implemented by Azure Key Vault
#[automock]
pub trait SecretStore {
    fn get_secret(&self, name: &str) -> Result<String>;
}
