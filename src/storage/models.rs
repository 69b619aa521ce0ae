use crate::secrets::Credentials;

/// Configuration for an S3-compatible storage client
#[derive(Debug, Clone)]
pub struct S3Config {
    pub endpoint: String,
    pub region: String,
    pub bucket: String,
    pub credentials: Credentials,
}

/// One object as reported by a bucket listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteObject {
    pub key: String,
    pub size: u64,
    /// ETag with surrounding quotes removed
    pub etag: String,
}

impl RemoteObject {
    pub fn new(key: impl Into<String>, size: u64, etag: &str) -> Self {
        Self {
            key: key.into(),
            size,
            etag: etag.trim_matches('"').to_string(),
        }
    }

    /// Multipart uploads get an ETag of the form `<hash>-<parts>`, which is not an MD5
    pub fn is_multipart(&self) -> bool {
        self.etag.contains('-')
    }
}
