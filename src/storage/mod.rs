pub mod client;
pub mod content_type;
pub mod models;

// Re-export types for convenient access from other modules
pub use client::S3StorageClient;
pub use content_type::content_type_for;
pub use models::{RemoteObject, S3Config};
