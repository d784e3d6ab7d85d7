mod manifest_reader;
mod registry_client;

pub use manifest_reader::ManifestReader;
pub use registry_client::{PublishRequest, RegistryClient};
