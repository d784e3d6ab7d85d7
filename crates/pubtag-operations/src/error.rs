use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Core(#[from] pubtag_core::CoreError),

    #[error(transparent)]
    Manifest(#[from] pubtag_manifest::ManifestError),

    #[error("failed to run '{program}'")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("registry lookup for '{name}' on {registry} failed ({status}): {stderr}")]
    RegistryQuery {
        name: String,
        registry: String,
        status: String,
        stderr: String,
    },

    #[error("unexpected registry response for '{name}'")]
    RegistryResponse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("publishing '{spec}' failed ({status})")]
    PublishFailed { spec: String, status: String },
}

pub type Result<T> = std::result::Result<T, OperationError>;
