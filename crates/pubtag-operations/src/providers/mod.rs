mod manifest;
mod npm;

pub use manifest::FileSystemManifestReader;
pub use npm::{NpmRegistryClient, is_not_found, parse_show_output};
