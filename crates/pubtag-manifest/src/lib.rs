mod error;
mod manifest;
mod reader;

pub use error::{ManifestError, Result};
pub use reader::{MANIFEST_FILE, parse_package_descriptor, read_package_descriptor};
