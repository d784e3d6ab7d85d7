use std::path::Path;

use pubtag_core::PackageDescriptor;

use crate::Result;

pub trait ManifestReader: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the package manifest cannot be read or is invalid.
    fn read_descriptor(&self, package_dir: &Path) -> Result<PackageDescriptor>;
}
