use std::path::Path;

use pubtag_core::{PackageDescriptor, PublishSettings};
use pubtag_manifest::read_package_descriptor;

use crate::Result;
use crate::traits::ManifestReader;

pub struct FileSystemManifestReader {
    settings: PublishSettings,
}

impl FileSystemManifestReader {
    #[must_use]
    pub fn new(settings: PublishSettings) -> Self {
        Self { settings }
    }
}

impl Default for FileSystemManifestReader {
    fn default() -> Self {
        Self::new(PublishSettings::default())
    }
}

impl ManifestReader for FileSystemManifestReader {
    fn read_descriptor(&self, package_dir: &Path) -> Result<PackageDescriptor> {
        Ok(read_package_descriptor(package_dir, &self.settings)?)
    }
}
