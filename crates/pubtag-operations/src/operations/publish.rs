use std::path::Path;

use pubtag_core::{DistTag, PackageDescriptor, PublishSettings, select_tag, should_publish};
use tracing::info;

use crate::Result;
use crate::traits::{ManifestReader, PublishRequest, RegistryClient};

/// A chosen tag together with the publish command that applies it.
#[derive(Debug, Clone)]
pub struct PublishOutput {
    pub package: PackageDescriptor,
    pub dist_tag: DistTag,
    pub request: PublishRequest,
}

#[derive(Debug, Clone)]
pub enum PublishPlan {
    /// The registry already has this version; there is nothing to run.
    AlreadyPublished(PackageDescriptor),
    Ready(PublishOutput),
}

/// Publishing is split into [`plan`](Self::plan), which only reads, and
/// [`publish`](Self::publish), which runs the publish command, so callers can
/// report the command before it starts.
pub struct PublishOperation<M, R> {
    manifest_reader: M,
    registry: R,
    settings: PublishSettings,
}

impl<M, R> PublishOperation<M, R>
where
    M: ManifestReader,
    R: RegistryClient,
{
    pub fn new(manifest_reader: M, registry: R) -> Self {
        Self::with_settings(manifest_reader, registry, PublishSettings::default())
    }

    pub fn with_settings(manifest_reader: M, registry: R, settings: PublishSettings) -> Self {
        Self {
            manifest_reader,
            registry,
            settings,
        }
    }

    /// Reads the manifest, queries the registry and picks a tag.
    ///
    /// `flags` are appended to the planned publish command.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read, the registry lookup
    /// fails for any reason other than an unknown package, or the registry's
    /// `latest` is not a valid version.
    pub fn plan(&self, package_dir: &Path, flags: &[String]) -> Result<PublishPlan> {
        let package = self.manifest_reader.read_descriptor(package_dir)?;
        info!(package = %package.spec(), registry = %package.registry_url, "starting release");

        let registry_info = self
            .registry
            .query_package_info(&package.name, &package.registry_url)?;

        if registry_info.is_unpublished() {
            info!(package = %package.name, "no published versions, first release");
        }

        if !should_publish(&registry_info, &package.version) {
            info!(package = %package.spec(), "version already published");
            return Ok(PublishPlan::AlreadyPublished(package));
        }

        let dist_tag = select_tag(&registry_info, &package.version)?;
        let request = PublishRequest {
            package_dir: package_dir.to_path_buf(),
            name: package.name.clone(),
            version: package.version.clone(),
            tag: self.settings.tags.name(dist_tag).to_string(),
            flags: flags.to_vec(),
        };

        Ok(PublishPlan::Ready(PublishOutput {
            package,
            dist_tag,
            request,
        }))
    }

    /// # Errors
    ///
    /// Returns an error if the publish command cannot be run or fails.
    pub fn publish(&self, output: &PublishOutput) -> Result<()> {
        info!(package = %output.request.spec(), tag = %output.request.tag, "publishing");
        self.registry.run_publish(&output.request)
    }
}
