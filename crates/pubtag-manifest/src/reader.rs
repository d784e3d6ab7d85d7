use std::path::Path;

use pubtag_core::{PackageDescriptor, PublishSettings, parse_version};

use crate::error::{ManifestError, Result};
use crate::manifest::PackageJson;

pub const MANIFEST_FILE: &str = "package.json";

/// Reads `package.json` from `package_dir`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a publishable manifest.
pub fn read_package_descriptor(
    package_dir: &Path,
    settings: &PublishSettings,
) -> Result<PackageDescriptor> {
    let path = package_dir.join(MANIFEST_FILE);
    let content = std::fs::read_to_string(&path).map_err(|source| ManifestError::Read {
        path: path.clone(),
        source,
    })?;
    parse_package_descriptor(&content, &path, settings)
}

/// Parses manifest `content`; `path` is only used for error reporting.
///
/// # Errors
///
/// Returns an error if the content is not valid JSON, lacks `name` or
/// `version`, or the version is not valid semver.
pub fn parse_package_descriptor(
    content: &str,
    path: &Path,
    settings: &PublishSettings,
) -> Result<PackageDescriptor> {
    let manifest: PackageJson =
        serde_json::from_str(content).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let name = manifest
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| ManifestError::MissingField {
            path: path.to_path_buf(),
            field: "name",
        })?;

    let raw_version = manifest.version.ok_or_else(|| ManifestError::MissingField {
        path: path.to_path_buf(),
        field: "version",
    })?;
    let version =
        parse_version(&raw_version).map_err(|source| ManifestError::InvalidVersion {
            path: path.to_path_buf(),
            version: raw_version.clone(),
            source,
        })?;

    let registry_url = manifest
        .publish_config
        .and_then(|c| c.registry)
        .unwrap_or_else(|| settings.default_registry.clone());

    Ok(PackageDescriptor {
        name,
        version,
        registry_url,
    })
}
