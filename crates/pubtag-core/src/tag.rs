use std::cmp::Ordering;

use semver::Version;

use crate::error::{CoreError, Result};
use crate::types::{DistTag, RegistryInfo};
use crate::version::parse_version;

/// A version can be published only if the registry does not list it yet.
#[must_use]
pub fn should_publish(info: &RegistryInfo, version: &Version) -> bool {
    !info.published_versions.contains(&version.to_string())
}

/// Picks the distribution tag for `version`.
///
/// Anything below the registry's `latest` is `old`, including pre-releases.
/// Otherwise pre-releases go to `next` and everything else to `latest`.
/// Ordering follows semver precedence, so build metadata is ignored.
///
/// # Errors
///
/// Returns an error if the registry's `latest` is not a valid semver version.
pub fn select_tag(info: &RegistryInfo, version: &Version) -> Result<DistTag> {
    if is_less_than_latest(info, version)? {
        Ok(DistTag::Old)
    } else if !version.pre.is_empty() {
        Ok(DistTag::Next)
    } else {
        Ok(DistTag::Latest)
    }
}

fn is_less_than_latest(info: &RegistryInfo, version: &Version) -> Result<bool> {
    let Some(latest) = info.latest_version.as_deref() else {
        return Ok(false);
    };

    let latest = parse_version(latest).map_err(|source| CoreError::InvalidRemoteVersion {
        version: latest.to_string(),
        source,
    })?;

    Ok(version.cmp_precedence(&latest) == Ordering::Less)
}
