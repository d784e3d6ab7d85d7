use std::collections::BTreeSet;
use std::fmt;

use semver::Version;

/// The local package being published, as read from its manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDescriptor {
    pub name: String,
    pub version: Version,
    pub registry_url: String,
}

impl PackageDescriptor {
    /// `name@version`, the form npm uses to address a single release.
    #[must_use]
    pub fn spec(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

/// What the registry knows about a package.
///
/// The default value stands for a package that has never been published.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryInfo {
    pub published_versions: BTreeSet<String>,
    pub latest_version: Option<String>,
}

impl RegistryInfo {
    #[must_use]
    pub fn new<I, S>(published_versions: I, latest_version: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            published_versions: published_versions.into_iter().map(Into::into).collect(),
            latest_version: latest_version.map(str::to_string),
        }
    }

    #[must_use]
    pub fn is_unpublished(&self) -> bool {
        self.published_versions.is_empty() && self.latest_version.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistTag {
    /// A release older than the registry's current `latest`.
    Old,
    /// A pre-release at or above `latest`.
    Next,
    Latest,
}

impl fmt::Display for DistTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Old => "old",
            Self::Next => "next",
            Self::Latest => "latest",
        };
        write!(f, "{s}")
    }
}
