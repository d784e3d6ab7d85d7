use crate::types::DistTag;

pub const DEFAULT_REGISTRY: &str = "https://registry.npmjs.org/";

/// Registry-side names for each [`DistTag`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagNames {
    pub old: String,
    pub next: String,
    pub latest: String,
}

impl TagNames {
    #[must_use]
    pub fn name(&self, tag: DistTag) -> &str {
        match tag {
            DistTag::Old => &self.old,
            DistTag::Next => &self.next,
            DistTag::Latest => &self.latest,
        }
    }
}

impl Default for TagNames {
    fn default() -> Self {
        Self {
            old: DistTag::Old.to_string(),
            next: DistTag::Next.to_string(),
            latest: DistTag::Latest.to_string(),
        }
    }
}

/// Fixed values a publish run is parameterised by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishSettings {
    /// Used when the manifest has no `publishConfig.registry`.
    pub default_registry: String,
    pub tags: TagNames,
}

impl Default for PublishSettings {
    fn default() -> Self {
        Self {
            default_registry: DEFAULT_REGISTRY.to_string(),
            tags: TagNames::default(),
        }
    }
}
