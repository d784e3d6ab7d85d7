use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct PackageJson {
    pub(crate) name: Option<String>,
    pub(crate) version: Option<String>,
    #[serde(default, rename = "publishConfig")]
    pub(crate) publish_config: Option<PublishConfig>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct PublishConfig {
    pub(crate) registry: Option<String>,
}
