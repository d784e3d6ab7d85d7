use std::path::PathBuf;

use pubtag_core::RegistryInfo;
use semver::Version;

use crate::Result;

/// Everything needed to run a single publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    pub package_dir: PathBuf,
    pub name: String,
    pub version: Version,
    pub tag: String,
    /// Passed through to the publish command untouched.
    pub flags: Vec<String>,
}

impl PublishRequest {
    #[must_use]
    pub fn spec(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }

    /// Arguments of the publish command, without the program name.
    #[must_use]
    pub fn args(&self) -> Vec<String> {
        let mut args = vec!["publish".to_string(), format!("--tag={}", self.tag)];
        args.extend(self.flags.iter().cloned());
        args
    }
}

pub trait RegistryClient: Send + Sync {
    /// Looks up what the registry has published under `name`.
    ///
    /// A package the registry does not know yields `RegistryInfo::default()`.
    ///
    /// # Errors
    ///
    /// Returns an error for any lookup failure other than "not found".
    fn query_package_info(&self, name: &str, registry_url: &str) -> Result<RegistryInfo>;

    /// # Errors
    ///
    /// Returns an error if the publish command cannot be run or fails.
    fn run_publish(&self, request: &PublishRequest) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(flags: &[&str]) -> PublishRequest {
        PublishRequest {
            package_dir: PathBuf::from("/pkg"),
            name: "foo".to_string(),
            version: Version::parse("1.2.0").expect("valid version"),
            tag: "latest".to_string(),
            flags: flags.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn args_start_with_publish_and_tag() {
        assert_eq!(request(&[]).args(), vec!["publish", "--tag=latest"]);
    }

    #[test]
    fn args_append_flags_in_order() {
        let args = request(&["--access", "public", "--otp=123456"]).args();

        assert_eq!(
            args,
            vec!["publish", "--tag=latest", "--access", "public", "--otp=123456"]
        );
    }

    #[test]
    fn spec_joins_name_and_version() {
        assert_eq!(request(&[]).spec(), "foo@1.2.0");
    }
}
