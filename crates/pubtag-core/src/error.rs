use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("registry reports an invalid latest version '{version}'")]
    InvalidRemoteVersion {
        version: String,
        #[source]
        source: semver::Error,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_remote_version_includes_value_and_source() {
        let source = semver::Version::parse("not-a-version").expect_err("should fail");
        let err = CoreError::InvalidRemoteVersion {
            version: "not-a-version".to_string(),
            source,
        };

        assert!(err.to_string().contains("not-a-version"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
