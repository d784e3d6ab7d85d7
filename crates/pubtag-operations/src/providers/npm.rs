use std::ffi::OsString;
use std::process::{Command, Output, Stdio};

use pubtag_core::RegistryInfo;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::traits::{PublishRequest, RegistryClient};
use crate::{OperationError, Result};

const NOT_FOUND_CODE: &str = "E404";

#[derive(Debug, Deserialize)]
struct ShowOutput {
    #[serde(default)]
    versions: Option<VersionList>,
    #[serde(default, rename = "dist-tags")]
    dist_tags: Option<DistTags>,
}

// npm collapses a single-element list into a plain string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum VersionList {
    Many(Vec<String>),
    One(String),
}

#[derive(Debug, Deserialize)]
struct DistTags {
    latest: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorOutput {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: Option<String>,
}

/// Parses the JSON printed by `npm show <name> --json`.
///
/// # Errors
///
/// Returns an error if `stdout` is not a JSON object of the expected shape.
pub fn parse_show_output(stdout: &[u8]) -> serde_json::Result<RegistryInfo> {
    let output: ShowOutput = serde_json::from_slice(stdout)?;

    let published_versions = match output.versions {
        Some(VersionList::Many(versions)) => versions.into_iter().collect(),
        Some(VersionList::One(version)) => std::iter::once(version).collect(),
        None => std::collections::BTreeSet::new(),
    };

    Ok(RegistryInfo {
        published_versions,
        latest_version: output.dist_tags.and_then(|tags| tags.latest),
    })
}

/// Whether a failed `npm show` means the registry does not know the package.
///
/// Older npm reports `npm ERR! code E404` on stderr, newer releases print
/// `npm error code E404` and also a JSON error object on stdout with `--json`.
#[must_use]
pub fn is_not_found(stdout: &[u8], stderr: &[u8]) -> bool {
    if String::from_utf8_lossy(stderr).contains(&format!("code {NOT_FOUND_CODE}")) {
        return true;
    }

    serde_json::from_slice::<ErrorOutput>(stdout)
        .ok()
        .and_then(|out| out.error.code)
        .is_some_and(|code| code == NOT_FOUND_CODE)
}

/// Talks to the registry through the `npm` command-line tool.
pub struct NpmRegistryClient {
    program: OsString,
}

impl NpmRegistryClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_program("npm")
    }

    #[must_use]
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    fn run(&self, command: &mut Command) -> Result<Output> {
        command
            .output()
            .map_err(|source| OperationError::CommandSpawn {
                program: self.program_name(),
                source,
            })
    }
}

impl Default for NpmRegistryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryClient for NpmRegistryClient {
    fn query_package_info(&self, name: &str, registry_url: &str) -> Result<RegistryInfo> {
        debug!(package = name, registry = registry_url, "querying registry");

        let output = self.run(
            Command::new(&self.program)
                .arg("show")
                .arg(name)
                .arg(format!("--registry={registry_url}"))
                .arg("--json")
                .stdin(Stdio::null()),
        )?;

        if !output.status.success() {
            if is_not_found(&output.stdout, &output.stderr) {
                warn!(
                    package = name,
                    registry = registry_url,
                    "package not found. Possibly not published yet"
                );
                return Ok(RegistryInfo::default());
            }
            return Err(OperationError::RegistryQuery {
                name: name.to_string(),
                registry: registry_url.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        parse_show_output(&output.stdout).map_err(|source| OperationError::RegistryResponse {
            name: name.to_string(),
            source,
        })
    }

    fn run_publish(&self, request: &PublishRequest) -> Result<()> {
        debug!(
            package = %request.spec(),
            dir = %request.package_dir.display(),
            "running publish"
        );

        // Fully inherited: npm may prompt for a one-time password.
        let status = Command::new(&self.program)
            .args(request.args())
            .current_dir(&request.package_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| OperationError::CommandSpawn {
                program: self.program_name(),
                source,
            })?;

        if !status.success() {
            return Err(OperationError::PublishFailed {
                spec: request.spec(),
                status: status.to_string(),
            });
        }

        debug!(package = %request.spec(), "publish finished");
        Ok(())
    }
}
