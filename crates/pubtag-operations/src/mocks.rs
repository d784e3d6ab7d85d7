use std::path::Path;
use std::sync::{Arc, Mutex};

use pubtag_core::{PackageDescriptor, RegistryInfo};

use crate::traits::{ManifestReader, PublishRequest, RegistryClient};
use crate::{OperationError, Result};

pub struct MockManifestReader {
    descriptor: PackageDescriptor,
}

impl MockManifestReader {
    /// # Panics
    ///
    /// Panics if the version string is not valid semver.
    #[must_use]
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            descriptor: PackageDescriptor {
                name: name.to_string(),
                version: version.parse().expect("valid version"),
                registry_url: pubtag_core::DEFAULT_REGISTRY.to_string(),
            },
        }
    }

    #[must_use]
    pub fn with_registry(mut self, registry_url: &str) -> Self {
        self.descriptor.registry_url = registry_url.to_string();
        self
    }
}

impl ManifestReader for MockManifestReader {
    fn read_descriptor(&self, _package_dir: &Path) -> Result<PackageDescriptor> {
        Ok(self.descriptor.clone())
    }
}

#[derive(Clone)]
enum QueryBehavior {
    Found(RegistryInfo),
    Fail,
}

/// Clones share recorded calls, so a test can keep one and hand the other
/// to the operation.
#[derive(Clone)]
pub struct MockRegistryClient {
    query: QueryBehavior,
    fail_publish: bool,
    queries: Arc<Mutex<Vec<(String, String)>>>,
    publishes: Arc<Mutex<Vec<PublishRequest>>>,
}

impl MockRegistryClient {
    #[must_use]
    pub fn unpublished() -> Self {
        Self::with_info(RegistryInfo::default())
    }

    #[must_use]
    pub fn published(versions: &[&str], latest: &str) -> Self {
        Self::with_info(RegistryInfo::new(versions.iter().copied(), Some(latest)))
    }

    #[must_use]
    pub fn with_info(info: RegistryInfo) -> Self {
        Self {
            query: QueryBehavior::Found(info),
            fail_publish: false,
            queries: Arc::new(Mutex::new(Vec::new())),
            publishes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    #[must_use]
    pub fn failing_query() -> Self {
        Self {
            query: QueryBehavior::Fail,
            ..Self::unpublished()
        }
    }

    #[must_use]
    pub fn failing_publish(mut self) -> Self {
        self.fail_publish = true;
        self
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    pub fn queries(&self) -> Vec<(String, String)> {
        self.queries.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    pub fn publishes(&self) -> Vec<PublishRequest> {
        self.publishes.lock().expect("lock poisoned").clone()
    }
}

impl RegistryClient for MockRegistryClient {
    fn query_package_info(&self, name: &str, registry_url: &str) -> Result<RegistryInfo> {
        self.queries
            .lock()
            .expect("lock poisoned")
            .push((name.to_string(), registry_url.to_string()));

        match &self.query {
            QueryBehavior::Found(info) => Ok(info.clone()),
            QueryBehavior::Fail => Err(OperationError::RegistryQuery {
                name: name.to_string(),
                registry: registry_url.to_string(),
                status: "exit status: 1".to_string(),
                stderr: "npm error code E401".to_string(),
            }),
        }
    }

    fn run_publish(&self, request: &PublishRequest) -> Result<()> {
        self.publishes
            .lock()
            .expect("lock poisoned")
            .push(request.clone());

        if self.fail_publish {
            return Err(OperationError::PublishFailed {
                spec: request.spec(),
                status: "exit status: 1".to_string(),
            });
        }
        Ok(())
    }
}
