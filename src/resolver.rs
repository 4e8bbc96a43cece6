//! Manifest resolution
//!
//! One resolver serves both manifest roles. Classification decides the
//! source kind once, the matching fetch strategy runs, and non-empty
//! bodies are decoded as JSON. Failures that mean "not there" (source
//! unreachable, stdin exhausted, unusable URL) are reported and degrade to
//! an absent manifest so provisioning can continue with whatever arrived;
//! failures in data that did arrive stop resolution.

use std::fmt;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::fetch::{self, ObjectStore, S3Store};
use crate::source::ManifestSource;
use crate::stream::DocumentStream;

/// Which of the two manifests a request fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestRole {
    Orbit,
    App,
}

impl ManifestRole {
    /// Diagnostic label: the name of the argument the URL arrived in.
    pub fn label(&self) -> &'static str {
        match self {
            ManifestRole::Orbit => "orbit_url",
            ManifestRole::App => "app_url",
        }
    }
}

impl fmt::Display for ManifestRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One manifest to resolve: where from, and which role it fills.
#[derive(Debug, Clone)]
pub struct ManifestRequest {
    pub url: String,
    pub role: ManifestRole,
}

impl ManifestRequest {
    pub fn new<S: Into<String>>(url: S, role: ManifestRole) -> ManifestRequest {
        ManifestRequest {
            url: url.into(),
            role,
        }
    }
}

/// Resolves manifest URLs to parsed documents.
///
/// Collaborators are plain fields injected at construction: the web agent
/// and the object store. No process-wide state.
pub struct ManifestResolver {
    agent: ureq::Agent,
    objects: Box<dyn ObjectStore>,
}

impl ManifestResolver {
    /// Resolver with the default unsigned object store.
    pub fn new() -> ManifestResolver {
        ManifestResolver::with_object_store(Box::new(S3Store::new()))
    }

    /// Resolver over a caller-supplied object store.
    pub fn with_object_store(objects: Box<dyn ObjectStore>) -> ManifestResolver {
        ManifestResolver {
            agent: ureq::Agent::new_with_defaults(),
            objects,
        }
    }

    /// Resolve one manifest, degrading recoverable failures to `None`.
    ///
    /// Exactly one warning is logged per degraded failure, naming the role
    /// the manifest was meant to fill. Decode failures and object-storage
    /// failures propagate.
    pub fn resolve(
        &self,
        request: &ManifestRequest,
        documents: &mut DocumentStream,
    ) -> Result<Option<Value>> {
        match self.fetch_document(request, documents) {
            Ok(document) => Ok(document),
            Err(err) if err.is_recoverable() => {
                warn!("Unable to read manifest for {}: {}", request.role, err);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn fetch_document(
        &self,
        request: &ManifestRequest,
        documents: &mut DocumentStream,
    ) -> Result<Option<Value>> {
        match ManifestSource::classify(&request.url) {
            ManifestSource::Web(url) => {
                debug!("Resolving {} from {}", request.role, url);
                decode_document(fetch::http::fetch_url(&self.agent, &url)?)
            }
            ManifestSource::ObjectStorage(location) => {
                debug!(
                    "Resolving {} from object storage {}/{} ({})",
                    request.role, location.bucket, location.key, location.region
                );
                decode_document(self.objects.fetch(&location)?)
            }
            ManifestSource::Stdin => {
                debug!("Resolving {} from standard input", request.role);
                documents.next_document().map(Some)
            }
            ManifestSource::Invalid(raw) => Err(Error::InvalidSource(raw)),
        }
    }
}

impl Default for ManifestResolver {
    fn default() -> Self {
        ManifestResolver::new()
    }
}

/// An empty body means the source had nothing for this role; that resolves
/// to an absent manifest, not an error.
fn decode_document(body: Vec<u8>) -> Result<Option<Value>> {
    if body.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_slice(&body)?))
}
