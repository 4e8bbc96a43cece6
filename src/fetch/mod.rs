/*!
 * Fetch capabilities for manifest sources
 *
 * Web fetches go through a shared ureq agent. Object-storage fetches go
 * through the [`ObjectStore`] seam, so deployments with credentialed
 * buckets can swap in a signed client without touching resolution.
 */

pub mod http;
pub mod s3;

pub use s3::S3Store;

use crate::error::Result;
use crate::source::ObjectLocation;

/// Object-storage capability: fetch one whole object.
pub trait ObjectStore: Send + Sync {
    /// Fetch the object at `location` and return its full body.
    fn fetch(&self, location: &ObjectLocation) -> Result<Vec<u8>>;
}
