//! Object-storage location derivation from manifest URLs
//!
//! Manifests historically arrive under either addressing style the provider
//! supports: virtual-hosted (`https://bucket.s3-us-west-2.amazonaws.com/key`)
//! and path-style (`https://s3.amazonaws.com/bucket/key`), plus the plain
//! `s3://bucket/key` form. The derivation below accepts all three and keeps
//! its historical edge behavior, which deployed URLs depend on.

use super::url::ParsedUrl;

/// Region assumed when the hostname encodes none.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Public object-storage domain suffix that marks provider-hosted URLs.
const AWS_DOMAIN_SUFFIX: &str = ".amazonaws.com";

/// Where an object lives: enough to fetch it through any store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocation {
    pub region: String,
    pub bucket: String,
    pub key: String,
}

impl ObjectLocation {
    /// Derive region, bucket, and key from a parsed URL.
    ///
    /// Provider-hosted URLs (hostname containing `.amazonaws.com`) encode
    /// the bucket either in the hostname (a dotted prefix) or as the first
    /// path segment; whatever remains of the host prefix is the region
    /// token, with the `s3.` / `s3-` service markers stripped. Any other
    /// hostname is taken as the bucket itself, with the default region.
    pub fn from_url(url: &ParsedUrl) -> ObjectLocation {
        let hostname = url.hostname.clone().unwrap_or_default();
        let mut bucket = hostname.clone();
        let mut key = url.path.strip_prefix('/').unwrap_or(&url.path).to_string();

        let region = match hostname.find(AWS_DOMAIN_SUFFIX) {
            Some(aws_pos) => {
                let mut host_prefix = &hostname[..aws_pos];
                if host_prefix.contains('.') {
                    let parts: Vec<&str> = host_prefix.splitn(2, '.').collect();
                    bucket = parts[0].to_string();
                    host_prefix = parts[1];
                } else {
                    // Path-style: /bucket/key. A short path leaves the
                    // missing pieces empty instead of failing here; the
                    // fetch reports the unusable location.
                    let mut segments = url.path.splitn(3, '/');
                    segments.next();
                    bucket = segments.next().unwrap_or_default().to_string();
                    key = segments.next().unwrap_or_default().to_string();
                }
                host_prefix.replace("s3.", "").replace("s3-", "")
            }
            None => DEFAULT_REGION.to_string(),
        };

        ObjectLocation {
            region,
            bucket,
            key,
        }
    }
}
