//! HTTP-backed object storage access
//!
//! Fetches objects with unsigned GETs against the provider's public
//! endpoint, so objects must be anonymously readable. Deployments with
//! credentialed buckets implement [`ObjectStore`] over their own client
//! and inject it into the resolver.

use std::io::Read;

use crate::error::{Error, Result};
use crate::fetch::ObjectStore;
use crate::source::ObjectLocation;

/// Default [`ObjectStore`]: plain HTTPS against the provider endpoint.
pub struct S3Store {
    agent: ureq::Agent,
    endpoint: Option<String>,
}

impl S3Store {
    pub fn new() -> S3Store {
        S3Store {
            agent: ureq::Agent::new_with_defaults(),
            endpoint: None,
        }
    }

    /// Point the store at an S3-compatible service (MinIO and friends).
    /// Requests become path-style: `{endpoint}/{bucket}/{key}`.
    pub fn with_endpoint<S: Into<String>>(endpoint: S) -> S3Store {
        S3Store {
            agent: ureq::Agent::new_with_defaults(),
            endpoint: Some(endpoint.into()),
        }
    }

    fn object_url(&self, location: &ObjectLocation) -> String {
        match &self.endpoint {
            Some(endpoint) => format!(
                "{}/{}/{}",
                endpoint.trim_end_matches('/'),
                location.bucket,
                location.key
            ),
            None => format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                location.bucket, location.region, location.key
            ),
        }
    }
}

impl Default for S3Store {
    fn default() -> Self {
        S3Store::new()
    }
}

impl ObjectStore for S3Store {
    fn fetch(&self, location: &ObjectLocation) -> Result<Vec<u8>> {
        let url = self.object_url(location);
        tracing::debug!("GET {url}");
        let resp = match self.agent.get(url.as_str()).call() {
            Ok(resp) => resp,
            Err(ureq::Error::StatusCode(code)) => {
                return Err(storage_error(location, format!("HTTP status {code}")));
            }
            Err(err) => {
                return Err(storage_error(location, err.to_string()));
            }
        };

        let mut reader = resp.into_body().into_reader();
        let mut body = Vec::new();
        reader
            .read_to_end(&mut body)
            .map_err(|err| storage_error(location, err.to_string()))?;
        Ok(body)
    }
}

fn storage_error(location: &ObjectLocation, message: String) -> Error {
    Error::StorageFetch {
        region: location.region.clone(),
        bucket: location.bucket.clone(),
        key: location.key.clone(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(region: &str, bucket: &str, key: &str) -> ObjectLocation {
        ObjectLocation {
            region: region.to_string(),
            bucket: bucket.to_string(),
            key: key.to_string(),
        }
    }

    #[test]
    fn test_provider_object_url_is_virtual_hosted() {
        let store = S3Store::new();
        assert_eq!(
            store.object_url(&location("us-west-2", "mybucket", "path/to/key.json")),
            "https://mybucket.s3.us-west-2.amazonaws.com/path/to/key.json"
        );
    }

    #[test]
    fn test_custom_endpoint_object_url_is_path_style() {
        let store = S3Store::with_endpoint("http://127.0.0.1:9000/");
        assert_eq!(
            store.object_url(&location("us-east-1", "manifests", "orbit.json")),
            "http://127.0.0.1:9000/manifests/orbit.json"
        );
    }

    #[test]
    fn test_unreachable_endpoint_is_storage_error() {
        let store = S3Store::with_endpoint("http://127.0.0.1:1");
        let err = store
            .fetch(&location("us-east-1", "bucket", "key.json"))
            .unwrap_err();
        assert!(matches!(err, Error::StorageFetch { .. }));
        assert!(!err.is_recoverable());
    }
}
