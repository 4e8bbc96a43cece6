/*!
 * Manifest source classification
 *
 * A manifest URL resolves to one of three source kinds:
 * - Web (http/https, fetched directly)
 * - Object storage (s3, located as region/bucket/key)
 * - Standard input (the `-` marker, pulled from the shared document stream)
 *
 * Everything else is invalid and resolves to an absent manifest.
 */

pub mod s3;
pub mod url;

pub use s3::{DEFAULT_REGION, ObjectLocation};
pub use url::{ParsedUrl, Scheme};

/// Where a manifest comes from, decided once per URL and carried through
/// resolution as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    /// Fetch the URL as given over HTTP(S).
    Web(String),
    /// Fetch from object storage at the derived location.
    ObjectStorage(ObjectLocation),
    /// Pull the next document from standard input.
    Stdin,
    /// Nothing this tool can fetch; the original string is kept for
    /// diagnostics.
    Invalid(String),
}

impl ManifestSource {
    /// Classify a manifest URL. Deterministic: the same string always
    /// classifies the same way.
    pub fn classify(raw: &str) -> ManifestSource {
        let url = ParsedUrl::parse(raw);
        match url.scheme {
            Scheme::Http | Scheme::Https => ManifestSource::Web(raw.to_string()),
            Scheme::S3 => ManifestSource::ObjectStorage(ObjectLocation::from_url(&url)),
            Scheme::Empty if url.path == "-" => ManifestSource::Stdin,
            Scheme::Empty | Scheme::Other => ManifestSource::Invalid(raw.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_web_urls() {
        assert_eq!(
            ManifestSource::classify("https://example.com/orbit.json"),
            ManifestSource::Web("https://example.com/orbit.json".to_string())
        );
        assert_eq!(
            ManifestSource::classify("http://example.com/app.json"),
            ManifestSource::Web("http://example.com/app.json".to_string())
        );
    }

    #[test]
    fn test_classify_object_storage_url() {
        match ManifestSource::classify("s3://my-bucket/path/key.json") {
            ManifestSource::ObjectStorage(location) => {
                assert_eq!(location.bucket, "my-bucket");
                assert_eq!(location.key, "path/key.json");
                assert_eq!(location.region, DEFAULT_REGION);
            }
            other => panic!("Expected object storage source, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_stdin_marker() {
        assert_eq!(ManifestSource::classify("-"), ManifestSource::Stdin);
    }

    #[test]
    fn test_classify_invalid_inputs() {
        for raw in ["", "plain-file.json", "ftp://host/file", "--", "/tmp/x"] {
            match ManifestSource::classify(raw) {
                ManifestSource::Invalid(kept) => assert_eq!(kept, raw),
                other => panic!("Expected invalid source for {:?}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_classify_is_idempotent() {
        for raw in ["https://example.com/m.json", "s3://b/k", "-", "junk"] {
            assert_eq!(ManifestSource::classify(raw), ManifestSource::classify(raw));
        }
    }

    #[test]
    fn test_https_to_provider_host_stays_web() {
        // A provider-hosted URL with an http(s) scheme is fetched over the
        // web, not through the object store. Only the s3 scheme dispatches
        // to object storage.
        let raw = "https://mybucket.s3-us-west-2.amazonaws.com/key.json";
        assert_eq!(
            ManifestSource::classify(raw),
            ManifestSource::Web(raw.to_string())
        );
    }
}
