/*!
 * Spacel - Space Elevator provisioning front end
 *
 * Manifest resolution for the provisioner:
 * - Orbit (infrastructure) and app manifests resolved per invocation
 * - Web (http/https), object storage (s3), and stdin sources
 * - One shared stdin document stream serving both manifests
 * - Absence-like failures degrade to an absent manifest with a warning
 *
 * Version: 0.3.0
 */

pub mod cli;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod resolver;
pub mod source;
pub mod stream;

// Re-export commonly used types
pub use cli::{Cli, read_manifests, read_manifests_from};
pub use error::{Error, Result};
pub use fetch::{ObjectStore, S3Store};
pub use resolver::{ManifestRequest, ManifestResolver, ManifestRole};
pub use source::{DEFAULT_REGION, ManifestSource, ObjectLocation, ParsedUrl, Scheme};
pub use stream::DocumentStream;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }
}
