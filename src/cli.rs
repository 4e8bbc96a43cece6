//! Command-line entry: argument parsing and the two-manifest read
//!
//! Argument problems are deliberately non-fatal: usage goes to standard
//! error and both manifests come back absent. How hard to fail on a missing
//! manifest is the consumer's decision, not this layer's.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::Parser;
use serde_json::Value;

use crate::error::Result;
use crate::resolver::{ManifestRequest, ManifestResolver, ManifestRole};
use crate::stream::DocumentStream;

#[derive(Parser, Debug)]
#[command(name = "spacel")]
#[command(version, about = "Resolve orbit and app manifests for provisioning", long_about = None)]
pub struct Cli {
    /// Orbit manifest URL: http(s)://, s3://, or `-` for standard input
    #[arg(value_name = "ORBIT_URL")]
    pub orbit_url: String,

    /// App manifest URL: http(s)://, s3://, or `-` for standard input
    #[arg(value_name = "APP_URL")]
    pub app_url: String,
}

/// Parse arguments and resolve both manifests, orbit first.
///
/// Builds the one [`DocumentStream`] this invocation shares across both
/// resolutions, so consecutive stdin markers consume consecutive documents.
pub fn read_manifests<I, T>(
    args: I,
    resolver: &ManifestResolver,
) -> Result<(Option<Value>, Option<Value>)>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut documents = DocumentStream::from_stdin();
    read_manifests_from(args, &mut documents, resolver)
}

/// [`read_manifests`] over a caller-supplied document stream.
pub fn read_manifests_from<I, T>(
    args: I,
    documents: &mut DocumentStream,
    resolver: &ManifestResolver,
) -> Result<(Option<Value>, Option<Value>)>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are requests, not argument failures
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit();
            }
            let _ = err.print();
            return Ok((None, None));
        }
    };

    let orbit = resolver.resolve(
        &ManifestRequest::new(cli.orbit_url, ManifestRole::Orbit),
        documents,
    )?;
    let app = resolver.resolve(
        &ManifestRequest::new(cli.app_url, ManifestRole::App),
        documents,
    )?;
    Ok((orbit, app))
}
