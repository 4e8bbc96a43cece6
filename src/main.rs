/*!
 * Spacel CLI - resolve the orbit and app manifests and emit them
 *
 * Reads the two manifest URLs, resolves each to a JSON document (or
 * absent), and prints the pair on standard output for the provisioning
 * pipeline. Diagnostics go to standard error.
 */

use serde::Serialize;
use serde_json::Value;

use spacel::error::{EXIT_FAILURE, EXIT_SUCCESS, Result};
use spacel::{cli, logging, ManifestResolver};

/// Stdout payload: both manifests, absent ones as `null`.
#[derive(Serialize)]
struct ResolvedManifests {
    orbit: Option<Value>,
    app: Option<Value>,
}

fn main() {
    let code = match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_FAILURE
        }
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    logging::init();

    let resolver = ManifestResolver::new();
    let (orbit, app) = cli::read_manifests(std::env::args_os(), &resolver)?;

    let resolved = ResolvedManifests { orbit, app };
    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}
