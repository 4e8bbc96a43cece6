//! Synchronous web fetches

use std::io::Read;

use crate::error::{Error, Result};

/// GET a web URL and return the full response body.
///
/// Failure statuses and transport errors both come back as
/// [`Error::SourceUnreachable`]; the caller decides whether that degrades
/// to an absent manifest.
pub fn fetch_url(agent: &ureq::Agent, url: &str) -> Result<Vec<u8>> {
    tracing::debug!("GET {url}");
    let resp = match agent.get(url).call() {
        Ok(resp) => resp,
        Err(ureq::Error::StatusCode(code)) => {
            return Err(Error::http_status(url, code));
        }
        Err(err) => {
            return Err(Error::transport(url, err.to_string()));
        }
    };

    let mut reader = resp.into_body().into_reader();
    let mut body = Vec::new();
    reader
        .read_to_end(&mut body)
        .map_err(|err| Error::transport(url, err.to_string()))?;
    Ok(body)
}
