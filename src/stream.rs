//! Streamed-stdin demultiplexer
//!
//! When manifests ride in on standard input, the bytes are a concatenation
//! of back-to-back JSON documents (self-delimiting, optionally separated by
//! whitespace). One [`DocumentStream`] is created per process invocation and
//! shared by every resolution that names the stdin marker, so consecutive
//! markers consume consecutive documents.

use std::io::{self, IsTerminal, Read};

use serde_json::de::IoRead;
use serde_json::{Deserializer, StreamDeserializer, Value};

use crate::error::{Error, Result};

/// Forward-only cursor over the JSON documents on a byte stream.
///
/// Single-owner by construction: resolution borrows it mutably, so two
/// readers can never interleave pulls.
pub struct DocumentStream {
    documents: StreamDeserializer<'static, IoRead<Box<dyn Read>>, Value>,
}

impl DocumentStream {
    /// Stream over the process's standard input.
    ///
    /// An interactive terminal yields the empty stream: resolution must not
    /// sit waiting for a human to type a manifest.
    pub fn from_stdin() -> DocumentStream {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            DocumentStream::empty()
        } else {
            DocumentStream::from_reader(stdin)
        }
    }

    /// Stream over an arbitrary byte source.
    pub fn from_reader<R: Read + 'static>(reader: R) -> DocumentStream {
        let boxed: Box<dyn Read> = Box::new(reader);
        DocumentStream {
            documents: Deserializer::from_reader(boxed).into_iter(),
        }
    }

    /// A stream with no documents. Every pull fails with
    /// [`Error::StreamExhausted`], immediately.
    pub fn empty() -> DocumentStream {
        DocumentStream::from_reader(io::empty())
    }

    /// Pull the next document, consuming it from the stream.
    ///
    /// Exhaustion is an error here so the caller can tell "no document
    /// arrived" apart from a document that happens to be `null`. Malformed
    /// bytes surface as [`Error::Decode`].
    pub fn next_document(&mut self) -> Result<Value> {
        match self.documents.next() {
            Some(Ok(document)) => Ok(document),
            Some(Err(err)) => Err(Error::Decode(err)),
            None => Err(Error::StreamExhausted),
        }
    }
}
