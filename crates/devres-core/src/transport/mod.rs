//! Blocking HTTP GET used to reach the live asset server.
//!
//! A transport pushes body chunks to a callback only after it has seen a
//! successful response head, so the caller can tell "could not open" apart
//! from "broke while copying".

mod easy;
mod head;

pub use easy::CurlTransport;

use std::io;
use thiserror::Error;

/// Receives body chunks of an opened response, in order.
pub type BodySink<'a> = dyn FnMut(&[u8]) -> io::Result<()> + 'a;

/// Failure of a single GET.
#[derive(Debug, Error)]
pub enum TransferError {
    /// Could not connect or the request failed before a response was opened.
    #[error("{0}")]
    Connect(#[source] curl::Error),
    /// The server answered with a non-2xx status (0 when no status was seen).
    #[error("HTTP {0}")]
    Status(u32),
    /// The response was opened but reading its body failed.
    #[error("body read failed: {0}")]
    Read(#[source] curl::Error),
    /// The body sink refused a chunk.
    #[error("sink write failed: {0}")]
    Sink(#[source] io::Error),
}

impl TransferError {
    /// True when nothing was opened, i.e. a fallback can still take over.
    pub fn is_open_failure(&self) -> bool {
        matches!(self, TransferError::Connect(_) | TransferError::Status(_))
    }
}

/// Performs a GET and streams the body of a successful response into `on_body`.
///
/// Returns the number of body bytes delivered. Implementations run on the
/// calling thread and keep no connection between calls.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str, on_body: &mut BodySink<'_>) -> Result<u64, TransferError>;
}
