//! Resources that can write themselves into a sink or a response.
//!
//! [`RemoteResource`] serves from the live asset server and hands off to a
//! bundled resource ([`FileResource`], [`MemoryResource`]) when the server
//! cannot be reached.

mod local;
mod remote;
mod response;

pub use local::{FileResource, MemoryResource};
pub use remote::{FetchOutcome, RemoteResource};
pub use response::{BufferedResponse, ResponseContext, ServeRequest, WriteResponse};

use std::io::Write;

use crate::error::DownloadError;

/// Something that can produce the bytes of one asset.
///
/// Implementations are shared between concurrently served requests.
pub trait DownloadableResource: Send + Sync {
    /// Content type to announce; may be empty.
    fn content_type(&self) -> &str;

    /// Whether the client copy is stale. Resources here are never cached.
    fn is_resource_modified(&self, _request: &ServeRequest) -> bool {
        true
    }

    /// Write the whole resource into `sink`.
    fn stream_to(&self, sink: &mut dyn Write) -> Result<(), DownloadError>;

    /// Write the resource into `response`, setting its content type when non-blank.
    fn serve_resource(
        &self,
        _request: &ServeRequest,
        response: &mut dyn ResponseContext,
    ) -> Result<(), DownloadError> {
        let content_type = self.content_type();
        if !content_type.trim().is_empty() {
            response.set_content_type(content_type);
        }
        let sink = response.output_sink().map_err(DownloadError::Sink)?;
        self.stream_to(sink)
    }
}

/// Flush `sink`, logging instead of failing.
pub(crate) fn flush_quietly(sink: &mut dyn Write) {
    if let Err(e) = sink.flush() {
        tracing::debug!("error flushing output stream: {}", e);
    }
}
