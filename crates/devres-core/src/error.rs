//! Fatal serving errors.

use crate::transport::TransferError;
use thiserror::Error;

/// A resource could not be delivered and no fallback is possible.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The response did not hand out an output sink.
    #[error("failed to obtain output sink: {0}")]
    Sink(#[source] std::io::Error),
    /// A bundled resource could not be read.
    #[error("failed to read {path}: {source}")]
    Source {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Copying bytes into the sink failed after writing had begun.
    #[error("failed to copy resource into sink: {0}")]
    Copy(#[source] std::io::Error),
    /// The remote transfer broke after the response was opened.
    #[error("transfer from {url} failed: {source}")]
    Transfer {
        url: String,
        #[source]
        source: TransferError,
    },
}
