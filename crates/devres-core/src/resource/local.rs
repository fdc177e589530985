//! Bundled resources: the originals served when the live server is unavailable.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use super::{flush_quietly, DownloadableResource};
use crate::error::DownloadError;

/// A bundled asset read from disk on every request.
#[derive(Debug, Clone)]
pub struct FileResource {
    path: PathBuf,
    content_type: String,
}

impl FileResource {
    pub fn new(path: impl Into<PathBuf>, content_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content_type: content_type.into(),
        }
    }
}

impl DownloadableResource for FileResource {
    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn stream_to(&self, sink: &mut dyn Write) -> Result<(), DownloadError> {
        let mut file = File::open(&self.path).map_err(|source| DownloadError::Source {
            path: self.path.display().to_string(),
            source,
        })?;
        let copied = io::copy(&mut file, sink).map_err(DownloadError::Copy);
        flush_quietly(sink);
        let n = copied?;
        tracing::debug!("served {} bytes from {}", n, self.path.display());
        Ok(())
    }
}

/// A bundled asset held in memory.
#[derive(Debug, Clone)]
pub struct MemoryResource {
    bytes: Arc<[u8]>,
    content_type: String,
}

impl MemoryResource {
    pub fn new(bytes: impl Into<Arc<[u8]>>, content_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            content_type: content_type.into(),
        }
    }
}

impl DownloadableResource for MemoryResource {
    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn stream_to(&self, sink: &mut dyn Write) -> Result<(), DownloadError> {
        let written = sink.write_all(&self.bytes).map_err(DownloadError::Copy);
        flush_quietly(sink);
        written
    }
}
