//! Request and response handles passed through by the host.

use std::io::{self, Write};

/// The incoming request as seen by a resource. Only passed through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServeRequest {
    method: String,
    path: String,
}

impl ServeRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
        }
    }

    /// Shorthand for a GET of `path`.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new("GET", path)
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// The outgoing response: a content-type header and a body sink.
///
/// `output_sink` may be called more than once and must return the same body each time.
pub trait ResponseContext {
    fn set_content_type(&mut self, content_type: &str);
    fn output_sink(&mut self) -> io::Result<&mut dyn Write>;
}

/// Response whose body goes to any writer (stdout, a file, a buffer).
#[derive(Debug, Default)]
pub struct WriteResponse<W> {
    content_type: Option<String>,
    body: W,
}

/// Response collected in memory.
pub type BufferedResponse = WriteResponse<Vec<u8>>;

impl<W: Write> WriteResponse<W> {
    pub fn new(body: W) -> Self {
        Self {
            content_type: None,
            body,
        }
    }

    /// The content type set by the resource, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn body(&self) -> &W {
        &self.body
    }

    pub fn into_body(self) -> W {
        self.body
    }
}

impl<W: Write> ResponseContext for WriteResponse<W> {
    fn set_content_type(&mut self, content_type: &str) {
        self.content_type = Some(content_type.to_string());
    }

    fn output_sink(&mut self) -> io::Result<&mut dyn Write> {
        Ok(&mut self.body)
    }
}
