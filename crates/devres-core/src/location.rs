//! Logical identity of a requested static asset.

use std::fmt;

/// Path and content type of an asset, as registered by the host.
///
/// `path` is appended verbatim to the base URL, so it should start with the
/// separator the asset server expects (usually `/`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLocation {
    path: String,
    content_type: String,
}

impl ResourceLocation {
    pub fn new(path: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content_type: content_type.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Content type; may be empty.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Resource: {} ({})", self.path, self.content_type)
    }
}
