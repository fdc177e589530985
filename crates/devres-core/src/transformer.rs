//! Wraps registered resources so they are served from the live asset server.

use std::sync::Arc;

use crate::base_url;
use crate::config::{DevresConfig, FallbackMode};
use crate::location::ResourceLocation;
use crate::resource::{DownloadableResource, RemoteResource};
use crate::transport::{CurlTransport, Transport};

/// Turns each registered resource into a [`RemoteResource`] bound to one base URL.
///
/// The base URL is resolved once when the transformer is built; resources it
/// hands out keep that URL even if the environment changes later.
#[derive(Clone)]
pub struct DevResourceTransformer {
    base_url: String,
    fallback_mode: FallbackMode,
    transport: Arc<dyn Transport>,
}

impl DevResourceTransformer {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            fallback_mode: FallbackMode::default(),
            transport: Arc::new(CurlTransport::new()),
        }
    }

    /// Base URL from environment and config file; fallback mode and timeouts from config.
    pub fn from_config(cfg: &DevresConfig) -> Self {
        Self::new(base_url::resolve_layered(cfg))
            .with_fallback_mode(cfg.fallback_mode())
            .with_transport(Arc::new(CurlTransport::from_config(cfg)))
    }

    pub fn with_fallback_mode(mut self, mode: FallbackMode) -> Self {
        self.fallback_mode = mode;
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn fallback_mode(&self) -> FallbackMode {
        self.fallback_mode
    }

    /// Build the live resource for `location`, falling back to `next` per the fallback mode.
    pub fn remote(
        &self,
        location: ResourceLocation,
        next: Arc<dyn DownloadableResource>,
    ) -> RemoteResource {
        let remote = match self.fallback_mode {
            FallbackMode::Delegate => RemoteResource::new(&self.base_url, location, next),
            FallbackMode::NotFound => RemoteResource::without_fallback(&self.base_url, location),
        };
        remote.with_transport(Arc::clone(&self.transport))
    }

    /// Same as [`Self::remote`], erased for hosts that keep a list of resources.
    pub fn transform(
        &self,
        location: ResourceLocation,
        next: Arc<dyn DownloadableResource>,
    ) -> Arc<dyn DownloadableResource> {
        Arc::new(self.remote(location, next))
    }
}

impl std::fmt::Debug for DevResourceTransformer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DevResourceTransformer")
            .field("base_url", &self.base_url)
            .field("fallback_mode", &self.fallback_mode)
            .finish()
    }
}
