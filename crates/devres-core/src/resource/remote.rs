//! Resource served from the live asset server, with the bundled original as fallback.
//!
//! Per call: open a GET on the fixed target. If nothing could be opened, hand
//! the whole request to the fallback. If the server answered 2xx with no body,
//! write nothing. Otherwise copy the body; failures from then on are fatal
//! because bytes may already have reached the client.

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use super::{flush_quietly, DownloadableResource, ResponseContext, ServeRequest};
use crate::error::DownloadError;
use crate::location::ResourceLocation;
use crate::transport::{CurlTransport, TransferError, Transport};

/// How a single call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The live server delivered `bytes` bytes.
    Fetched { bytes: u64 },
    /// The live server answered successfully with an empty body; nothing was written.
    Empty,
    /// The live server could not be opened; the fallback served the request.
    FellBack,
    /// The live server could not be opened and there is no fallback; nothing was written.
    NotFound,
}

/// Where the bytes of one call go.
enum Destination<'a> {
    Sink(&'a mut dyn Write),
    Response {
        request: &'a ServeRequest,
        response: &'a mut dyn ResponseContext,
        content_type: &'a str,
        started: bool,
        sink_unavailable: bool,
    },
}

impl Destination<'_> {
    fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
        match self {
            Destination::Sink(sink) => sink.write_all(chunk),
            Destination::Response {
                response,
                content_type,
                started,
                sink_unavailable,
                ..
            } => {
                if !*started {
                    *started = true;
                    if !content_type.trim().is_empty() {
                        response.set_content_type(*content_type);
                    }
                }
                match response.output_sink() {
                    Ok(sink) => sink.write_all(chunk),
                    Err(e) => {
                        *sink_unavailable = true;
                        Err(e)
                    }
                }
            }
        }
    }

    fn flush(&mut self) {
        match self {
            Destination::Sink(sink) => flush_quietly(&mut **sink),
            Destination::Response { response, .. } => match response.output_sink() {
                Ok(sink) => flush_quietly(sink),
                Err(e) => tracing::debug!("error flushing output stream: {}", e),
            },
        }
    }

    fn sink_unavailable(&self) -> bool {
        matches!(
            self,
            Destination::Response {
                sink_unavailable: true,
                ..
            }
        )
    }

    fn delegate(self, fallback: &dyn DownloadableResource) -> Result<(), DownloadError> {
        match self {
            Destination::Sink(sink) => fallback.stream_to(sink),
            Destination::Response {
                request, response, ..
            } => fallback.serve_resource(request, response),
        }
    }
}

/// Serves `base_url + location.path` from the live asset server.
///
/// The target URL is fixed at construction; every call opens its own
/// transfer, so one instance can serve concurrent requests.
pub struct RemoteResource {
    target: String,
    location: ResourceLocation,
    fallback: Option<Arc<dyn DownloadableResource>>,
    transport: Arc<dyn Transport>,
}

impl RemoteResource {
    /// Remote resource that falls back to `fallback` when the server cannot be opened.
    pub fn new(
        base_url: &str,
        location: ResourceLocation,
        fallback: Arc<dyn DownloadableResource>,
    ) -> Self {
        Self::build(base_url, location, Some(fallback))
    }

    /// Remote resource that treats an unreachable server as "not found".
    pub fn without_fallback(base_url: &str, location: ResourceLocation) -> Self {
        Self::build(base_url, location, None)
    }

    fn build(
        base_url: &str,
        location: ResourceLocation,
        fallback: Option<Arc<dyn DownloadableResource>>,
    ) -> Self {
        Self {
            target: format!("{}{}", base_url, location.path()),
            location,
            fallback,
            transport: Arc::new(CurlTransport::new()),
        }
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// The URL every call fetches.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn location(&self) -> &ResourceLocation {
        &self.location
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// [`DownloadableResource::stream_to`], reporting how the call ended.
    pub fn fetch_to(&self, sink: &mut dyn Write) -> Result<FetchOutcome, DownloadError> {
        self.fetch(Destination::Sink(sink))
    }

    /// [`DownloadableResource::serve_resource`], reporting how the call ended.
    pub fn fetch_into_response(
        &self,
        request: &ServeRequest,
        response: &mut dyn ResponseContext,
    ) -> Result<FetchOutcome, DownloadError> {
        tracing::debug!("{} {} -> {}", request.method(), request.path(), self.target);
        self.fetch(Destination::Response {
            request,
            response,
            content_type: self.location.content_type(),
            started: false,
            sink_unavailable: false,
        })
    }

    fn fetch(&self, mut dest: Destination<'_>) -> Result<FetchOutcome, DownloadError> {
        tracing::debug!("serving: {}", self);

        let result = self
            .transport
            .get(&self.target, &mut |chunk: &[u8]| dest.write_chunk(chunk));

        match result {
            Ok(0) => {
                tracing::warn!("resource not found (empty response from {}): {}", self.target, self);
                Ok(FetchOutcome::Empty)
            }
            Ok(bytes) => {
                dest.flush();
                tracing::debug!("serving {} done ({} bytes)", self.target, bytes);
                Ok(FetchOutcome::Fetched { bytes })
            }
            Err(e) if e.is_open_failure() => self.recover(dest, e),
            Err(TransferError::Sink(e)) if dest.sink_unavailable() => Err(DownloadError::Sink(e)),
            Err(e) => {
                dest.flush();
                Err(match e {
                    TransferError::Sink(io) => DownloadError::Copy(io),
                    other => DownloadError::Transfer {
                        url: self.target.clone(),
                        source: other,
                    },
                })
            }
        }
    }

    fn recover(
        &self,
        dest: Destination<'_>,
        cause: TransferError,
    ) -> Result<FetchOutcome, DownloadError> {
        match &self.fallback {
            Some(fallback) => {
                tracing::warn!(
                    "could not open {} for {}, serving original: {}",
                    self.target,
                    self.location.path(),
                    cause
                );
                dest.delegate(fallback.as_ref())?;
                Ok(FetchOutcome::FellBack)
            }
            None => {
                tracing::warn!(
                    "resource not found ({} unreachable: {}): {}",
                    self.target,
                    cause,
                    self
                );
                Ok(FetchOutcome::NotFound)
            }
        }
    }
}

impl DownloadableResource for RemoteResource {
    fn content_type(&self) -> &str {
        self.location.content_type()
    }

    fn stream_to(&self, sink: &mut dyn Write) -> Result<(), DownloadError> {
        self.fetch_to(sink).map(|_| ())
    }

    fn serve_resource(
        &self,
        request: &ServeRequest,
        response: &mut dyn ResponseContext,
    ) -> Result<(), DownloadError> {
        self.fetch_into_response(request, response).map(|_| ())
    }
}

impl fmt::Display for RemoteResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.location, f)
    }
}

impl fmt::Debug for RemoteResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteResource")
            .field("target", &self.target)
            .field("location", &self.location)
            .field("has_fallback", &self.fallback.is_some())
            .finish()
    }
}
