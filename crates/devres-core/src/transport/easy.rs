//! libcurl-backed transport: one easy handle per GET.

use std::cell::RefCell;
use std::io;
use std::time::Duration;

use super::head::ResponseHead;
use super::{BodySink, TransferError, Transport};
use crate::config::DevresConfig;

/// Plain GET through libcurl. Follows redirects; sends no custom headers.
#[derive(Debug, Clone, Default)]
pub struct CurlTransport {
    connect_timeout: Option<Duration>,
}

impl CurlTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(cfg: &DevresConfig) -> Self {
        match cfg.connect_timeout_secs {
            Some(secs) => Self::new().with_connect_timeout(Duration::from_secs(secs)),
            None => Self::new(),
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }
}

impl Transport for CurlTransport {
    fn get(&self, url: &str, on_body: &mut BodySink<'_>) -> Result<u64, TransferError> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(TransferError::Connect)?;
        easy.follow_location(true).map_err(TransferError::Connect)?;
        if let Some(timeout) = self.connect_timeout {
            easy.connect_timeout(timeout)
                .map_err(TransferError::Connect)?;
        }

        let head = RefCell::new(ResponseHead::default());
        let mut delivered = 0u64;
        let mut sink_error: Option<io::Error> = None;

        let mut transfer = easy.transfer();
        transfer
            .header_function(|line| {
                head.borrow_mut().feed(line);
                true
            })
            .map_err(TransferError::Connect)?;
        transfer
            .write_function(|data| {
                // Error pages are drained, never handed to the sink.
                if !head.borrow().accepts_body() {
                    return Ok(data.len());
                }
                match on_body(data) {
                    Ok(()) => {
                        delivered += data.len() as u64;
                        Ok(data.len())
                    }
                    Err(e) => {
                        sink_error = Some(e);
                        Ok(0) // abort transfer
                    }
                }
            })
            .map_err(TransferError::Connect)?;
        let performed = transfer.perform();
        drop(transfer);

        if let Some(e) = sink_error {
            return Err(TransferError::Sink(e));
        }
        let head = head.into_inner();
        match performed {
            Err(e) if head.is_open() || delivered > 0 => Err(TransferError::Read(e)),
            Err(e) => Err(TransferError::Connect(e)),
            Ok(()) if head.accepts_body() => Ok(delivered),
            Ok(()) => Err(TransferError::Status(head.status().unwrap_or(0))),
        }
    }
}
