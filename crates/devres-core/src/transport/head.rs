//! Tracks the response head as curl reports header lines.

use std::str;

/// Status of the most recent response head. Redirects and `100 Continue`
/// produce several heads; each new status line starts over.
#[derive(Debug, Default)]
pub(crate) struct ResponseHead {
    status: Option<u32>,
    complete: bool,
}

impl ResponseHead {
    /// Feed one raw header line (including its line terminator).
    pub(crate) fn feed(&mut self, line: &[u8]) {
        let Ok(line) = str::from_utf8(line) else {
            return;
        };
        let line = line.trim_end();
        if line.starts_with("HTTP/") {
            self.status = parse_status_line(line);
            self.complete = false;
        } else if line.is_empty() && self.status.is_some() {
            self.complete = true;
        }
    }

    pub(crate) fn status(&self) -> Option<u32> {
        self.status
    }

    /// A complete 2xx head has been received.
    pub(crate) fn is_open(&self) -> bool {
        self.complete && matches!(self.status, Some(200..=299))
    }

    /// Body bytes belong to the resource: either the head is open, or the
    /// scheme has no status line at all (e.g. `file://`).
    pub(crate) fn accepts_body(&self) -> bool {
        self.status.is_none() || self.is_open()
    }
}

/// Parse `HTTP/1.1 200 OK` or `HTTP/2 404` into the status code.
fn parse_status_line(line: &str) -> Option<u32> {
    line.split_whitespace().nth(1)?.parse().ok()
}
