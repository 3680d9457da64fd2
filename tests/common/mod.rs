//! Shared test fixtures and utilities for integration tests.
//!
//! # Scripted Backend
//!
//! [`ScriptedBackend`] stands in for the index server. Each endpoint path is
//! given a canned [`Reply`]; every request is recorded so tests can assert on
//! the exact path and JSON body the client produced. Paths without a script
//! answer as if the server were unreachable.
//!
//! # Available Fixtures
//!
//! - `backend`: an empty scripted backend (every request fails)
//! - `mathlib_page`: a module page with an imported-by list and instance lists
//!
//! # Log Capture
//!
//! [`CapturedLog`] is a `MakeWriter` for a test-local `fmt` subscriber. A
//! backend built with [`ScriptedBackend::journal_to`] writes a
//! [`RECEIVED_MARKER`] line into the same log for every request, so tests can
//! check what was logged relative to when the request went out.

use m4doc_client::{MemoryPage, PageContext, Transport, TransportError};
use rstest::fixture;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};
use tracing_subscriber::fmt::MakeWriter;

#[allow(dead_code)]
pub const SITE_ROOT: &str = "/mathlib4_docs/";

/// What the scripted backend does for one endpoint.
#[allow(dead_code)] // Variants used across different integration test crates
#[derive(Debug, Clone)]
pub enum Reply {
    /// Respond with this body text.
    Body(String),
    /// Fail before a response arrives.
    NetworkError,
    /// Respond, but fail while reading the body.
    ReadError,
}

impl Reply {
    pub fn json(value: serde_json::Value) -> Self {
        Self::Body(value.to_string())
    }
}

/// One request as the backend received it.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub path: String,
    pub body: serde_json::Value,
}

/// Prefix of the line a journaling backend writes for each request.
#[allow(dead_code)]
pub const RECEIVED_MARKER: &str = "backend received ";

/// Shared in-memory log sink.
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct CapturedLog(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)]
impl CapturedLog {
    pub fn lines(&self) -> Vec<String> {
        let buf = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).lines().map(str::to_string).collect()
    }
}

impl Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLog {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[derive(Debug, Default)]
pub struct ScriptedBackend {
    replies: HashMap<String, Reply>,
    requests: RefCell<Vec<Recorded>>,
    journal: Option<CapturedLog>,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, path: &str, reply: Reply) -> Self {
        self.replies.insert(path.to_string(), reply);
        self
    }

    pub fn reply_json(self, path: &str, value: serde_json::Value) -> Self {
        self.reply(path, Reply::json(value))
    }

    /// Write a [`RECEIVED_MARKER`] line into `log` for every request.
    pub fn journal_to(mut self, log: CapturedLog) -> Self {
        self.journal = Some(log);
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    /// Bodies sent to `path`, in order.
    pub fn bodies_for(&self, path: &str) -> Vec<serde_json::Value> {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.path == path)
            .map(|r| r.body.clone())
            .collect()
    }
}

impl Transport for ScriptedBackend {
    async fn post(&self, path: &str, body: String) -> Result<String, TransportError> {
        if let Some(mut journal) = self.journal.clone() {
            writeln!(journal, "{}{}", RECEIVED_MARKER, path).unwrap();
        }
        let body = serde_json::from_str(&body)
            .unwrap_or_else(|e| panic!("client sent invalid JSON to {}: {} ({})", path, body, e));
        self.requests.borrow_mut().push(Recorded {
            path: path.to_string(),
            body,
        });

        match self.replies.get(path) {
            Some(Reply::Body(text)) => Ok(text.clone()),
            Some(Reply::ReadError) => Err(TransportError::Read {
                path: path.to_string(),
                message: "connection reset while reading body".to_string(),
            }),
            Some(Reply::NetworkError) | None => Err(TransportError::Network {
                path: path.to_string(),
                message: "connection refused".to_string(),
            }),
        }
    }
}

#[allow(dead_code)]
#[fixture]
pub fn backend() -> ScriptedBackend {
    m4doc_client::tracing::init();
    ScriptedBackend::new()
}

/// A page documenting `Mathlib.Algebra.Group.Defs` with one imported-by list,
/// two class instance lists and one type instance list.
#[allow(dead_code)]
#[fixture]
pub fn mathlib_page() -> MemoryPage {
    MemoryPage::new(PageContext::new(SITE_ROOT).with_module("Mathlib.Algebra.Group.Defs"))
        .with_element("imported-by-list", "", "<li>loading</li>")
        .with_element("instances-list", "instances-list-Monoid", "")
        .with_element("instances-for-list", "instances-for-list-Nat", "")
        .with_element("instances-list", "instances-list-Group", "")
}
