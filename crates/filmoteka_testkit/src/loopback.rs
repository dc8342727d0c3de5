//! Loopback HTTP client.

use crate::server::CatalogServer;
use async_trait::async_trait;
use filmoteka_client::{HttpClient, HttpRequest, HttpResponse};
use parking_lot::Mutex;
use std::sync::Arc;

/// An [`HttpClient`] that routes requests straight into a [`CatalogServer`].
///
/// Tests drive the real client and coordinator code paths without sockets.
/// Failures can be injected per call: a scripted transport drop or a forced
/// status line.
pub struct LoopbackClient {
    server: Arc<CatalogServer>,
    requests: Mutex<Vec<HttpRequest>>,
    fail_next: Mutex<Option<String>>,
    forced_status: Mutex<Option<(u16, String)>>,
}

impl LoopbackClient {
    /// Creates a client connected to the given server.
    pub fn new(server: Arc<CatalogServer>) -> Self {
        Self {
            server,
            requests: Mutex::new(Vec::new()),
            fail_next: Mutex::new(None),
            forced_status: Mutex::new(None),
        }
    }

    /// Makes the next send fail at the transport level.
    pub fn fail_next_with(&self, message: impl Into<String>) {
        *self.fail_next.lock() = Some(message.into());
    }

    /// Makes every following send answer with this status line.
    pub fn respond_with_status(&self, status: u16, text: impl Into<String>) {
        *self.forced_status.lock() = Some((status, text.into()));
    }

    /// Clears a forced status line.
    pub fn clear_forced_status(&self) {
        *self.forced_status.lock() = None;
    }

    /// Returns how many requests reached this client.
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Returns copies of the recorded requests.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl HttpClient for LoopbackClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        self.requests.lock().push(request.clone());

        if let Some(message) = self.fail_next.lock().take() {
            return Err(message);
        }
        if let Some((status, text)) = self.forced_status.lock().clone() {
            return Ok(HttpResponse::new(status, text, Vec::new()));
        }

        Ok(self.server.handle(&request))
    }
}
