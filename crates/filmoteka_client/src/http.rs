//! HTTP capability abstraction.
//!
//! The actual HTTP machinery is abstracted behind a trait so hosting
//! environments can plug in their own transport (reqwest, hyper, a browser
//! fetch bridge) and tests can route requests in-process.

use async_trait::async_trait;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET.
    Get,
    /// POST.
    Post,
    /// PUT.
    Put,
}

impl Method {
    /// Returns the method name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

/// One outgoing HTTP request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Request method.
    pub method: Method,
    /// Absolute request URL.
    pub url: String,
    /// Request headers as name-value pairs.
    pub headers: Vec<(String, String)>,
    /// Request body, if any.
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a body-less request.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Adds a header.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Sets the request body.
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Returns the value of a header, if present.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// One incoming HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// HTTP status text.
    pub status_text: String,
    /// Response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a response.
    pub fn new(status: u16, status_text: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body,
        }
    }

    /// Creates a 200 OK response with a JSON body.
    pub fn ok(body: Vec<u8>) -> Self {
        Self::new(200, "OK", body)
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The HTTP transport capability.
///
/// An `Err` means the request never produced a response (DNS failure,
/// refused connection, dropped socket). A response with any status,
/// including 4xx/5xx, is `Ok`; status validation is the client's job.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Sends one request and awaits its response.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String>;
}
