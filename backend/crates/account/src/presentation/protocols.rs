//! HTTP Protocol Records
//!
//! The only shapes controllers exchange with the HTTP boundary.

use std::error::Error;

use serde_json::Value;

use crate::presentation::validation::ValidationError;

/// Inbound request: the raw JSON body
#[derive(Debug, Clone, Default)]
pub struct HttpRequest {
    pub body: Value,
}

impl HttpRequest {
    pub fn new(body: Value) -> Self {
        Self { body }
    }
}

/// Outbound response
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: ResponseBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Empty,
    Json(Value),
    BadRequest(ValidationError),
    ServerError(ServerError),
}

impl HttpResponse {
    /// Stack carried by a 500 response, if any
    pub fn server_error_stack(&self) -> Option<&str> {
        match &self.body {
            ResponseBody::ServerError(err) if self.status_code == 500 => Some(err.stack()),
            _ => None,
        }
    }
}

/// Generic server error carrying the originating error chain
///
/// The stack is for the error log only; clients never see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerError {
    stack: String,
}

impl ServerError {
    /// Render `err` and every `source()` below it, outermost first
    pub fn new(err: &(dyn Error + 'static)) -> Self {
        let mut stack = format!("Error: {}", err);
        let mut source = err.source();
        while let Some(cause) = source {
            stack.push_str(&format!("\n    caused by: {}", cause));
            source = cause.source();
        }
        Self { stack }
    }

    pub fn stack(&self) -> &str {
        &self.stack
    }
}

/// Anything that turns a request into a response
///
/// Never fails: unexpected failures are 500 responses.
#[trait_variant::make(Controller: Send)]
pub trait LocalController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse;
}
