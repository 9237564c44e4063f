//! The transport collaborator: turns an `HttpRequest` into an `HttpResponse`.
//!
//! # Design
//! `Webservice` only knows the `Transport` trait, so tests plug in stubs and
//! production code plugs in `UreqTransport`. ureq is a blocking client; each
//! request runs on Tokio's blocking pool so callers stay asynchronous.
//! Non-2xx statuses are returned as data, never as errors, leaving status
//! interpretation to whoever reads the response.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;
use ureq::typestate::{WithBody, WithoutBody};
use ureq::RequestBuilder;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Performs one request/response exchange.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// `Transport` backed by a shared `ureq::Agent`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// An agent that reports every status code as a normal response.
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Use a caller-configured agent (timeouts, proxies, TLS and so on).
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for UreqTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || execute(&agent, request))
            .await
            .map_err(|e| TransportError::Task(e.to_string()))?
    }
}

/// Execute `request` synchronously.
fn execute(agent: &ureq::Agent, request: HttpRequest) -> Result<HttpResponse, TransportError> {
    let url = request.url.as_str();
    let body = request.body.as_deref();

    let result = match request.method {
        HttpMethod::Get(_) => send_without_body(agent.get(url), body),
        HttpMethod::Head => send_without_body(agent.head(url), body),
        HttpMethod::Delete => send_without_body(agent.delete(url), body),
        HttpMethod::Connect => send_without_body(agent.connect(url), body),
        HttpMethod::Options(_) => send_without_body(agent.options(url), body),
        HttpMethod::Trace => send_without_body(agent.trace(url), body),
        HttpMethod::Post(()) => send_with_body(agent.post(url), body),
        HttpMethod::Patch(()) => send_with_body(agent.patch(url), body),
        HttpMethod::Put(()) => send_with_body(agent.put(url), body),
    };

    let mut response = result.map_err(|e| TransportError::Request {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_vec()
        .map_err(|e| TransportError::Body(e.to_string()))?;
    debug!(status, bytes = body.len(), "response received");

    Ok(HttpResponse {
        status,
        body: Bytes::from(body),
    })
}

type UreqResult = Result<ureq::http::Response<ureq::Body>, ureq::Error>;

// GET and OPTIONS may carry a payload; ureq only sends one when forced.
fn send_without_body(builder: RequestBuilder<WithoutBody>, body: Option<&[u8]>) -> UreqResult {
    match body {
        Some(body) => builder.force_send_body().send(body),
        None => builder.call(),
    }
}

fn send_with_body(builder: RequestBuilder<WithBody>, body: Option<&[u8]>) -> UreqResult {
    match body {
        Some(body) => builder.send(body),
        None => builder.send_empty(),
    }
}
