//! Error types for resource construction, transport and loading.
//!
//! # Design
//! Construction errors (`ResourceError`) are programmer mistakes: a bad URL
//! literal or a payload the codec cannot serialize. They surface before any
//! I/O happens. Everything that can go wrong afterwards is an expected
//! external condition and is reported either as `None` or, through the
//! widened API, as a `LoadError` that keeps "the network failed" apart from
//! "the response did not parse".

use thiserror::Error;

/// The structured-data codec could not serialize a payload.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// A `Resource` could not be constructed.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The address is not an absolute URL.
    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The request payload could not be encoded.
    #[error("payload encoding failed: {0}")]
    Encode(#[from] CodecError),
}

/// The transport failed to deliver a response body.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("reading response body failed: {0}")]
    Body(String),

    /// The blocking task driving the request did not complete.
    #[error("transport task failed: {0}")]
    Task(String),
}

/// Why a load produced no value.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Bytes arrived but the resource's parser rejected them.
    #[error("response could not be parsed")]
    Parse,

    /// `load` was called outside a Tokio runtime.
    #[error("no Tokio runtime to run the request on")]
    NoRuntime,
}
