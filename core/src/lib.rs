//! Typed HTTP resources executed over a single shared client.
//!
//! # Overview
//! A [`Resource`] describes one HTTP call as data: an absolute URL, an
//! [`HttpMethod`] carrying the wire-ready payload, and a parser from response
//! bytes to an optional typed value. A [`Webservice`] executes resources
//! through a pluggable [`Transport`] and delivers each result through one
//! completion callback.
//!
//! # Design
//! - The verb and its optional payload are one closed enum; the wire request
//!   and the parser are derived from it generically.
//! - Construction errors (bad URL, unencodable payload) are returned up
//!   front. After construction, failures become `None`, or a [`LoadError`]
//!   through the widened API.
//! - Transport and codec are injected, so there is no global state and tests
//!   use stub transports.

pub mod client;
pub mod codec;
pub mod error;
pub mod http;
pub mod push;
pub mod resource;
pub mod transport;
pub mod types;

pub use client::Webservice;
pub use codec::{Codec, JsonCodec, JsonValue};
pub use error::{CodecError, LoadError, ResourceError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use push::{push_notification, registrations};
pub use resource::Resource;
pub use transport::{Transport, UreqTransport};
pub use types::{PushToken, Registration};
