//! Declarative description of one HTTP call.
//!
//! # Design
//! A `Resource<A>` is pure data plus a pure function: an absolute URL, a verb
//! whose payload is already wire-ready bytes, and a parser from response bytes
//! to `Option<A>`. It is never mutated after construction. The parser sits
//! behind an `Arc` and the payload is a `Bytes`, so clones are cheap and one
//! resource can be loaded any number of times, concurrently, without locking.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use serde::Serialize;
use url::Url;

use crate::codec::{Codec, JsonCodec, JsonValue};
use crate::error::ResourceError;
use crate::http::HttpMethod;

type ParseFn<A> = dyn Fn(&[u8]) -> Option<A> + Send + Sync;

/// One HTTP call and the way to interpret its response.
pub struct Resource<A> {
    url: Url,
    method: HttpMethod<Bytes>,
    parse: Arc<ParseFn<A>>,
}

impl<A: 'static> Resource<A> {
    /// Build a resource from a raw byte payload and a raw byte parser.
    pub fn new<F>(url: &str, method: HttpMethod<Bytes>, parse: F) -> Result<Self, ResourceError>
    where
        F: Fn(&[u8]) -> Option<A> + Send + Sync + 'static,
    {
        Ok(Self::from_url(parse_url(url)?, method, parse))
    }

    pub fn from_url<F>(url: Url, method: HttpMethod<Bytes>, parse: F) -> Self
    where
        F: Fn(&[u8]) -> Option<A> + Send + Sync + 'static,
    {
        Self {
            url,
            method,
            parse: Arc::new(parse),
        }
    }

    /// Build a resource whose payload and response go through `codec`.
    ///
    /// The payload is encoded once, here. At parse time the response is
    /// decoded and, only if that succeeds, handed to `extract`.
    pub fn with_codec<C, F>(
        url: &str,
        method: HttpMethod<C::Request>,
        codec: C,
        extract: F,
    ) -> Result<Self, ResourceError>
    where
        C: Codec,
        F: Fn(C::Response) -> Option<A> + Send + Sync + 'static,
    {
        let url = parse_url(url)?;
        let method = method.try_map(|payload| codec.encode(&payload))?;
        Ok(Self::from_url(url, method, move |bytes| {
            codec.decode(bytes).and_then(&extract)
        }))
    }

    /// JSON convenience: serialize the payload, hand the decoded response
    /// value to `parse_json`.
    pub fn json<T, F>(url: &str, method: HttpMethod<T>, parse_json: F) -> Result<Self, ResourceError>
    where
        T: Serialize + 'static,
        F: Fn(serde_json::Value) -> Option<A> + Send + Sync + 'static,
    {
        Self::with_codec(url, method, JsonCodec::<T, serde_json::Value>::new(), parse_json)
    }

    /// A body-less JSON GET.
    pub fn get_json<F>(url: &str, parse_json: F) -> Result<Self, ResourceError>
    where
        F: Fn(serde_json::Value) -> Option<A> + Send + Sync + 'static,
    {
        Self::with_codec(url, HttpMethod::default(), JsonValue::new(), parse_json)
    }
}

impl<A> Resource<A> {
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn method(&self) -> &HttpMethod<Bytes> {
        &self.method
    }

    /// Run the parser over a response body.
    pub fn parse(&self, bytes: &[u8]) -> Option<A> {
        (self.parse)(bytes)
    }
}

impl<A> Clone for Resource<A> {
    fn clone(&self) -> Self {
        Self {
            url: self.url.clone(),
            method: self.method.clone(),
            parse: Arc::clone(&self.parse),
        }
    }
}

impl<A> fmt::Debug for Resource<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("url", &self.url.as_str())
            .field("method", &self.method)
            .finish_non_exhaustive()
    }
}

fn parse_url(url: &str) -> Result<Url, ResourceError> {
    Url::parse(url).map_err(|source| ResourceError::InvalidUrl {
        url: url.to_string(),
        source,
    })
}
