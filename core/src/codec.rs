//! Structured-data codecs used by the `Resource` convenience constructors.
//!
//! Encoding is fallible and reported as `CodecError`; decoding failure is an
//! ordinary outcome and comes back as `None`.

use std::marker::PhantomData;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CodecError;

/// Converts request payloads to bytes and response bytes to values.
pub trait Codec: Send + Sync + 'static {
    type Request;
    type Response;

    fn encode(&self, value: &Self::Request) -> Result<Bytes, CodecError>;

    fn decode(&self, bytes: &[u8]) -> Option<Self::Response>;
}

/// JSON codec over any serde types.
pub struct JsonCodec<Req, Resp> {
    _marker: PhantomData<fn(&Req) -> Resp>,
}

/// JSON codec over untyped `serde_json::Value` on both sides.
pub type JsonValue = JsonCodec<serde_json::Value, serde_json::Value>;

impl<Req, Resp> JsonCodec<Req, Resp> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<Req, Resp> Default for JsonCodec<Req, Resp> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Req, Resp> Clone for JsonCodec<Req, Resp> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<Req, Resp> std::fmt::Debug for JsonCodec<Req, Resp> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("JsonCodec")
    }
}

impl<Req, Resp> Codec for JsonCodec<Req, Resp>
where
    Req: Serialize + 'static,
    Resp: DeserializeOwned + 'static,
{
    type Request = Req;
    type Response = Resp;

    fn encode(&self, value: &Req) -> Result<Bytes, CodecError> {
        Ok(Bytes::from(serde_json::to_vec(value)?))
    }

    fn decode(&self, bytes: &[u8]) -> Option<Resp> {
        serde_json::from_slice(bytes).ok()
    }
}
