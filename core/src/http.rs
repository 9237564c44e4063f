//! HTTP verbs, wire requests and wire responses as plain data.
//!
//! # Design
//! `HttpMethod<Body>` is a closed sum type: every verb is one variant, and the
//! verbs that may carry a request body hold it inline. The payload-capability
//! table is fixed here and nowhere else:
//!
//! | Variant   | Payload   |
//! |-----------|-----------|
//! | `Get`     | optional  |
//! | `Post`    | required  |
//! | `Patch`   | required  |
//! | `Put`     | required  |
//! | `Options` | optional  |
//! | others    | none      |
//!
//! `HttpRequest` is what a `Resource` looks like once it is ready for the
//! wire. The transport turns it into bytes on a socket and hands back an
//! `HttpResponse`; the core never touches the network itself.

use std::fmt;

use bytes::Bytes;
use url::Url;

use crate::resource::Resource;

/// An HTTP verb together with its payload, if the verb carries one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HttpMethod<Body> {
    Get(Option<Body>),
    Head,
    Post(Body),
    Patch(Body),
    Put(Body),
    Delete,
    Connect,
    Options(Option<Body>),
    Trace,
}

impl<Body> HttpMethod<Body> {
    /// Canonical uppercase method token.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get(_) => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Post(_) => "POST",
            HttpMethod::Patch(_) => "PATCH",
            HttpMethod::Put(_) => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Connect => "CONNECT",
            HttpMethod::Options(_) => "OPTIONS",
            HttpMethod::Trace => "TRACE",
        }
    }

    /// Replace the payload type, keeping the verb.
    ///
    /// `f` runs exactly once when a payload is present and never otherwise.
    pub fn map<B, F>(self, f: F) -> HttpMethod<B>
    where
        F: FnOnce(Body) -> B,
    {
        match self {
            HttpMethod::Get(body) => HttpMethod::Get(body.map(f)),
            HttpMethod::Head => HttpMethod::Head,
            HttpMethod::Post(body) => HttpMethod::Post(f(body)),
            HttpMethod::Patch(body) => HttpMethod::Patch(f(body)),
            HttpMethod::Put(body) => HttpMethod::Put(f(body)),
            HttpMethod::Delete => HttpMethod::Delete,
            HttpMethod::Connect => HttpMethod::Connect,
            HttpMethod::Options(body) => HttpMethod::Options(body.map(f)),
            HttpMethod::Trace => HttpMethod::Trace,
        }
    }

    /// Like [`HttpMethod::map`], but the conversion may fail.
    pub fn try_map<B, E, F>(self, f: F) -> Result<HttpMethod<B>, E>
    where
        F: FnOnce(Body) -> Result<B, E>,
    {
        Ok(match self {
            HttpMethod::Get(body) => HttpMethod::Get(body.map(f).transpose()?),
            HttpMethod::Head => HttpMethod::Head,
            HttpMethod::Post(body) => HttpMethod::Post(f(body)?),
            HttpMethod::Patch(body) => HttpMethod::Patch(f(body)?),
            HttpMethod::Put(body) => HttpMethod::Put(f(body)?),
            HttpMethod::Delete => HttpMethod::Delete,
            HttpMethod::Connect => HttpMethod::Connect,
            HttpMethod::Options(body) => HttpMethod::Options(body.map(f).transpose()?),
            HttpMethod::Trace => HttpMethod::Trace,
        })
    }

    pub fn as_ref(&self) -> HttpMethod<&Body> {
        match self {
            HttpMethod::Get(body) => HttpMethod::Get(body.as_ref()),
            HttpMethod::Head => HttpMethod::Head,
            HttpMethod::Post(body) => HttpMethod::Post(body),
            HttpMethod::Patch(body) => HttpMethod::Patch(body),
            HttpMethod::Put(body) => HttpMethod::Put(body),
            HttpMethod::Delete => HttpMethod::Delete,
            HttpMethod::Connect => HttpMethod::Connect,
            HttpMethod::Options(body) => HttpMethod::Options(body.as_ref()),
            HttpMethod::Trace => HttpMethod::Trace,
        }
    }

    /// The payload, if this instance carries one.
    pub fn body(&self) -> Option<&Body> {
        self.as_ref().into_body()
    }

    pub fn into_body(self) -> Option<Body> {
        match self {
            HttpMethod::Post(body) | HttpMethod::Patch(body) | HttpMethod::Put(body) => Some(body),
            HttpMethod::Get(body) | HttpMethod::Options(body) => body,
            HttpMethod::Head | HttpMethod::Delete | HttpMethod::Connect | HttpMethod::Trace => None,
        }
    }
}

impl<Body> Default for HttpMethod<Body> {
    fn default() -> Self {
        HttpMethod::Get(None)
    }
}

impl<Body> fmt::Display for HttpMethod<Body> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request ready for the wire.
///
/// Built from a `Resource` via `From`. The verb is kept without its payload;
/// the payload bytes travel in `body`. Carries no headers, timeouts or
/// credentials; those belong to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod<()>,
    pub url: Url,
    pub body: Option<Bytes>,
}

impl<A> From<&Resource<A>> for HttpRequest {
    fn from(resource: &Resource<A>) -> Self {
        HttpRequest {
            method: resource.method().as_ref().map(|_| ()),
            url: resource.url().clone(),
            body: resource.method().body().cloned(),
        }
    }
}

/// A response as handed back by the transport.
///
/// The status is informational only; `Webservice` parses the body regardless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(payload: &str) -> Vec<HttpMethod<String>> {
        let p = || payload.to_string();
        vec![
            HttpMethod::Get(None),
            HttpMethod::Get(Some(p())),
            HttpMethod::Head,
            HttpMethod::Post(p()),
            HttpMethod::Patch(p()),
            HttpMethod::Put(p()),
            HttpMethod::Delete,
            HttpMethod::Connect,
            HttpMethod::Options(None),
            HttpMethod::Options(Some(p())),
            HttpMethod::Trace,
        ]
    }

    #[test]
    fn as_str_returns_canonical_tokens() {
        let tokens: Vec<&str> = all("x").iter().map(HttpMethod::as_str).collect();
        assert_eq!(
            tokens,
            vec![
                "GET", "GET", "HEAD", "POST", "PATCH", "PUT", "DELETE", "CONNECT", "OPTIONS",
                "OPTIONS", "TRACE"
            ]
        );
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(HttpMethod::Patch(()).to_string(), "PATCH");
        assert_eq!(HttpMethod::<()>::Connect.to_string(), "CONNECT");
    }

    #[test]
    fn map_identity_is_identity() {
        for method in all("payload") {
            assert_eq!(method.clone().map(|b| b), method);
        }
    }

    #[test]
    fn map_skips_payloadless_verbs() {
        let mut calls = 0;
        let mapped = HttpMethod::<String>::Delete.map(|b| {
            calls += 1;
            b.len()
        });
        assert_eq!(mapped, HttpMethod::Delete);
        assert_eq!(calls, 0);

        let mapped = HttpMethod::<String>::Get(None).map(|b| b.len());
        assert_eq!(mapped, HttpMethod::Get(None));
    }

    #[test]
    fn map_applies_transform_once() {
        let mut calls = 0;
        let mapped = HttpMethod::Put("abc".to_string()).map(|b| {
            calls += 1;
            b.len()
        });
        assert_eq!(mapped, HttpMethod::Put(3));
        assert_eq!(calls, 1);
    }

    #[test]
    fn try_map_propagates_error() {
        let result: Result<HttpMethod<u8>, String> =
            HttpMethod::Post("not a number".to_string()).try_map(|b| b.parse().map_err(|_| b));
        assert_eq!(result.unwrap_err(), "not a number");

        let result: Result<HttpMethod<u8>, String> =
            HttpMethod::Options(Some("7".to_string())).try_map(|b| b.parse().map_err(|_| b));
        assert_eq!(result.unwrap(), HttpMethod::Options(Some(7)));
    }

    #[test]
    fn body_follows_capability_table() {
        let with_body: Vec<&str> = all("p")
            .iter()
            .filter(|method| method.body() == Some(&"p".to_string()))
            .map(HttpMethod::as_str)
            .collect();
        assert_eq!(with_body, vec!["GET", "POST", "PATCH", "PUT", "OPTIONS"]);
        assert_eq!(HttpMethod::<String>::Trace.into_body(), None);
    }

    #[test]
    fn request_keeps_verb_and_moves_payload_to_body() {
        let resource = Resource::new(
            "https://example.test/push",
            HttpMethod::Options(Some(Bytes::from_static(b"42"))),
            |_| Some(()),
        )
        .unwrap();
        let request = HttpRequest::from(&resource);
        assert_eq!(request.method, HttpMethod::Options(Some(())));
        assert_eq!(request.method.as_str(), "OPTIONS");
        assert_eq!(request.body, Some(Bytes::from_static(b"42")));

        let resource =
            Resource::new("https://example.test/", HttpMethod::Delete, |_| Some(())).unwrap();
        let request = HttpRequest::from(&resource);
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.body, None);
    }

    #[test]
    fn default_is_bodyless_get() {
        assert_eq!(HttpMethod::<Bytes>::default(), HttpMethod::Get(None));
    }
}
