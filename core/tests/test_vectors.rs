//! Verify request building and response parsing against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Bodies are compared as parsed JSON (not raw strings) so field ordering
//! cannot cause false negatives.

use serde_json::Value;
use webservice_core::{HttpMethod, HttpRequest, Resource};

/// Build an `HttpMethod` from a vector's method string and optional payload.
fn method(name: &str, payload: Option<Value>) -> HttpMethod<Value> {
    let required = || payload.clone().unwrap_or_else(|| panic!("{name} needs a payload"));
    match name {
        "GET" => HttpMethod::Get(payload.clone()),
        "HEAD" => HttpMethod::Head,
        "POST" => HttpMethod::Post(required()),
        "PATCH" => HttpMethod::Patch(required()),
        "PUT" => HttpMethod::Put(required()),
        "DELETE" => HttpMethod::Delete,
        "CONNECT" => HttpMethod::Connect,
        "OPTIONS" => HttpMethod::Options(payload.clone()),
        "TRACE" => HttpMethod::Trace,
        other => panic!("unknown method: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[test]
fn request_test_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let url = vectors["url"].as_str().unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let verb = method(case["method"].as_str().unwrap(), case.get("payload").cloned());
        let expected = &case["expected_request"];

        let resource = Resource::json(url, verb, |_| Some(())).unwrap();
        let req = HttpRequest::from(&resource);

        assert_eq!(req.method.as_str(), expected["method"].as_str().unwrap(), "{name}: method");
        assert_eq!(req.url.as_str(), url, "{name}: url");

        match (&req.body, &expected["body"]) {
            (None, Value::Null) => {}
            (Some(body), expected_body) => {
                let body: Value = serde_json::from_slice(body).unwrap();
                assert_eq!(&body, expected_body, "{name}: body");
            }
            (None, expected_body) => panic!("{name}: expected body {expected_body}, got none"),
        }
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[test]
fn response_test_vectors() {
    let raw = include_str!("../../test-vectors/responses.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let resource = Resource::get_json("https://example.test/", Some).unwrap();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let body = case["body"].as_str().unwrap();
        let result = resource.parse(body.as_bytes());

        if let Some(expected_error) = case.get("expected_error") {
            match expected_error.as_str().unwrap() {
                "NoResult" => assert!(result.is_none(), "{name}: expected no result"),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            assert_eq!(result.as_ref(), Some(&case["expected_result"]), "{name}: parsed result");
        }
    }
}
