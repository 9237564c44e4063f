//! Ready-made resources for a push-notification registration service.

use crate::codec::JsonCodec;
use crate::error::ResourceError;
use crate::http::HttpMethod;
use crate::resource::Resource;
use crate::types::{PushToken, Registration};

/// POST `{"token": ...}` to `url`. Any JSON reply counts as success.
pub fn push_notification(url: &str, token: &str) -> Result<Resource<bool>, ResourceError> {
    let payload = PushToken {
        token: token.to_string(),
    };
    Resource::json(url, HttpMethod::Post(payload), |_| Some(true))
}

/// GET the list of registrations stored at `url`.
pub fn registrations(url: &str) -> Result<Resource<Vec<Registration>>, ResourceError> {
    Resource::with_codec(
        url,
        HttpMethod::Get(None),
        JsonCodec::<(), Vec<Registration>>::new(),
        Some,
    )
}
