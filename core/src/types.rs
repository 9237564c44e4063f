//! DTOs for the push-registration endpoints.
//!
//! # Design
//! These mirror the mock-server's schema but are defined independently;
//! the integration tests catch any drift between the two crates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request payload for registering a device token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PushToken {
    pub token: String,
}

/// A stored registration, as listed by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Registration {
    pub id: Uuid,
    pub token: String,
}
