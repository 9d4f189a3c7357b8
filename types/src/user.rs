//! User info snapshot.

use serde::{Deserialize, Serialize};

/// Read-only snapshot of a user as reported by the accounts service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Stable user identifier.
    pub uid: String,
    /// Primary email address.
    pub email: String,
    /// Number of verification tiers completed. 0 through 3 in practice;
    /// anything at or above a tier's target reads as verified for that
    /// tier.
    #[serde(default)]
    pub level: u32,
}

impl UserInfo {
    pub fn new(uid: impl Into<String>, email: impl Into<String>, level: u32) -> Self {
        Self {
            uid: uid.into(),
            email: email.into(),
            level,
        }
    }
}
