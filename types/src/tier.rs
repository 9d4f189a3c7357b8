//! Verification tiers and their fixed target levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three account verification stages.
///
/// Each tier is complete once the user's level reaches its target.
/// Target levels are fixed constants and never change at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationTier {
    Email,
    Phone,
    Identity,
}

impl VerificationTier {
    /// All tiers in panel order.
    pub const ALL: [VerificationTier; 3] = [Self::Email, Self::Phone, Self::Identity];

    /// The user level at which this tier counts as completed.
    pub fn target_level(&self) -> u32 {
        match self {
            Self::Email => 1,
            Self::Phone => 2,
            Self::Identity => 3,
        }
    }

    /// Lower-case name used in message identifiers and API payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Identity => "identity",
        }
    }
}

impl fmt::Display for VerificationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
