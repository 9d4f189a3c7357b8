//! User labels — facts attached to a user by the accounts service.

use serde::{Deserialize, Serialize};

/// A single label on a user, addressed by key and scope.
///
/// Labels are written by the accounts service (compliance tooling,
/// document checkers) and only ever read here. A typical
/// identity-verification label is `(key="document", scope="private",
/// value="pending")`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    pub key: String,
    pub scope: String,
    pub value: String,
}

impl Label {
    /// Create a label from its three parts.
    pub fn new(
        key: impl Into<String>,
        scope: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            scope: scope.into(),
            value: value.into(),
        }
    }

    /// Whether this label matches all three fields exactly.
    ///
    /// Matching is case-sensitive.
    pub fn matches(&self, key: &str, scope: &str, value: &str) -> bool {
        self.key == key && self.scope == scope && self.value == value
    }
}
