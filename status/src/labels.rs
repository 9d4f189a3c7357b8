//! Label classification — verification flags derived from a label snapshot.

use veritier_types::Label;

/// Key of labels written by the document checker.
const DOCUMENT_KEY: &str = "document";
/// Key of labels written by profile review.
const PROFILE_KEY: &str = "profile";
/// All verification labels live in the private scope.
const PRIVATE_SCOPE: &str = "private";

/// Whether at least one label matches all three fields exactly.
///
/// Matching is case-sensitive; an empty snapshot never matches.
pub fn has_label(labels: &[Label], key: &str, scope: &str, value: &str) -> bool {
    labels.iter().any(|l| l.matches(key, scope, value))
}

/// Identity-verification flags derived from a label snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LabelFlags {
    /// `profile:private = submitted`
    pub profile_submitted: bool,
    /// `profile:private = rejected`
    pub profile_rejected: bool,
    /// `document:private = pending`
    pub document_pending: bool,
    /// `document:private = rejected`
    pub document_rejected: bool,
}

impl LabelFlags {
    /// Scan a snapshot for the four labels the identity tier cares about.
    pub fn scan(labels: &[Label]) -> Self {
        Self {
            profile_submitted: has_label(labels, PROFILE_KEY, PRIVATE_SCOPE, "submitted"),
            profile_rejected: has_label(labels, PROFILE_KEY, PRIVATE_SCOPE, "rejected"),
            document_pending: has_label(labels, DOCUMENT_KEY, PRIVATE_SCOPE, "pending"),
            document_rejected: has_label(labels, DOCUMENT_KEY, PRIVATE_SCOPE, "rejected"),
        }
    }

    /// A review is in flight: documents pending or profile submitted.
    pub fn pending(&self) -> bool {
        self.document_pending || self.profile_submitted
    }

    /// A review came back negative: documents or profile rejected.
    pub fn rejected(&self) -> bool {
        self.document_rejected || self.profile_rejected
    }
}
