//! Tier display resolution.
//!
//! Each tier row resolves to one of three variants: an actionable link
//! into the verification flow, plain unverified text, or verified text.
//! The identity tier additionally carries an optional badge computed
//! from labels alone.

use serde::{Deserialize, Serialize};

use crate::labels::LabelFlags;

/// How a tier row is displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierDisplay {
    /// Not yet verified and actionable right now — rendered as a link
    /// into the verification flow.
    LinkUnverified,
    /// Not yet verified and not currently actionable — plain text.
    TextUnverified,
    /// Tier completed — plain text with the verified title.
    TextVerified,
}

/// Badge shown next to the identity tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Pending,
    Rejected,
}

/// Resolve the email and phone tiers from levels alone.
///
/// A tier becomes actionable exactly one step before its target; below
/// that it is not reachable yet, and at or above the target it is
/// verified. The three cases cover every level.
pub fn resolve_simple_tier(user_level: u32, target_level: u32) -> TierDisplay {
    match target_level.checked_sub(user_level) {
        // Exactly one step away — actionable right now.
        Some(1) => TierDisplay::LinkUnverified,
        // Two or more steps away — not reachable yet.
        Some(d) if d >= 2 => TierDisplay::TextUnverified,
        // At or above the target.
        _ => TierDisplay::TextVerified,
    }
}

/// Resolve the identity tier.
///
/// Without any label data the action link is never offered — the
/// snapshot may simply not have arrived yet, so the conservative
/// reading is "unverified, not actionable". With label data, a user one
/// step away gets the link unless a review is already in flight; a user
/// at the target is verified; every other level reads as unverified.
pub fn resolve_identity_tier(
    user_level: u32,
    target_level: u32,
    labels_present: bool,
    pending: bool,
) -> TierDisplay {
    if !labels_present {
        return TierDisplay::TextUnverified;
    }
    match target_level.checked_sub(user_level) {
        Some(0) => TierDisplay::TextVerified,
        Some(1) if pending => TierDisplay::TextUnverified,
        Some(1) => TierDisplay::LinkUnverified,
        // Further below the target, or already past it.
        _ => TierDisplay::TextUnverified,
    }
}

/// Select the badge for the identity tier.
///
/// Purely label-driven: the user's level is not consulted, so a stale
/// rejected label keeps its badge even on a fully verified account.
/// Pending wins when both reviews are flagged.
pub fn badge(flags: LabelFlags) -> Option<Badge> {
    if flags.pending() {
        Some(Badge::Pending)
    } else if flags.rejected() {
        Some(Badge::Rejected)
    } else {
        None
    }
}

/// Emphasis state for a tier row: whether the tier is complete.
pub fn is_verified(user_level: u32, target_level: u32) -> bool {
    user_level >= target_level
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Simple tiers (email, phone) ─────────────────────────────────────

    #[test]
    fn level_zero_email_is_actionable() {
        assert_eq!(resolve_simple_tier(0, 1), TierDisplay::LinkUnverified);
    }

    #[test]
    fn level_two_email_is_verified() {
        assert_eq!(resolve_simple_tier(2, 1), TierDisplay::TextVerified);
    }

    #[test]
    fn level_zero_phone_is_not_reachable() {
        assert_eq!(resolve_simple_tier(0, 2), TierDisplay::TextUnverified);
    }

    #[test]
    fn level_one_phone_is_actionable() {
        assert_eq!(resolve_simple_tier(1, 2), TierDisplay::LinkUnverified);
    }

    #[test]
    fn level_at_target_is_verified() {
        assert_eq!(resolve_simple_tier(1, 1), TierDisplay::TextVerified);
        assert_eq!(resolve_simple_tier(2, 2), TierDisplay::TextVerified);
    }

    // ── Identity tier ───────────────────────────────────────────────────

    #[test]
    fn identity_without_labels_is_never_actionable() {
        for level in 0..=5 {
            assert_eq!(
                resolve_identity_tier(level, 3, false, false),
                TierDisplay::TextUnverified,
                "level {level}"
            );
        }
    }

    #[test]
    fn identity_one_step_away_with_pending_review_suppresses_link() {
        assert_eq!(
            resolve_identity_tier(2, 3, true, true),
            TierDisplay::TextUnverified
        );
    }

    #[test]
    fn identity_one_step_away_without_pending_review_is_actionable() {
        assert_eq!(
            resolve_identity_tier(2, 3, true, false),
            TierDisplay::LinkUnverified
        );
    }

    #[test]
    fn identity_at_target_is_verified() {
        assert_eq!(
            resolve_identity_tier(3, 3, true, false),
            TierDisplay::TextVerified
        );
    }

    #[test]
    fn identity_far_below_target_is_unverified() {
        assert_eq!(
            resolve_identity_tier(0, 3, true, false),
            TierDisplay::TextUnverified
        );
        assert_eq!(
            resolve_identity_tier(1, 3, true, false),
            TierDisplay::TextUnverified
        );
    }

    #[test]
    fn identity_above_target_falls_back_to_unverified() {
        // Levels past the last tier are outside the observed range; they
        // fall into the default branch rather than reading as verified.
        assert_eq!(
            resolve_identity_tier(4, 3, true, false),
            TierDisplay::TextUnverified
        );
    }

    // ── Badges ──────────────────────────────────────────────────────────

    #[test]
    fn pending_badge_wins_over_rejected() {
        let flags = LabelFlags {
            document_pending: true,
            document_rejected: true,
            ..Default::default()
        };
        assert_eq!(badge(flags), Some(Badge::Pending));
    }

    #[test]
    fn rejected_badge_shows_when_nothing_pending() {
        let flags = LabelFlags {
            profile_rejected: true,
            ..Default::default()
        };
        assert_eq!(badge(flags), Some(Badge::Rejected));
    }

    #[test]
    fn no_badge_without_review_labels() {
        assert_eq!(badge(LabelFlags::default()), None);
    }

    // ── Emphasis ────────────────────────────────────────────────────────

    #[test]
    fn verified_at_or_above_target() {
        assert!(!is_verified(0, 1));
        assert!(is_verified(1, 1));
        assert!(is_verified(3, 1));
        assert!(!is_verified(2, 3));
    }
}
