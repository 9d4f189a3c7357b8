use proptest::prelude::*;

use veritier_status::display::{
    is_verified, resolve_identity_tier, resolve_simple_tier, TierDisplay,
};
use veritier_status::labels::LabelFlags;
use veritier_status::panel::resolve_panel;
use veritier_status::{badge, Badge};
use veritier_types::{Label, UserInfo, VerificationTier};

proptest! {
    /// Every level maps to exactly one variant, matching the boundary
    /// rules: one step away → link, further away → text, at or above →
    /// verified.
    #[test]
    fn simple_tier_boundaries_hold_for_all_levels(
        user_level in 0u32..1000,
        target_level in 1u32..=2,
    ) {
        let display = resolve_simple_tier(user_level, target_level);
        let expected = if user_level >= target_level {
            TierDisplay::TextVerified
        } else if user_level + 1 == target_level {
            TierDisplay::LinkUnverified
        } else {
            TierDisplay::TextUnverified
        };
        prop_assert_eq!(display, expected);
    }

    /// Without label data the identity tier is unverified text at every
    /// level — the link must never appear.
    #[test]
    fn identity_without_labels_is_text_unverified_everywhere(
        user_level in 0u32..1000,
        pending in any::<bool>(),
    ) {
        prop_assert_eq!(
            resolve_identity_tier(user_level, 3, false, pending),
            TierDisplay::TextUnverified
        );
    }

    /// The emphasis boolean is exactly the at-or-above-target comparison.
    #[test]
    fn emphasis_is_level_at_or_above_target(
        user_level in 0u32..1000,
        target_level in 1u32..=3,
    ) {
        prop_assert_eq!(
            is_verified(user_level, target_level),
            user_level >= target_level
        );
    }

    /// A pending flag always beats a rejected flag in badge selection.
    #[test]
    fn pending_beats_rejected_for_any_flag_combination(
        profile_submitted in any::<bool>(),
        profile_rejected in any::<bool>(),
        document_pending in any::<bool>(),
        document_rejected in any::<bool>(),
    ) {
        let flags = LabelFlags {
            profile_submitted,
            profile_rejected,
            document_pending,
            document_rejected,
        };
        let expected = if document_pending || profile_submitted {
            Some(Badge::Pending)
        } else if document_rejected || profile_rejected {
            Some(Badge::Rejected)
        } else {
            None
        };
        prop_assert_eq!(badge(flags), expected);
    }

    /// The identity badge never consults the user's level: a rejected
    /// label badges the row at every level, verified or not.
    #[test]
    fn badge_ignores_user_level(user_level in 0u32..1000) {
        let labels = vec![Label::new("document", "private", "rejected")];
        let user = UserInfo::new("ID00000001", "user@example.test", user_level);
        let panel = resolve_panel(&user, &labels);
        let identity = panel
            .tiers
            .iter()
            .find(|t| t.tier == VerificationTier::Identity)
            .unwrap();
        prop_assert_eq!(identity.badge, Some(Badge::Rejected));
    }

    /// A link row always points at the confirmation flow, and no other
    /// row carries a link.
    #[test]
    fn links_only_on_actionable_rows(user_level in 0u32..10) {
        let labels = vec![Label::new("email", "private", "verified")];
        let user = UserInfo::new("ID00000001", "user@example.test", user_level);
        let panel = resolve_panel(&user, &labels);
        for tier in &panel.tiers {
            match tier.display {
                TierDisplay::LinkUnverified => {
                    prop_assert_eq!(tier.link, Some(veritier_status::CONFIRM_PATH))
                }
                _ => prop_assert_eq!(tier.link, None),
            }
        }
    }
}
