//! Panel assembly — one status row per tier.

use serde::Serialize;
use veritier_types::{Label, UserInfo, VerificationTier};

use crate::display::{self, Badge, TierDisplay};
use crate::labels::LabelFlags;
use crate::messages;

/// Path the frontend navigates to for an actionable tier.
pub const CONFIRM_PATH: &str = "/confirm";

/// Display descriptor for a single tier row.
#[derive(Clone, Debug, Serialize)]
pub struct TierStatus {
    /// Which tier this row describes.
    pub tier: VerificationTier,
    /// Text/link variant.
    pub display: TierDisplay,
    /// Identifier for the row title (verified or unverified variant).
    pub title_key: &'static str,
    /// Identifier for the explanatory line under the title.
    pub message_key: &'static str,
    /// Navigation target when the row is an action link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'static str>,
    /// Whether the tier is complete (drives emphasis styling).
    pub verified: bool,
    /// Badge riding alongside the identity row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    /// Identifier for the badge text, when a badge is shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_key: Option<&'static str>,
}

/// The resolved verification panel.
#[derive(Clone, Debug, Serialize)]
pub struct VerificationPanel {
    /// Identifier for the panel header.
    pub header_key: &'static str,
    /// One row per tier, in panel order.
    pub tiers: Vec<TierStatus>,
}

/// Resolve the full three-tier panel from a user and label snapshot.
///
/// Pure: recomputed from the inputs on every call, no retained state.
pub fn resolve_panel(user: &UserInfo, labels: &[Label]) -> VerificationPanel {
    let flags = LabelFlags::scan(labels);
    let tiers = VerificationTier::ALL
        .iter()
        .map(|&tier| resolve_tier(tier, user.level, labels, flags))
        .collect();
    VerificationPanel {
        header_key: messages::HEADER,
        tiers,
    }
}

fn resolve_tier(
    tier: VerificationTier,
    user_level: u32,
    labels: &[Label],
    flags: LabelFlags,
) -> TierStatus {
    let target = tier.target_level();
    let display = match tier {
        VerificationTier::Email | VerificationTier::Phone => {
            display::resolve_simple_tier(user_level, target)
        }
        VerificationTier::Identity => {
            display::resolve_identity_tier(user_level, target, !labels.is_empty(), flags.pending())
        }
    };
    // Only the identity row carries a badge; email and phone ignore
    // labels entirely.
    let badge = match tier {
        VerificationTier::Identity => display::badge(flags),
        _ => None,
    };
    let title_key = match display {
        TierDisplay::TextVerified => messages::title_key(tier),
        TierDisplay::LinkUnverified | TierDisplay::TextUnverified => {
            messages::unverified_title_key(tier)
        }
    };
    TierStatus {
        tier,
        display,
        title_key,
        message_key: messages::message_key(tier),
        link: (display == TierDisplay::LinkUnverified).then_some(CONFIRM_PATH),
        verified: display::is_verified(user_level, target),
        badge,
        badge_key: badge.map(messages::badge_key),
    }
}
