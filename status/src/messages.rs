//! Localization message identifiers.
//!
//! The service never renders text itself — it hands these identifiers
//! to the caller's localization layer. The strings are a compatibility
//! contract with existing translation bundles and must not change.

use veritier_types::VerificationTier;

use crate::display::Badge;

/// Panel header.
pub const HEADER: &str = "page.body.profile.header.account.profile";

/// Pending badge text.
pub const BADGE_PENDING: &str = "page.body.wallets.table.pending";

/// Rejected badge text.
pub const BADGE_REJECTED: &str = "page.body.wallets.table.rejected";

/// Title shown once the tier is verified.
pub fn title_key(tier: VerificationTier) -> &'static str {
    match tier {
        VerificationTier::Email => "page.body.profile.header.account.profile.email.title",
        VerificationTier::Phone => "page.body.profile.header.account.profile.phone.title",
        VerificationTier::Identity => "page.body.profile.header.account.profile.identity.title",
    }
}

/// Title shown while the tier is unverified (link and text variants
/// share it).
pub fn unverified_title_key(tier: VerificationTier) -> &'static str {
    match tier {
        VerificationTier::Email => {
            "page.body.profile.header.account.profile.email.unverified.title"
        }
        VerificationTier::Phone => {
            "page.body.profile.header.account.profile.phone.unverified.title"
        }
        VerificationTier::Identity => {
            "page.body.profile.header.account.profile.identity.unverified.title"
        }
    }
}

/// Explanatory line under the tier title.
pub fn message_key(tier: VerificationTier) -> &'static str {
    match tier {
        VerificationTier::Email => "page.body.profile.header.account.profile.email.message",
        VerificationTier::Phone => "page.body.profile.header.account.profile.phone.message",
        VerificationTier::Identity => "page.body.profile.header.account.profile.identity.message",
    }
}

/// Badge text identifier.
pub fn badge_key(badge: Badge) -> &'static str {
    match badge {
        Badge::Pending => BADGE_PENDING,
        Badge::Rejected => BADGE_REJECTED,
    }
}
