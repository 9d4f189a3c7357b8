//! Verification status resolution.
//!
//! Maps a user's verification level and label snapshot to what the
//! profile panel should display for each tier:
//! - Email and Phone resolve from the level alone.
//! - Identity additionally consults compliance labels, which can
//!   suppress the action link and attach a pending/rejected badge.
//!
//! Everything here is pure and synchronous. Inputs are immutable
//! snapshots and outputs are recomputed on every call; nothing is
//! cached or retained between calls.

pub mod display;
pub mod labels;
pub mod messages;
pub mod panel;

pub use display::{
    badge, is_verified, resolve_identity_tier, resolve_simple_tier, Badge, TierDisplay,
};
pub use labels::{has_label, LabelFlags};
pub use panel::{resolve_panel, TierStatus, VerificationPanel, CONFIRM_PATH};
