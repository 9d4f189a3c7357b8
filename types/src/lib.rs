//! Fundamental types for the Veritier service.
//!
//! This crate defines the types shared across every other crate in the
//! workspace: user labels, user info snapshots, and the verification tiers.

pub mod label;
pub mod tier;
pub mod user;

pub use label::Label;
pub use tier::VerificationTier;
pub use user::UserInfo;
