//! HTTP client for the upstream accounts service.
//!
//! Fetches the snapshots the status resolver needs: the user's info
//! (verification level) and their label list. Fetches are one-shot per
//! panel resolution — no caching, retries, or cancellation here; that
//! responsibility belongs to the caller.

pub mod client;
pub mod error;

pub use client::AccountsClient;
pub use error::ClientError;
