//! HTTP API for the Veritier service.
//!
//! Provides endpoints for:
//! - Resolved verification panels (`GET /profile/{uid}/verification`)
//! - Liveness probing (`GET /health`)

pub mod error;
pub mod handlers;
pub mod server;

pub use server::{AppState, RpcServer};
