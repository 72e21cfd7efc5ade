//! Managed-user roster for Atrium.
//!
//! An in-memory roster of managed users with simulated-latency CRUD over a
//! fixed seed list. Nothing here is persisted, and the roster's identity
//! space has no relation to the session store's logged-in user.

mod error;
mod seed;
mod store;

pub use error::*;
pub use store::*;

/// Default simulated round-trip for roster operations, in milliseconds.
pub const DEFAULT_LATENCY_MS: u64 = 500;
