//! Display preference store for Atrium.
//!
//! Preferences are plain local state with no relation to authentication.
//! Every change persists the full record to its own durable slot; setters
//! never simulate a network round-trip.

mod store;

pub use store::*;
