//! Simulated backend primitives for Atrium.
//!
//! There is no real server behind the client stores. This crate provides the
//! pieces that stand in for one: a pluggable latency strategy that paces
//! operations the way a network round-trip would, and opaque mock access
//! tokens.

mod latency;
mod token;

pub use latency::*;
pub use token::*;
