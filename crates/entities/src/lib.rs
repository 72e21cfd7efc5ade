//! Core entity definitions for Atrium.
//!
//! This crate defines the data types shared by every client store: account
//! identities, the managed-user roster records, and display preferences.

mod preferences;
mod roster;
mod user;

pub use preferences::*;
pub use roster::*;
pub use user::*;
