//! Request latency pacing.

use std::time::Duration;

/// Strategy for pacing simulated backend calls.
///
/// Stores await their configured latency before resolving an operation,
/// standing in for the round-trip a real client would pay. Tests use
/// [`Latency::None`] so nothing sleeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latency {
    /// Resolve immediately.
    None,
    /// Wait a fixed duration before resolving.
    Fixed(Duration),
}

impl Default for Latency {
    fn default() -> Self {
        Self::None
    }
}

impl Latency {
    /// Creates a fixed latency from milliseconds.
    pub fn from_millis(millis: u64) -> Self {
        Self::Fixed(Duration::from_millis(millis))
    }

    /// Waits out the configured delay.
    pub async fn wait(&self) {
        match self {
            Self::None => {}
            Self::Fixed(duration) => tokio::time::sleep(*duration).await,
        }
    }
}
