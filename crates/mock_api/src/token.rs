//! Mock access token minting.

use chrono::Utc;
use rand::distr::{Alphanumeric, SampleString};

/// Length of the random suffix attached to each token.
const TOKEN_SUFFIX_LEN: usize = 13;

/// Mints an opaque mock access token.
///
/// Tokens are never signed or verified; they only need to be practically
/// distinct across calls, which the wall-clock millisecond component plus a
/// random alphanumeric suffix provides.
pub fn mint_token() -> String {
    let suffix = Alphanumeric.sample_string(&mut rand::rng(), TOKEN_SUFFIX_LEN);
    format!("jwt_{}_{}", Utc::now().timestamp_millis(), suffix)
}
