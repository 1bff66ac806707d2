use std::hash::Hasher;

use rustc_hash::FxHasher;

use super::{Outcome, ReplayError};

/// Hashes the bincode encoding of `outcomes`, in order.
///
/// Scalars serialize as their raw bits, so two digests match only when every outcome
/// matches bit for bit. `FxHasher` has a fixed seed but mixes in `usize` words, so
/// digests are comparable between peers of the same pointer width.
pub fn digest(outcomes: &[Outcome]) -> Result<u64, ReplayError> {
    let bytes = bincode::serialize(outcomes)?;
    let mut hasher = FxHasher::default();
    hasher.write(&bytes);
    Ok(hasher.finish())
}
