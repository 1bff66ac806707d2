//! Lockstep replay harness.
//!
//! A [`Scenario`] is an ordered list of vector operations. Running it yields one
//! [`Outcome`] per operation and a 64-bit digest over their canonical encoding. Peers
//! that run the same scenario must produce the same digest; a mismatch means the math
//! diverged somewhere and the simulation would desync.

use std::fmt;
use std::io;
use std::path::PathBuf;

pub use digest::digest;
pub use scenario::{Op, Outcome, Report, Scenario};

mod digest;
mod scenario;


#[derive(Debug)]
pub enum ReplayError {
    Io { path: PathBuf, source: io::Error },
    Parse(ron::error::SpannedError),
    Format(ron::Error),
    Encode(bincode::Error),
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::Io { path, source } => write!(f, "failed to access {}: {}", path.display(), source),
            ReplayError::Parse(e) => write!(f, "invalid RON: {}", e),
            ReplayError::Format(e) => write!(f, "failed to write RON: {}", e),
            ReplayError::Encode(e) => write!(f, "failed to encode outcomes: {}", e),
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReplayError::Io { source, .. } => Some(source),
            ReplayError::Parse(e) => Some(e),
            ReplayError::Format(e) => Some(e),
            ReplayError::Encode(e) => Some(e),
        }
    }
}

impl From<ron::error::SpannedError> for ReplayError {
    fn from(e: ron::error::SpannedError) -> Self {
        ReplayError::Parse(e)
    }
}

impl From<ron::Error> for ReplayError {
    fn from(e: ron::Error) -> Self {
        ReplayError::Format(e)
    }
}

impl From<bincode::Error> for ReplayError {
    fn from(e: bincode::Error) -> Self {
        ReplayError::Encode(e)
    }
}
