use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{digest, ReplayError};
use crate::fixed_math::{FixedNum, FixedVec2};

/// One vector operation with its inputs.
///
/// In RON, scalars are written as their raw fixed-point bits, `(bits: 65536)` for 1.0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Op {
    Add(FixedVec2, FixedVec2),
    Sub(FixedVec2, FixedVec2),
    MulElem(FixedVec2, FixedVec2),
    DivElem(FixedVec2, FixedVec2),
    Scale(FixedVec2, FixedNum),
    DivScalar(FixedVec2, FixedNum),
    Neg(FixedVec2),
    Dot(FixedVec2, FixedVec2),
    Cross(FixedVec2, FixedVec2),
    Project(FixedVec2, FixedVec2),
    Magnitude(FixedVec2),
    MagnitudeSquared(FixedVec2),
    Normalize(FixedVec2),
    Abs(FixedVec2),
    Distance(FixedVec2, FixedVec2),
    DistanceSquared(FixedVec2, FixedVec2),
    RotateLeft90(FixedVec2),
    RotateRight90(FixedVec2),
    Rotate(FixedVec2, FixedNum),
    AngleBetween(FixedVec2, FixedVec2),
    FastInRange(FixedVec2, FixedVec2, FixedNum),
    Truncate(FixedVec2, FixedNum),
    Greater(FixedVec2, FixedVec2),
    Less(FixedVec2, FixedVec2),
}

/// Result of a single [`Op`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Vector(FixedVec2),
    Scalar(FixedNum),
    Flag(bool),
}

impl Op {
    const KINDS: u32 = 24;

    pub fn apply(&self) -> Outcome {
        use Outcome::{Flag, Scalar, Vector};

        match *self {
            Op::Add(a, b) => Vector(a + b),
            Op::Sub(a, b) => Vector(a - b),
            Op::MulElem(a, b) => Vector(a * b),
            Op::DivElem(a, b) => Vector(a / b),
            Op::Scale(v, s) => Vector(v * s),
            Op::DivScalar(v, s) => Vector(v / s),
            Op::Neg(v) => Vector(-v),
            Op::Dot(a, b) => Scalar(a.dot(b)),
            Op::Cross(a, b) => Scalar(a.cross(b)),
            Op::Project(a, b) => Vector(a.project(b)),
            Op::Magnitude(v) => Scalar(v.magnitude()),
            Op::MagnitudeSquared(v) => Scalar(v.magnitude_squared()),
            Op::Normalize(v) => Vector(v.normalize()),
            Op::Abs(v) => Vector(v.abs()),
            Op::Distance(a, b) => Scalar(a.distance(b)),
            Op::DistanceSquared(a, b) => Scalar(a.distance_squared(b)),
            Op::RotateLeft90(v) => Vector(v.rotate_left_90()),
            Op::RotateRight90(v) => Vector(v.rotate_right_90()),
            Op::Rotate(v, angle) => Vector(v.rotate(angle)),
            Op::AngleBetween(a, b) => Scalar(a.angle_between(b)),
            Op::FastInRange(a, b, dist) => Flag(a.fast_in_range(b, dist)),
            Op::Truncate(v, max) => Vector(v.truncate(max)),
            Op::Greater(a, b) => Flag(a > b),
            Op::Less(a, b) => Flag(a < b),
        }
    }

    fn random(rng: &mut StdRng) -> Self {
        let a = random_vec(rng);
        let b = random_vec(rng);
        let s = random_num(rng);
        match rng.random_range(0..Self::KINDS) {
            0 => Op::Add(a, b),
            1 => Op::Sub(a, b),
            2 => Op::MulElem(a, b),
            3 => Op::DivElem(a, b),
            4 => Op::Scale(a, s),
            5 => Op::DivScalar(a, s),
            6 => Op::Neg(a),
            7 => Op::Dot(a, b),
            8 => Op::Cross(a, b),
            9 => Op::Project(a, b),
            10 => Op::Magnitude(a),
            11 => Op::MagnitudeSquared(a),
            12 => Op::Normalize(a),
            13 => Op::Abs(a),
            14 => Op::Distance(a, b),
            15 => Op::DistanceSquared(a, b),
            16 => Op::RotateLeft90(a),
            17 => Op::RotateRight90(a),
            18 => Op::Rotate(a, s),
            19 => Op::AngleBetween(a, b),
            20 => Op::FastInRange(a, b, s.abs()),
            21 => Op::Truncate(a, s.abs()),
            22 => Op::Greater(a, b),
            _ => Op::Less(a, b),
        }
    }
}

/// Components in ±1024, which keeps squared lengths clear of wraparound most of the time.
fn random_num(rng: &mut StdRng) -> FixedNum {
    FixedNum::from_bits(rng.random_range(-(1i64 << 26)..=(1i64 << 26)))
}

fn random_vec(rng: &mut StdRng) -> FixedVec2 {
    FixedVec2::new(random_num(rng), random_num(rng))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub ops: Vec<Op>,
}

impl Scenario {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ReplayError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scenario = Self::from_ron_str(&contents)?;
        info!("Loaded scenario '{}' ({} ops) from {}", scenario.name, scenario.ops.len(), path.display());
        Ok(scenario)
    }

    pub fn from_ron_str(contents: &str) -> Result<Self, ReplayError> {
        Ok(ron::from_str(contents)?)
    }

    pub fn to_ron_string(&self) -> Result<String, ReplayError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    /// Writes the scenario as RON so a peer can replay it.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ReplayError> {
        let path = path.as_ref();
        let contents = self.to_ron_string()?;
        std::fs::write(path, contents).map_err(|source| ReplayError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Saved scenario '{}' to {}", self.name, path.display());
        Ok(())
    }

    /// Seeded random scenario. The same seed yields the same ops for a given `rand`
    /// release; save the scenario when it has to cross versions.
    pub fn random(seed: u64, steps: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let ops = (0..steps).map(|_| Op::random(&mut rng)).collect();
        Self {
            name: format!("random-{seed:#x}"),
            ops,
        }
    }

    pub fn run(&self) -> Result<Report, ReplayError> {
        let outcomes: Vec<Outcome> = self
            .ops
            .iter()
            .enumerate()
            .map(|(i, op)| {
                let outcome = op.apply();
                debug!("[{}] {:?} -> {:?}", i, op, outcome);
                outcome
            })
            .collect();
        let digest = digest(&outcomes)?;
        info!("Scenario '{}': {} ops, digest {:#018x}", self.name, outcomes.len(), digest);
        Ok(Report {
            scenario: self.name.clone(),
            outcomes,
            digest,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub scenario: String,
    pub outcomes: Vec<Outcome>,
    pub digest: u64,
}

impl Report {
    pub fn matches(&self, expected: u64) -> bool {
        self.digest == expected
    }

    /// Index of the first outcome that differs from `other`, or of the first missing one
    /// when the lengths differ.
    pub fn first_divergence(&self, other: &Report) -> Option<usize> {
        let shared = self.outcomes.len().min(other.outcomes.len());
        self.outcomes
            .iter()
            .zip(&other.outcomes)
            .position(|(a, b)| a != b)
            .or_else(|| (self.outcomes.len() != other.outcomes.len()).then_some(shared))
    }
}
