//! Differential stress runner
//!
//! Drives a [`LazySegmentTree`](crate::tree::LazySegmentTree) and a
//! [`NaiveArray`] with the same seeded stream of random overwrites,
//! accumulates and queries, and stops at the first disagreement.
//!
//! The query transcript is hashed so that two runs can be compared by
//! digest alone.

mod config;

pub use config::StressConfig;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::algebra::{RepeatMonoid, Update};
use crate::naive::NaiveArray;
use crate::tree::UpdateTree;
use crate::SegTreeError;

/// Errors raised by a stress run.
#[derive(Error, Debug)]
pub enum StressError {
    /// Configuration cannot be run
    #[error("invalid stress configuration: {0}")]
    InvalidConfig(String),

    /// Tree and reference disagree
    #[error("round {round}: query [{left}, {right}] returned {actual}, expected {expected}")]
    Mismatch {
        /// Round at which the disagreement surfaced
        round: usize,
        /// Left end of the query
        left: usize,
        /// Right end of the query
        right: usize,
        /// Fold computed by the reference
        expected: i64,
        /// Fold returned by the tree
        actual: i64,
    },

    /// Tree rejected an operation
    #[error(transparent)]
    Tree(#[from] SegTreeError),
}

/// Outcome of a passing stress run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StressReport {
    /// Rounds executed
    pub rounds: usize,

    /// Rounds that were range updates
    pub updates: usize,

    /// Rounds that were range queries
    pub queries: usize,

    /// blake3 digest (hex) of every query range and answer, in order
    pub digest: String,
}

/// Run `config.rounds` random operations on monoid `M` and compare every
/// query against the reference.
pub fn run<M>(config: &StressConfig) -> Result<StressReport, StressError>
where
    M: RepeatMonoid<Item = i64>,
{
    config.validate()?;
    debug!(?config, "starting stress run");

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut tree = UpdateTree::<M>::new(config.size);
    let mut model = NaiveArray::<M>::new(config.size);
    let mut transcript = blake3::Hasher::new();
    let mut updates = 0;
    let mut queries = 0;

    for round in 0..config.rounds {
        let (left, right) = random_range(&mut rng, config.size);

        if rng.gen_range(0..100u8) < config.update_percent {
            let update = random_update(&mut rng, config.max_value);
            tree.update(left, right, update)?;
            model.apply_range(left, right, &update)?;
            updates += 1;
            continue;
        }

        let actual = tree.query(left, right)?;
        let expected = model.fold(left, right)?;
        if actual != expected {
            warn!(round, left, right, expected, actual, "tree diverged from reference");
            return Err(StressError::Mismatch {
                round,
                left,
                right,
                expected,
                actual,
            });
        }

        transcript.update(&(left as u64).to_le_bytes());
        transcript.update(&(right as u64).to_le_bytes());
        transcript.update(&actual.to_le_bytes());
        queries += 1;
    }

    let report = StressReport {
        rounds: config.rounds,
        updates,
        queries,
        digest: transcript.finalize().to_hex().to_string(),
    };
    info!(updates, queries, digest = %report.digest, "stress run passed");
    Ok(report)
}

fn random_range(rng: &mut ChaCha8Rng, size: usize) -> (usize, usize) {
    let a = rng.gen_range(0..size);
    let b = rng.gen_range(0..size);
    (a.min(b), a.max(b))
}

fn random_update(rng: &mut ChaCha8Rng, max_value: i64) -> Update<i64> {
    let value = rng.gen_range(-max_value..=max_value);
    if rng.gen_bool(0.5) {
        Update::Overwrite(value)
    } else {
        Update::Accumulate(value)
    }
}
