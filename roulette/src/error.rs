//! Error taxonomy for the pairing core.

use thiserror::Error;

/// Errors from derangement sampling or assignment building.
///
/// The first three variants are caller errors. `InvariantViolation` is not:
/// it means the sampler handed over a permutation that breaks the pairing
/// guarantees, which is always a bug and must abort the run.
#[derive(Debug, Error)]
pub enum DrawError {
    /// Participant count below the smallest size with a derangement.
    #[error("invalid participant count: expected at least {min}, got {n}")]
    InvalidInput { n: usize, min: usize },

    /// Participant count above the full-enumeration ceiling.
    #[error("participant count {n} exceeds the enumeration limit of {max}")]
    CapacityExceeded { n: usize, max: usize },

    /// Participant list and permutation lengths disagree.
    #[error("participant list has {participants} entries but permutation has {permutation}")]
    ShapeMismatch {
        participants: usize,
        permutation: usize,
    },

    /// The built assignments break the pairing invariants. Carries the
    /// offending permutation so the defect can be debugged.
    #[error("pairing invariant violated for n={n} with permutation {permutation:?}: {detail}")]
    InvariantViolation {
        n: usize,
        permutation: Vec<usize>,
        detail: String,
    },
}
