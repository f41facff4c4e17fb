//! Uniform derangement sampling over the full permutation group.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::DrawError;

/// Smallest participant count for which a derangement exists.
pub const MIN_PARTICIPANTS: usize = 2;

/// Largest participant count the sampler accepts. The full permutation set
/// is materialized in memory, so this caps the draw at 9! = 362,880
/// candidate permutations.
pub const MAX_PARTICIPANTS: usize = 9;

/// Sample a uniformly random derangement of `{0, .., n-1}`.
///
/// Enumerates every permutation of size `n`, shuffles the whole set, and
/// returns the first permutation without a fixed point. Every derangement is
/// equally likely to come first in a uniform shuffle of the full set, so the
/// result is exactly uniform over derangements.
///
/// Since roughly `n!/e` of all permutations are derangements, the scan
/// inspects O(1) candidates in expectation; the cost lives in the
/// enumeration, which is why `n` is capped at [`MAX_PARTICIPANTS`].
pub fn sample_derangement<R: Rng + ?Sized>(
    n: usize,
    rng: &mut R,
) -> Result<Vec<usize>, DrawError> {
    if n < MIN_PARTICIPANTS {
        return Err(DrawError::InvalidInput {
            n,
            min: MIN_PARTICIPANTS,
        });
    }
    if n > MAX_PARTICIPANTS {
        return Err(DrawError::CapacityExceeded {
            n,
            max: MAX_PARTICIPANTS,
        });
    }

    let mut perms = enumerate_permutations(n);
    perms.shuffle(rng);

    match perms.into_iter().find(|p| !has_fixed_point(p)) {
        Some(p) => Ok(p),
        // Unreachable for n >= 2: at least one derangement always exists.
        None => Err(DrawError::InvariantViolation {
            n,
            permutation: Vec::new(),
            detail: "no derangement found in the full permutation set".to_string(),
        }),
    }
}

/// True if any index maps to itself.
fn has_fixed_point(p: &[usize]) -> bool {
    p.iter().enumerate().any(|(i, &v)| v == i)
}

/// All `n!` permutations of `{0, .., n-1}`, in deterministic order.
fn enumerate_permutations(n: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    let mut items: Vec<usize> = (0..n).collect();
    permute(&mut items, 0, &mut out);
    out
}

fn permute(items: &mut Vec<usize>, start: usize, out: &mut Vec<Vec<usize>>) {
    if start == items.len() {
        out.push(items.clone());
        return;
    }
    for i in start..items.len() {
        items.swap(start, i);
        permute(items, start + 1, out);
        items.swap(start, i);
    }
}
