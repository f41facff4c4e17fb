//! Selector→presenter assignment building and validation.

use std::collections::HashSet;

use crate::error::DrawError;

/// One row of the pairing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// 1-based position in the draw order.
    pub order: usize,
    /// Participant who picks the topic.
    pub selector: String,
    /// Participant assigned to present the topic.
    pub presenter: String,
}

/// Pair `participants[i]`, as selector, with `participants[permutation[i]]`
/// as presenter.
///
/// The result is validated unconditionally before it is returned: no
/// participant may be paired with themselves, and every participant must
/// appear exactly once as selector and exactly once as presenter. A
/// violation means the permutation was not a derangement and surfaces as
/// [`DrawError::InvariantViolation`]; the caller must treat it as fatal.
pub fn build_assignments(
    participants: &[String],
    permutation: &[usize],
) -> Result<Vec<Assignment>, DrawError> {
    if participants.len() != permutation.len() {
        return Err(DrawError::ShapeMismatch {
            participants: participants.len(),
            permutation: permutation.len(),
        });
    }

    let n = participants.len();
    for (i, &target) in permutation.iter().enumerate() {
        if target >= n {
            return Err(invariant(
                n,
                permutation,
                format!("index {i} maps to out-of-range value {target}"),
            ));
        }
    }

    let assignments: Vec<Assignment> = participants
        .iter()
        .enumerate()
        .map(|(i, selector)| Assignment {
            order: i + 1,
            selector: selector.clone(),
            presenter: participants[permutation[i]].clone(),
        })
        .collect();

    validate_assignments(&assignments, participants, permutation)?;
    Ok(assignments)
}

/// Check the pairing invariants on a built assignment list.
///
/// Names are assumed unique (enforced at the config boundary), so set
/// equality plus a cardinality check covers the exactly-once requirement.
fn validate_assignments(
    assignments: &[Assignment],
    participants: &[String],
    permutation: &[usize],
) -> Result<(), DrawError> {
    let n = participants.len();

    for assignment in assignments {
        if assignment.selector == assignment.presenter {
            return Err(invariant(
                n,
                permutation,
                format!(
                    "{} is paired with themselves at position {}",
                    assignment.selector, assignment.order
                ),
            ));
        }
    }

    let expected: HashSet<&str> = participants.iter().map(String::as_str).collect();
    let selectors: HashSet<&str> = assignments.iter().map(|a| a.selector.as_str()).collect();
    let presenters: HashSet<&str> = assignments.iter().map(|a| a.presenter.as_str()).collect();

    if selectors != expected || selectors.len() != n {
        return Err(invariant(
            n,
            permutation,
            "selectors do not cover every participant exactly once".to_string(),
        ));
    }
    if presenters != expected || presenters.len() != n {
        return Err(invariant(
            n,
            permutation,
            "presenters do not cover every participant exactly once".to_string(),
        ));
    }

    Ok(())
}

fn invariant(n: usize, permutation: &[usize], detail: String) -> DrawError {
    DrawError::InvariantViolation {
        n,
        permutation: permutation.to_vec(),
        detail,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::core::derangement::sample_derangement;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn builds_expected_records_for_swapped_pairs() {
        let participants = names(&["A", "B", "C", "D"]);
        let records = build_assignments(&participants, &[1, 0, 3, 2]).expect("build");

        let expected = [(1, "A", "B"), (2, "B", "A"), (3, "C", "D"), (4, "D", "C")];
        assert_eq!(records.len(), expected.len());
        for (record, (order, selector, presenter)) in records.iter().zip(expected) {
            assert_eq!(record.order, order);
            assert_eq!(record.selector, selector);
            assert_eq!(record.presenter, presenter);
        }
    }

    #[test]
    fn builds_expected_records_for_three_cycle() {
        let participants = names(&["A", "B", "C"]);
        let records = build_assignments(&participants, &[1, 2, 0]).expect("build");

        let expected = [(1, "A", "B"), (2, "B", "C"), (3, "C", "A")];
        for (record, (order, selector, presenter)) in records.iter().zip(expected) {
            assert_eq!(record.order, order);
            assert_eq!(record.selector, selector);
            assert_eq!(record.presenter, presenter);
        }
    }

    #[test]
    fn rejects_length_mismatch() {
        let participants = names(&["A", "B", "C", "D", "E"]);
        assert!(matches!(
            build_assignments(&participants, &[1, 0, 3, 2]),
            Err(DrawError::ShapeMismatch {
                participants: 5,
                permutation: 4,
            })
        ));
    }

    #[test]
    fn rejects_fixed_point_as_invariant_violation() {
        let participants = names(&["A", "B", "C"]);
        let err = build_assignments(&participants, &[0, 2, 1]).unwrap_err();
        assert!(matches!(err, DrawError::InvariantViolation { n: 3, .. }));
    }

    #[test]
    fn rejects_repeated_presenter_as_invariant_violation() {
        let participants = names(&["A", "B", "C"]);
        let err = build_assignments(&participants, &[1, 2, 1]).unwrap_err();
        assert!(matches!(err, DrawError::InvariantViolation { .. }));
    }

    #[test]
    fn rejects_out_of_range_index_as_invariant_violation() {
        let participants = names(&["A", "B", "C"]);
        let err = build_assignments(&participants, &[1, 2, 5]).unwrap_err();
        assert!(matches!(err, DrawError::InvariantViolation { .. }));
    }

    #[test]
    fn sampled_permutations_build_valid_assignments() {
        let participants = names(&["Pavlos", "Andres", "Mara", "Stamatina", "Leopold"]);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let p = sample_derangement(participants.len(), &mut rng).expect("sample");
            let records = build_assignments(&participants, &p).expect("build");

            for record in &records {
                assert_ne!(record.selector, record.presenter);
            }
            let selectors: HashSet<&str> = records.iter().map(|r| r.selector.as_str()).collect();
            let presenters: HashSet<&str> = records.iter().map(|r| r.presenter.as_str()).collect();
            assert_eq!(selectors.len(), participants.len());
            assert_eq!(presenters.len(), participants.len());
        }
    }
}
