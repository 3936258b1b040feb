//! Bijection check for a derived mode order.

use serde::Serialize;

/// Indices of `[0, n)` the order never hits, and indices it hits more than once.
/// Both lists are ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PermutationCheck {
    pub missing: Vec<usize>,
    pub duplicates: Vec<usize>,
}

impl PermutationCheck {
    pub fn is_permutation(&self) -> bool {
        self.missing.is_empty() && self.duplicates.is_empty()
    }
}

/// Compare `order` against the identity range `[0, n)`.
///
/// Entries `>= n` never fill a missing slot but are still reported when repeated.
pub fn validate_permutation(order: &[usize], n: usize) -> PermutationCheck {
    let mut counts = vec![0usize; n];
    let mut overflow: Vec<usize> = Vec::new();
    for &idx in order {
        match counts.get_mut(idx) {
            Some(count) => *count += 1,
            None => overflow.push(idx),
        }
    }

    let missing = counts
        .iter()
        .enumerate()
        .filter(|(_, count)| **count == 0)
        .map(|(idx, _)| idx)
        .collect();

    let mut duplicates: Vec<usize> = counts
        .iter()
        .enumerate()
        .filter(|(_, count)| **count > 1)
        .map(|(idx, _)| idx)
        .collect();

    overflow.sort_unstable();
    let mut repeated_overflow: Vec<usize> = overflow
        .windows(2)
        .filter(|pair| pair[0] == pair[1])
        .map(|pair| pair[0])
        .collect();
    repeated_overflow.dedup();
    duplicates.extend(repeated_overflow);

    PermutationCheck {
        missing,
        duplicates,
    }
}
