//! The one-letter-difference rule used by word-distance graphs.

use crate::types::LengthPolicy;

/// Count character positions where `a` and `b` differ.
///
/// Counting stops as soon as more than `limit` mismatches are seen, so the
/// result is exact only up to `limit + 1`. Returns `None` when the words are
/// not comparable under `policy`.
pub fn hamming_distance(a: &str, b: &str, policy: LengthPolicy, limit: usize) -> Option<usize> {
    if policy == LengthPolicy::Equal && a.chars().count() != b.chars().count() {
        return None;
    }

    let mut diffs = 0;
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            diffs += 1;
            if diffs > limit {
                break;
            }
        }
    }
    Some(diffs)
}

/// True when the words differ in exactly one position.
pub fn is_one_letter_apart(a: &str, b: &str, policy: LengthPolicy) -> bool {
    hamming_distance(a, b, policy, 1) == Some(1)
}
