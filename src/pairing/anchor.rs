use super::Pair;

/// Fixed pivot `p = 0` vs everyone else. One round, `G - 1` pairs. The
/// non-pivot candidate is always the first operand (`.0`), the pivot
/// always the second (`.1`), matching the original's
/// `bidirectional_compare(predictions[idx], pivot_prediction, ...)` call
/// order.
pub fn pairs(group_size: usize) -> Vec<Pair> {
    (1..group_size).map(|k| (k, 0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_everyone_against_pivot() {
        let p = pairs(4);
        assert_eq!(p, vec![(1, 0), (2, 0), (3, 0)]);
    }

    #[test]
    fn degenerate_single_candidate_has_no_pairs() {
        assert!(pairs(1).is_empty());
    }
}
