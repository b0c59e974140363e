use super::Pair;

/// Serpentine expansion used to build a seeded bracket: start with `[0]`,
/// repeatedly replace each current seed-rank `i` with `[i, 2*count - 1 -
/// i]` until the list has `power` entries. `power` must be a power of two.
fn serpentine(power: usize) -> Vec<usize> {
    let mut indices = vec![0usize];
    let mut count = 1;
    while count < power {
        let mut next = Vec::with_capacity(indices.len() * 2);
        for &i in &indices {
            next.push(i);
            next.push(2 * count - 1 - i);
        }
        indices = next;
        count *= 2;
    }
    indices
}

/// Smallest power of two `>= group_size`.
fn next_power_of_two(group_size: usize) -> usize {
    let mut power = 1;
    while power < group_size {
        power *= 2;
    }
    power
}

/// Seed-rank bracket order: a permutation of `0..group_size` (seed ranks,
/// best seed = 0) arranged so high seeds meet late. Placeholder slots
/// from the power-of-two expansion that don't correspond to a real seed
/// (`>= group_size`) are dropped — they become the implicit byes a
/// non-power-of-two group count produces.
pub fn seeded_bracket(group_size: usize) -> Vec<usize> {
    let power = next_power_of_two(group_size);
    serpentine(power)
        .into_iter()
        .filter(|&i| i < group_size)
        .collect()
}

/// One round's pairings over the current active (seed-ordered or
/// winner-ordered) player list: consecutive pairs `(active[2k],
/// active[2k+1])`. An odd leftover advances as a bye without playing.
pub fn round_pairings(active: &[usize]) -> (Vec<Pair>, Option<usize>) {
    let mut pairings = Vec::with_capacity(active.len() / 2);
    let mut i = 0;
    while i + 1 < active.len() {
        pairings.push((active[i], active[i + 1]));
        i += 2;
    }
    let bye = if i < active.len() { Some(active[i]) } else { None };
    (pairings, bye)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_bracket_power_of_two_is_full_serpentine() {
        // G=4, values [4,3,2,1] scenario: bracket expands to [0,3,1,2].
        assert_eq!(seeded_bracket(4), vec![0, 3, 1, 2]);
    }

    #[test]
    fn seeded_bracket_drops_placeholder_byes() {
        let bracket = seeded_bracket(5);
        assert_eq!(bracket.len(), 5);
        assert!(bracket.iter().all(|&i| i < 5));
    }

    #[test]
    fn round_pairings_consecutive_with_trailing_bye() {
        let (pairs, bye) = round_pairings(&[0, 3, 1]);
        assert_eq!(pairs, vec![(0, 3)]);
        assert_eq!(bye, Some(1));
    }

    #[test]
    fn round_pairings_even_has_no_bye() {
        let (pairs, bye) = round_pairings(&[0, 3, 1, 2]);
        assert_eq!(pairs, vec![(0, 3), (1, 2)]);
        assert_eq!(bye, None);
    }
}
