use rand::RngCore;
use rand::seq::SliceRandom;

use super::Pair;

/// One round's pairings for either the winners or the losers bracket:
/// shuffle the active pool, then pop pairs off the back. An odd leftover
/// is returned as a bye rather than paired. Used for both brackets
/// because neither orders its pool by seed — only round-robin/anchor and
/// single-elimination's seeded bracket do that.
pub fn create_pairings(active: &[usize], rng: &mut impl RngCore) -> (Vec<Pair>, Vec<usize>) {
    let mut pool = active.to_vec();
    pool.shuffle(rng);

    let mut pairings = Vec::with_capacity(pool.len() / 2);
    while pool.len() >= 2 {
        let a = pool.pop().expect("len >= 2");
        let b = pool.pop().expect("len >= 1 after first pop");
        pairings.push((a, b));
    }
    (pairings, pool)
}
