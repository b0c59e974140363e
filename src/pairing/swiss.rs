use std::collections::HashSet;

use rand::RngCore;
use rand::seq::SliceRandom;

use super::Pair;

/// Per-candidate Swiss state (spec §3's Candidate/Player data model for
/// this algorithm). `opponents` is consulted on every later round's
/// pairing to forbid a rematch; `buchholz` is a Swiss tiebreak derived
/// only after all rounds have been played (`crate::drivers::swiss`).
#[derive(Debug, Clone)]
pub struct SwissPlayer {
    pub idx: usize,
    pub points: f32,
    pub opponents: HashSet<usize>,
}

impl SwissPlayer {
    pub fn new(idx: usize) -> Self {
        Self {
            idx,
            points: 0.0,
            opponents: HashSet::new(),
        }
    }
}

/// `R = min(ceil(log2(group_size)), group_size - 1)`, or `max_rounds` if
/// given and positive.
pub fn num_rounds(group_size: usize, max_rounds: Option<usize>) -> usize {
    let rounds = match max_rounds {
        Some(m) if m > 0 => m,
        _ => (group_size as f64).log2().ceil() as usize,
    };
    rounds.min(group_size.saturating_sub(1))
}

/// Shuffles, then stable-sorts by points descending. An odd count gives
/// the lowest-ranked player a bye. Walks the remainder pairing each
/// still-unpaired player with the first later player who isn't already an
/// opponent; if none qualifies, falls back to the first remaining
/// unpaired player regardless of history (the only way a rematch can
/// happen — spec §4.3/§9 Open Question).
pub fn create_pairings(players: &[SwissPlayer], rng: &mut impl RngCore) -> (Vec<Pair>, Option<usize>) {
    let mut order: Vec<usize> = (0..players.len()).collect();
    order.shuffle(rng);
    order.sort_by(|&a, &b| {
        players[b]
            .points
            .partial_cmp(&players[a].points)
            .expect("points are always finite")
    });

    let mut bye = None;
    if order.len() % 2 != 0 {
        let dropped = order.pop().expect("checked non-empty by odd len");
        bye = Some(players[dropped].idx);
    }

    let mut processed = vec![false; order.len()];
    let mut pairings = Vec::new();
    for i in 0..order.len() {
        if processed[i] {
            continue;
        }
        let p1 = order[i];
        let mut found = false;
        for j in (i + 1)..order.len() {
            if !processed[j] && !players[p1].opponents.contains(&players[order[j]].idx) {
                pairings.push((players[p1].idx, players[order[j]].idx));
                processed[i] = true;
                processed[j] = true;
                found = true;
                break;
            }
        }
        if !found {
            for j in (i + 1)..order.len() {
                if !processed[j] {
                    pairings.push((players[p1].idx, players[order[j]].idx));
                    processed[i] = true;
                    processed[j] = true;
                    break;
                }
            }
        }
    }
    (pairings, bye)
}
