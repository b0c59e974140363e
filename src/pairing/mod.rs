//! Pairing engines (C3): per-algorithm rules for turning the current
//! tournament state into the set of pairs a round executor should run
//! through the judge this round. Every function here is synchronous and
//! total — no judge, no async runtime, no partial results.

pub mod anchor;
pub mod bracket;
pub mod double_elim;
pub mod round_robin;
pub mod single_elim;
pub mod swiss;

/// An ordered pair of candidate indices. `.0` is the first operand, `.1`
/// the second — the tie rule `score_1 >= score_2` (spec §4.4/§5) favors
/// whichever candidate lands in `.0`, so the order is meaningful.
pub type Pair = (usize, usize);
