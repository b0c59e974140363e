use async_trait::async_trait;

use crate::error::TournamentError;
use crate::sample::{Message, Query};

/// Typed correlator threaded through a judge call and returned alongside
/// its scores, replacing the original implementation's `**kwargs`
/// passthrough (`i=…, j=…`, `idx=…`, `p1=…, p2=…`) with one value a round
/// executor can match a completed future back to its originating pair by,
/// independent of completion order.
///
/// `i` is always the first operand and `j` the second: the tie rule
/// `score_i >= score_j` favors `i` (spec §4.4/§5), so which index lands in
/// which field is meaningful, not just a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairKey {
    pub i: usize,
    pub j: usize,
}

impl PairKey {
    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }
}

/// Result of one bidirectional comparison: both scores plus the key that
/// identifies which pair produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchOutcome {
    pub score_i: f32,
    pub score_j: f32,
    pub key: PairKey,
}

/// External LLM-backed oracle that scores a pair of candidates. Opaque to
/// every pairing engine and driver in this crate: they only ever see
/// `(f32, f32, PairKey)` triples, never how a score was produced.
///
/// Implementations must be safe to call many times concurrently — the
/// round executor (`crate::executor::run_round`) fans out one call per
/// pair in a round and joins on all of them before any candidate state is
/// mutated.
#[async_trait]
pub trait Judge: Send + Sync {
    /// Simple one-shot comparison, no positional-bias symmetrization.
    /// Drivers in this crate never call this directly; it exists so the
    /// capability set matches the judge contract in full. Default body
    /// forwards to `bidirectional_compare` and discards the key.
    async fn compare(
        &self,
        a: &[Message],
        b: &[Message],
        query: &Query,
    ) -> Result<(f32, f32), TournamentError> {
        let outcome = self
            .bidirectional_compare(a, b, query, PairKey::new(0, 0))
            .await?;
        Ok((outcome.score_i, outcome.score_j))
    }

    /// Scores the pair in both orientations and averages internally, so
    /// positional bias in the underlying judge cancels. `key` is echoed
    /// back unchanged in the returned `MatchOutcome`.
    async fn bidirectional_compare(
        &self,
        a: &[Message],
        b: &[Message],
        query: &Query,
        key: PairKey,
    ) -> Result<MatchOutcome, TournamentError>;
}
