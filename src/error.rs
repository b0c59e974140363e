use thiserror::Error;

/// Error taxonomy for the tournament core.
///
/// `G <= 1` and all-tied rankings are *not* represented here: both are
/// total, well-defined outcomes (spec §7) and never reach an `Err` path.
#[derive(Debug, Error)]
pub enum TournamentError {
    /// A judge call failed or timed out. Aborts the whole `compute` call;
    /// no partial-round results are ever committed.
    #[error("judge call failed: {0}")]
    JudgeFailure(String),

    /// `predictions` was empty (`G == 0`).
    #[error("group size must be at least 1, got 0")]
    EmptyGroup,

    /// Registry lookup missed. Lists the keys that *were* available so
    /// the caller doesn't need a second round trip to discover them.
    #[error("reward model '{requested}' not found (available: {available:?})")]
    UnknownModel {
        requested: String,
        available: Vec<String>,
    },

    /// Reserved for a pairing engine that cannot produce any admissible
    /// pairing at all. Swiss never hits this: it falls back to allowing a
    /// rematch rather than failing (spec §4.3). No engine in this crate
    /// raises it today, but the taxonomy stays total for future pairing
    /// engines that might.
    #[error("pairing engine exhausted all admissible pairings")]
    PairingExhausted,
}
