//! Round executor (C4): fans out one judge call per pair for a single
//! round, joins as a structured group, and either returns every result or
//! none at all.

use std::sync::Arc;

use tokio::task::JoinSet;

use crate::error::TournamentError;
use crate::judge::{Judge, MatchOutcome, PairKey};
use crate::pairing::Pair;
use crate::sample::Prediction;

/// Runs one round: spawns `bidirectional_compare` for every pair in a
/// `tokio::task::JoinSet` (the structured-concurrency analogue of the
/// original's `asyncio.TaskGroup` — this crate's generalization of the
/// base crate's `futures::future::join_all` fan-out, chosen specifically
/// because a `JoinSet` can `abort_all` its siblings the moment one task
/// fails, where `join_all` alone cannot), and awaits every task before
/// returning.
///
/// If any call fails, every other in-flight call in this round is
/// aborted and the first observed error is returned; the caller never
/// sees a partial set of outcomes to fold into candidate state. Outcomes
/// are returned in completion order, not submission order — callers must
/// use `MatchOutcome::key`, not list position, to know which pair an
/// outcome belongs to.
pub async fn run_round(
    pairs: &[Pair],
    predictions: &[Prediction],
    query: &str,
    judge: &Arc<dyn Judge>,
) -> Result<Vec<MatchOutcome>, TournamentError> {
    let mut tasks = JoinSet::new();
    for &(i, j) in pairs {
        let judge = Arc::clone(judge);
        let a = predictions[i].clone();
        let b = predictions[j].clone();
        let query = query.to_owned();
        let key = PairKey::new(i, j);
        tasks.spawn(async move { judge.bidirectional_compare(&a, &b, &query, key).await });
    }

    let mut outcomes = Vec::with_capacity(pairs.len());
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(outcome)) => outcomes.push(outcome),
            Ok(Err(err)) => {
                log::warn!("round aborted: judge call failed ({err})");
                tasks.abort_all();
                return Err(err);
            }
            Err(join_err) => {
                log::warn!("round aborted: judge task panicked or was cancelled ({join_err})");
                tasks.abort_all();
                return Err(TournamentError::JudgeFailure(join_err.to_string()));
            }
        }
    }
    Ok(outcomes)
}
