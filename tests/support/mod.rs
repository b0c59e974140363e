use std::sync::Arc;

use async_trait::async_trait;
use qqr_reward_models::{Judge, MatchOutcome, Message, PairKey, Prediction, TournamentError};

/// Deterministic in-memory judge: candidate `k`'s "true" score is
/// `scores[k]`, fixed up front. Used across the integration suite so every
/// scenario test drives real driver code against known numbers instead of
/// a live LLM.
pub struct ConstantJudge {
    pub scores: Vec<f32>,
}

impl ConstantJudge {
    pub fn new(scores: Vec<f32>) -> Arc<dyn Judge> {
        Arc::new(Self { scores })
    }
}

#[async_trait]
impl Judge for ConstantJudge {
    async fn bidirectional_compare(
        &self,
        _a: &[Message],
        _b: &[Message],
        _query: &str,
        key: PairKey,
    ) -> Result<MatchOutcome, TournamentError> {
        Ok(MatchOutcome {
            score_i: self.scores[key.i],
            score_j: self.scores[key.j],
            key,
        })
    }
}

/// Always fails, for exercising the abort-on-first-failure contract.
pub struct FailingJudge;

#[async_trait]
impl Judge for FailingJudge {
    async fn bidirectional_compare(
        &self,
        _a: &[Message],
        _b: &[Message],
        _query: &str,
        _key: PairKey,
    ) -> Result<MatchOutcome, TournamentError> {
        Err(TournamentError::JudgeFailure("simulated judge outage".into()))
    }
}

pub fn predictions(n: usize) -> Vec<Prediction> {
    (0..n)
        .map(|i| vec![Message::new("assistant", format!("candidate {i}"))])
        .collect()
}
