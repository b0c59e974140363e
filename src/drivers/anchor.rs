use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TournamentError;
use crate::executor::run_round;
use crate::judge::Judge;
use crate::pairing::anchor;
use crate::reward;
use crate::sample::Prediction;

use super::GroupRewardModel;

/// Everyone vs. a fixed pivot (index 0), one round, `G - 1` pairs. The
/// pivot's representative score is the mean of every score it received;
/// each non-pivot candidate's score is its own comparison result
/// directly.
pub struct Anchor {
    judge: Arc<dyn Judge>,
}

impl Anchor {
    pub fn new(judge: Arc<dyn Judge>) -> Self {
        Self { judge }
    }
}

const PIVOT: usize = 0;

#[async_trait]
impl GroupRewardModel for Anchor {
    async fn compute(
        &self,
        predictions: &[Prediction],
        query: &str,
    ) -> Result<Vec<f32>, TournamentError> {
        let group_size = predictions.len();
        if group_size == 0 {
            return Err(TournamentError::EmptyGroup);
        }
        if group_size == 1 {
            return Ok(vec![0.0]);
        }

        let pairs = anchor::pairs(group_size);
        log::debug!("anchor: {} candidates, pivot=0", group_size);
        let outcomes = run_round(&pairs, predictions, query, &self.judge).await?;

        let mut scores = vec![0.0f32; group_size];
        let mut pivot_scores = Vec::with_capacity(group_size - 1);
        for outcome in &outcomes {
            // key.i is the non-pivot candidate, key.j is always PIVOT.
            debug_assert_eq!(outcome.key.j, PIVOT);
            scores[outcome.key.i] = outcome.score_i;
            pivot_scores.push(outcome.score_j);
        }
        scores[PIVOT] = pivot_scores.iter().sum::<f32>() / pivot_scores.len() as f32;

        let ranks = reward::rank_min_descending(&scores);
        Ok(reward::linear_rank_rewards(&ranks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judge::{MatchOutcome, PairKey};
    use crate::sample::Message;
    use async_trait::async_trait;

    struct ConstantJudge(Vec<f32>);

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
                score_i: self.0[key.i],
                score_j: self.0[key.j],
                key,
            })
        }
    }

    fn predictions(n: usize) -> Vec<Prediction> {
        (0..n)
            .map(|i| vec![Message::new("assistant", format!("candidate {i}"))])
            .collect()
    }

    #[tokio::test]
    async fn scenario_g4_matches_round_robin_scenario() {
        let judge: Arc<dyn Judge> = Arc::new(ConstantJudge(vec![10.0, 9.0, 8.0, 7.0]));
        let model = Anchor::new(judge);
        let rewards = model.compute(&predictions(4), "q").await.unwrap();
        let expected = [1.3416, 0.4472, -0.4472, -1.3416];
        for (got, want) in rewards.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-3);
        }
    }

    #[tokio::test]
    async fn issues_exactly_g_minus_one_calls() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        struct CountingJudge(Vec<f32>, AtomicUsize);
        #[async_trait]
        impl Judge for CountingJudge {
            async fn bidirectional_compare(
                &self,
                _a: &[Message],
                _b: &[Message],
                _query: &str,
                key: PairKey,
            ) -> Result<MatchOutcome, TournamentError> {
                self.1.fetch_add(1, Ordering::Relaxed);
                Ok(MatchOutcome {
                    score_i: self.0[key.i],
                    score_j: self.0[key.j],
                    key,
                })
            }
        }
        let judge = Arc::new(CountingJudge(vec![1.0, 2.0, 3.0, 4.0, 5.0], AtomicUsize::new(0)));
        let model = Anchor::new(judge.clone());
        model.compute(&predictions(5), "q").await.unwrap();
        assert_eq!(judge.1.load(Ordering::Relaxed), 4);
    }
}
