use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TournamentError;
use crate::executor::run_round;
use crate::judge::Judge;
use crate::pairing::round_robin;
use crate::reward;
use crate::sample::Prediction;

use super::GroupRewardModel;

/// Exhaustive `G * (G - 1) / 2` pairings, one round. Win = 1 point, draw =
/// 0.5 each; ranks are `method=min` over total wins, descending.
pub struct RoundRobin {
    judge: Arc<dyn Judge>,
}

impl RoundRobin {
    pub fn new(judge: Arc<dyn Judge>) -> Self {
        Self { judge }
    }
}

#[async_trait]
impl GroupRewardModel for RoundRobin {
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

        let pairs = round_robin::pairs(group_size);
        log::debug!("round-robin: {} candidates, {} pairs", group_size, pairs.len());
        let outcomes = run_round(&pairs, predictions, query, &self.judge).await?;

        let mut wins = vec![0.0f32; group_size];
        for outcome in &outcomes {
            let (i, j) = (outcome.key.i, outcome.key.j);
            if outcome.score_i > outcome.score_j {
                wins[i] += 1.0;
            } else if outcome.score_j > outcome.score_i {
                wins[j] += 1.0;
            } else {
                wins[i] += 0.5;
                wins[j] += 0.5;
            }
        }

        let ranks = reward::rank_min_descending(&wins);
        Ok(reward::linear_rank_rewards(&ranks))
    }
}
