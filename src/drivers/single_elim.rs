use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TournamentError;
use crate::executor::run_round;
use crate::judge::Judge;
use crate::pairing::anchor as seeding_pairs;
use crate::pairing::bracket::BracketPlayer;
use crate::pairing::single_elim;
use crate::reward;
use crate::sample::Prediction;

use super::GroupRewardModel;

/// Single-elimination bracket. Seeding is a quick anchor round (everyone
/// vs. index 0) whose scores set each player's `avg_point`; the bracket is
/// then built so high seeds meet late. Losers are ranked worst-first by
/// the round they fell in, ties within a round broken by `avg_point`.
pub struct SingleElimination {
    judge: Arc<dyn Judge>,
}

impl SingleElimination {
    pub fn new(judge: Arc<dyn Judge>) -> Self {
        Self { judge }
    }

    async fn seed(
        &self,
        players: &mut [BracketPlayer],
        predictions: &[Prediction],
        query: &str,
    ) -> Result<(), TournamentError> {
        let group_size = players.len();
        if group_size < 2 {
            return Ok(());
        }
        let pairs = seeding_pairs::pairs(group_size);
        let outcomes = run_round(&pairs, predictions, query, &self.judge).await?;

        let mut pivot_scores = Vec::with_capacity(group_size - 1);
        for outcome in &outcomes {
            players[outcome.key.i].points.push(outcome.score_i);
            pivot_scores.push(outcome.score_j);
        }
        let pivot_mean = pivot_scores.iter().sum::<f32>() / pivot_scores.len() as f32;
        players[0].points.push(pivot_mean);
        Ok(())
    }
}

#[async_trait]
impl GroupRewardModel for SingleElimination {
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

        let mut players: Vec<BracketPlayer> = (0..group_size).map(BracketPlayer::new).collect();
        self.seed(&mut players, predictions, query).await?;

        let mut seeded_order: Vec<usize> = (0..group_size).collect();
        seeded_order.sort_by(|&a, &b| {
            players[b]
                .avg_point()
                .partial_cmp(&players[a].avg_point())
                .expect("seeding scores are always finite")
        });

        let mut active: Vec<usize> = single_elim::seeded_bracket(group_size)
            .into_iter()
            .map(|seed_rank| seeded_order[seed_rank])
            .collect();

        let mut eliminated_history: Vec<Vec<usize>> = Vec::new();
        log::debug!("single-elimination: {} candidates, bracket {:?}", group_size, active);

        while active.len() > 1 {
            let (pairs, bye) = single_elim::round_pairings(&active);
            let outcomes = run_round(&pairs, predictions, query, &self.judge).await?;

            let mut winners = Vec::with_capacity(pairs.len());
            let mut losers = Vec::with_capacity(pairs.len());
            for outcome in &outcomes {
                let (i, j) = (outcome.key.i, outcome.key.j);
                players[i].points.push(outcome.score_i);
                players[j].points.push(outcome.score_j);
                if outcome.score_i >= outcome.score_j {
                    winners.push(i);
                    losers.push(j);
                } else {
                    winners.push(j);
                    losers.push(i);
                }
            }
            if !losers.is_empty() {
                eliminated_history.push(losers);
            }

            active = bye.into_iter().chain(winners).collect();
        }

        let champion = active.first().copied();
        let mut ranked = Vec::with_capacity(group_size);
        ranked.extend(champion);
        for group in eliminated_history.iter_mut().rev() {
            group.sort_by(|&a, &b| {
                players[b]
                    .avg_point()
                    .partial_cmp(&players[a].avg_point())
                    .expect("scores are always finite")
            });
            ranked.extend(group.iter().copied());
        }

        Ok(reward::order_index_rewards(&ranked, group_size))
    }
}
