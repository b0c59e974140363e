use std::sync::Arc;

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::error::TournamentError;
use crate::executor::run_round;
use crate::judge::Judge;
use crate::pairing::bracket::BracketPlayer;
use crate::pairing::double_elim;
use crate::reward;
use crate::sample::Prediction;

use super::GroupRewardModel;

/// Double-elimination: a winners bracket feeds every round's losers into a
/// losers bracket; the winners- and losers-bracket champions meet once in
/// a grand final (skipped if they're the same candidate, i.e. the winners
/// champion never lost). Pairing within a bracket round is a shuffle, not
/// a seeded bracket — neither the winners nor losers side is reseeded
/// between rounds.
pub struct DoubleElimination {
    judge: Arc<dyn Judge>,
    rng: std::sync::Mutex<SmallRng>,
}

impl DoubleElimination {
    pub fn new(judge: Arc<dyn Judge>) -> Self {
        Self::with_rng(judge, SmallRng::from_os_rng())
    }

    pub fn with_rng(judge: Arc<dyn Judge>, rng: SmallRng) -> Self {
        Self {
            judge,
            rng: std::sync::Mutex::new(rng),
        }
    }

    async fn play_round(
        &self,
        active: &[usize],
        players: &mut [BracketPlayer],
        predictions: &[Prediction],
        query: &str,
    ) -> Result<(Vec<usize>, Vec<usize>), TournamentError> {
        let (pairs, byes) = {
            let mut rng = self.rng.lock().expect("rng mutex poisoned");
            double_elim::create_pairings(active, &mut *rng)
        };
        let outcomes = run_round(&pairs, predictions, query, &self.judge).await?;

        let mut winners = byes;
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
        Ok((winners, losers))
    }
}

#[async_trait]
impl GroupRewardModel for DoubleElimination {
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

        // Winners bracket.
        let mut active: Vec<usize> = (0..group_size).collect();
        let mut drops_schedule: Vec<Vec<usize>> = Vec::new();
        while active.len() > 1 {
            let (winners, losers) = self.play_round(&active, &mut players, predictions, query).await?;
            active = winners;
            if !losers.is_empty() {
                drops_schedule.push(losers);
            }
        }
        let wb_champion = active.first().copied();
        log::debug!("double-elimination: winners bracket champion {:?}", wb_champion);

        // Losers bracket.
        let mut active: Vec<usize> = Vec::new();
        let mut lb_eliminated_history: Vec<Vec<usize>> = Vec::new();
        for dropped in &drops_schedule {
            active.extend(dropped);
            if active.len() >= 2 {
                let (winners, losers) = self.play_round(&active, &mut players, predictions, query).await?;
                active = winners;
                if !losers.is_empty() {
                    lb_eliminated_history.push(losers);
                }
            }
        }
        while active.len() > 1 {
            let (winners, losers) = self.play_round(&active, &mut players, predictions, query).await?;
            active = winners;
            if !losers.is_empty() {
                lb_eliminated_history.push(losers);
            }
        }
        let lb_champion = active.first().copied();
        log::debug!("double-elimination: losers bracket champion {:?}", lb_champion);

        // Grand final.
        let (grand_winner, grand_loser) = match (wb_champion, lb_champion) {
            (Some(w), Some(l)) if w != l => {
                let (winners, losers) = self
                    .play_round(&[w, l], &mut players, predictions, query)
                    .await?;
                (winners.first().copied(), losers.first().copied())
            }
            (w, l) => (w, l),
        };

        let mut ranked = Vec::with_capacity(group_size);
        ranked.extend(grand_winner);
        ranked.extend(grand_loser);
        for group in lb_eliminated_history.iter_mut().rev() {
            group.sort_by(|&a, &b| {
                players[b]
                    .avg_point()
                    .partial_cmp(&players[a].avg_point())
                    .expect("scores are always finite")
            });
            ranked.extend(group.iter().copied());
        }

        let mut leftovers: Vec<usize> = (0..group_size).filter(|i| !ranked.contains(i)).collect();
        leftovers.sort_by(|&a, &b| {
            players[b]
                .avg_point()
                .partial_cmp(&players[a].avg_point())
                .expect("scores are always finite")
        });
        ranked.extend(leftovers);

        Ok(reward::order_index_rewards(&ranked, group_size))
    }
}
