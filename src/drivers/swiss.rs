use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::error::TournamentError;
use crate::executor::run_round;
use crate::judge::Judge;
use crate::pairing::swiss::{self, SwissPlayer};
use crate::reward;
use crate::sample::Prediction;

use super::GroupRewardModel;

/// Swiss system: `R = min(ceil(log2(G)), G - 1)` rounds (or an explicit
/// cap), points accrue 1/0.5/0 per round with a bye worth a full point,
/// no-rematch pairing, final standings broken by Buchholz (sum of
/// opponents' points).
pub struct Swiss {
    judge: Arc<dyn Judge>,
    max_rounds: Option<usize>,
    rng: std::sync::Mutex<SmallRng>,
}

impl Swiss {
    pub fn new(judge: Arc<dyn Judge>) -> Self {
        Self::with_rng(judge, SmallRng::from_os_rng())
    }

    /// Construct with an explicit RNG for reproducible pairing (tests,
    /// replayed tournaments).
    pub fn with_rng(judge: Arc<dyn Judge>, rng: SmallRng) -> Self {
        Self {
            judge,
            max_rounds: None,
            rng: std::sync::Mutex::new(rng),
        }
    }

    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }
}

#[async_trait]
impl GroupRewardModel for Swiss {
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

        let rounds = swiss::num_rounds(group_size, self.max_rounds);
        let mut players: Vec<SwissPlayer> = (0..group_size).map(SwissPlayer::new).collect();

        for round in 0..rounds {
            let (pairs, bye) = {
                let mut rng = self.rng.lock().expect("rng mutex poisoned");
                swiss::create_pairings(&players, &mut *rng)
            };
            log::debug!("swiss round {}/{}: {} pairs, bye={:?}", round + 1, rounds, pairs.len(), bye);

            let outcomes = run_round(&pairs, predictions, query, &self.judge).await?;
            for outcome in &outcomes {
                let (i, j) = (outcome.key.i, outcome.key.j);
                if outcome.score_i > outcome.score_j {
                    players[i].points += 1.0;
                } else if outcome.score_j > outcome.score_i {
                    players[j].points += 1.0;
                } else {
                    players[i].points += 0.5;
                    players[j].points += 0.5;
                }
                players[i].opponents.insert(j);
                players[j].opponents.insert(i);
            }
            if let Some(bye_idx) = bye {
                players[bye_idx].points += 1.0;
            }
        }

        let points: HashMap<usize, f32> = players.iter().map(|p| (p.idx, p.points)).collect();
        let standings: Vec<(usize, f32, f32)> = players
            .iter()
            .map(|p| {
                let buchholz: f32 = p.opponents.iter().map(|o| points[o]).sum();
                (p.idx, p.points, buchholz)
            })
            .collect();

        Ok(reward::swiss_group_rewards(&standings, group_size))
    }
}
