//! Tournament drivers (C5): the five top-level algorithms, each composing
//! a pairing engine (`crate::pairing`), the round executor
//! (`crate::executor::run_round`), and the rank→reward kernel
//! (`crate::reward`).

pub mod anchor;
pub mod double_elim;
pub mod round_robin;
pub mod single_elim;
pub mod swiss;

use async_trait::async_trait;

use crate::error::TournamentError;
use crate::sample::Prediction;

/// Shared capability every tournament algorithm exposes: score a batch of
/// `G` candidate responses to the same query, returning a length-`G`
/// z-normalized reward vector in original candidate order.
#[async_trait]
pub trait GroupRewardModel: Send + Sync {
    async fn compute(
        &self,
        predictions: &[Prediction],
        query: &str,
    ) -> Result<Vec<f32>, TournamentError>;
}

pub use anchor::Anchor;
pub use double_elim::DoubleElimination;
pub use round_robin::RoundRobin;
pub use single_elim::SingleElimination;
pub use swiss::Swiss;
