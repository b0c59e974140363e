//! Tournament-style group reward models.
//!
//! Five algorithms (`round_robin`, `anchor`, `swiss`, `single_elim`,
//! `double_elim`) each take `G` candidate responses to one query and a
//! [`Judge`](judge::Judge) that scores a pair of them, and return a
//! length-`G`, z-normalized reward vector. Every call is request-scoped:
//! nothing persists between one `GroupRewardModel::compute` and the next.

pub mod drivers;
pub mod error;
pub mod executor;
pub mod judge;
pub mod pairing;
pub mod registry;
pub mod reward;
pub mod sample;

pub use drivers::{Anchor, DoubleElimination, GroupRewardModel, RoundRobin, SingleElimination, Swiss};
pub use error::TournamentError;
pub use judge::{Judge, MatchOutcome, PairKey};
pub use registry::Registry;
pub use sample::{Message, Prediction, Query};
