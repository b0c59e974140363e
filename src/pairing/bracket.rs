/// Per-candidate state shared by single- and double-elimination: every
/// judge score a player has ever received, used both as the seeding
/// statistic (`avg_point`) and, on elimination, to break ties among
/// players knocked out in the same round.
#[derive(Debug, Clone)]
pub struct BracketPlayer {
    pub idx: usize,
    pub points: Vec<f32>,
}

impl BracketPlayer {
    pub fn new(idx: usize) -> Self {
        Self {
            idx,
            points: Vec::new(),
        }
    }

    pub fn avg_point(&self) -> f32 {
        if self.points.is_empty() {
            0.0
        } else {
            self.points.iter().sum::<f32>() / self.points.len() as f32
        }
    }
}
