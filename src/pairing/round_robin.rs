use super::Pair;

/// Every unordered pair `{(i, j) : 0 <= i < j < group_size}`. One round,
/// `G * (G - 1) / 2` pairs.
pub fn pairs(group_size: usize) -> Vec<Pair> {
    let mut out = Vec::with_capacity(group_size.saturating_mul(group_size.saturating_sub(1)) / 2);
    for i in 0..group_size {
        for j in (i + 1)..group_size {
            out.push((i, j));
        }
    }
    out
}
