//! Rank → reward kernel (C2): the one piece of math every driver in
//! `crate::drivers` funnels its tournament outcome through before
//! returning to the caller.

/// Final normalization applied by every driver: subtract the mean, divide
/// by `std + 1e-6`. `std` here is the *population* standard deviation
/// (divide by `n`, not `n - 1`) — the concrete scenarios and property 3 in
/// spec §8 are both stated in terms of population z-scores.
///
/// `n == 0` is guarded explicitly (population variance would otherwise
/// divide by zero); `n == 1`'s variance is `0.0 / 1 = 0.0`, so a
/// single-candidate group naturally normalizes to `[0.0]` without a
/// separate special case.
pub fn normalize(values: &[f32]) -> Vec<f32> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }
    let mean = values.iter().sum::<f32>() / n as f32;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / n as f32;
    let std = variance.sqrt();
    values.iter().map(|v| (v - mean) / (std + 1e-6)).collect()
}

/// Competition ranking (pandas `method="min"`, descending scores): tied
/// scores share the best rank among them. 1-indexed.
pub fn rank_min_descending(scores: &[f32]) -> Vec<u32> {
    let n = scores.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .expect("judge scores must be comparable (non-NaN)")
    });

    let mut ranks = vec![0u32; n];
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && scores[order[j + 1]] == scores[order[i]] {
            j += 1;
        }
        let rank = (i + 1) as u32;
        for k in i..=j {
            ranks[order[k]] = rank;
        }
        i = j + 1;
    }
    ranks
}

/// Linear-rank form (round-robin, anchor): `r_i = (max_rank - rank_i) /
/// (max_rank - 1)`, or all zeros if every candidate tied at rank 1.
/// Followed by final normalization.
pub fn linear_rank_rewards(ranks: &[u32]) -> Vec<f32> {
    let max_rank = ranks.iter().copied().max().unwrap_or(1);
    let raw: Vec<f32> = if max_rank <= 1 {
        vec![0.0; ranks.len()]
    } else {
        ranks
            .iter()
            .map(|&r| (max_rank - r) as f32 / (max_rank - 1) as f32)
            .collect()
    };
    normalize(&raw)
}

/// Order-index form (single/double elimination): `order` is candidate
/// indices from best to worst, no ties. `r_{rank_idx} = 1 -
/// rank_idx/(G-1)`, scattered back into candidate-index order, then
/// normalized.
pub fn order_index_rewards(order: &[usize], group_size: usize) -> Vec<f32> {
    let mut raw = vec![0.0f32; group_size];
    if group_size <= 1 {
        return raw;
    }
    for (rank_idx, &idx) in order.iter().enumerate() {
        raw[idx] = 1.0 - (rank_idx as f32) / ((group_size - 1) as f32);
    }
    normalize(&raw)
}

/// Swiss form: `standings` is `(idx, points, buchholz)` for every
/// candidate, unsorted. Sort by `(points desc, buchholz desc)`, group
/// adjacent players with equal `(points, buchholz)`, and give every
/// member of a group the mean of the positional rewards `(G - (k+1)) /
/// (G - 1)` over the group's positions `k`. Then normalize.
pub fn swiss_group_rewards(standings: &[(usize, f32, f32)], group_size: usize) -> Vec<f32> {
    let mut raw = vec![0.0f32; group_size];
    if group_size <= 1 {
        return raw;
    }

    let mut ranked: Vec<(usize, f32, f32)> = standings.to_vec();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap()
            .then_with(|| b.2.partial_cmp(&a.2).unwrap())
    });

    let positional = |k: usize| -> f32 { (group_size - (k + 1)) as f32 / (group_size - 1) as f32 };

    let mut i = 0;
    while i < group_size {
        let mut j = i;
        while j + 1 < group_size
            && ranked[j + 1].1 == ranked[i].1
            && ranked[j + 1].2 == ranked[i].2
        {
            j += 1;
        }
        let sum: f32 = (i..=j).map(positional).sum();
        let avg = sum / (j - i + 1) as f32;
        for k in i..=j {
            raw[ranked[k].0] = avg;
        }
        i = j + 1;
    }

    normalize(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_single_candidate_is_zero_not_nan() {
        assert_eq!(normalize(&[3.0]), vec![0.0]);
    }

    #[test]
    fn normalize_constant_input_is_zero() {
        let out = normalize(&[1.0, 1.0, 1.0]);
        assert!(out.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn rank_min_descending_breaks_ties_with_shared_min_rank() {
        let ranks = rank_min_descending(&[5.0, 5.0, 5.0]);
        assert_eq!(ranks, vec![1, 1, 1]);
    }

    #[test]
    fn rank_min_descending_strict_order() {
        let ranks = rank_min_descending(&[10.0, 7.0, 5.0, 1.0]);
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn linear_rank_rewards_all_tied_is_zero_vector() {
        let ranks = vec![1, 1, 1];
        let rewards = linear_rank_rewards(&ranks);
        assert!(rewards.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn linear_rank_rewards_matches_scenario_g4() {
        // G=4, values [10, 7, 5, 1] -> ranks [1,2,3,4]
        let ranks = vec![1, 2, 3, 4];
        let rewards = linear_rank_rewards(&ranks);
        let expected = [1.3416, 0.4472, -0.4472, -1.3416];
        for (got, want) in rewards.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-3, "{got} vs {want}");
        }
    }

    #[test]
    fn order_index_rewards_best_to_worst() {
        let order = vec![0, 1, 2, 3];
        let rewards = order_index_rewards(&order, 4);
        // raw rewards before normalization would be [1, 2/3, 1/3, 0],
        // same shape as the round-robin scenario, so normalization matches.
        let expected = [1.3416, 0.4472, -0.4472, -1.3416];
        for (got, want) in rewards.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-3, "{got} vs {want}");
        }
    }

    #[test]
    fn swiss_group_rewards_no_ties_matches_scenario_g5() {
        // G=5, final order [0,1,2,3,4], all distinct (points, buchholz).
        let standings = vec![
            (0usize, 4.0f32, 10.0f32),
            (1, 3.0, 8.0),
            (2, 2.0, 6.0),
            (3, 1.0, 4.0),
            (4, 0.0, 2.0),
        ];
        let rewards = swiss_group_rewards(&standings, 5);
        // raw (pre-normalization) would be [1, 0.75, 0.5, 0.25, 0]
        let mean = 0.5f32;
        let variance = [1.0f32, 0.75, 0.5, 0.25, 0.0]
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f32>()
            / 5.0;
        let std = variance.sqrt();
        let expected: Vec<f32> = [1.0f32, 0.75, 0.5, 0.25, 0.0]
            .iter()
            .map(|v| (v - mean) / (std + 1e-6))
            .collect();
        for (got, want) in rewards.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-3, "{got} vs {want}");
        }
    }

    #[test]
    fn swiss_group_rewards_groups_ties() {
        let standings = vec![(0usize, 1.0f32, 0.0f32), (1, 1.0, 0.0), (2, 0.0, 0.0)];
        let rewards = swiss_group_rewards(&standings, 3);
        assert_eq!(rewards[0], rewards[1]);
        assert!(rewards[0] > rewards[2]);
    }
}
