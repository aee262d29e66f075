use rand::Rng;

use crate::lineup_engine::models::{Mode, RiskLevel};

/// Floor applied to every sampling weight. Keeps all candidates drawable and
/// avoids zero-total weighted draws.
pub const MIN_WEIGHT: f64 = 0.05;

/// Base draw weight per risk level and mode.
///
/// Safe mode leans hard on Low-risk players, risky mode on High-risk ones,
/// balanced sits between.
pub fn risk_weight(risk: RiskLevel, mode: Mode) -> f64 {
    match (mode, risk) {
        (Mode::Safe, RiskLevel::Low)        => 5.0,
        (Mode::Safe, RiskLevel::Medium)     => 2.0,
        (Mode::Safe, RiskLevel::High)       => 0.4,
        (Mode::Balanced, RiskLevel::Low)    => 3.0,
        (Mode::Balanced, RiskLevel::Medium) => 3.0,
        (Mode::Balanced, RiskLevel::High)   => 1.5,
        (Mode::Risky, RiskLevel::Low)       => 1.5,
        (Mode::Risky, RiskLevel::Medium)    => 2.5,
        (Mode::Risky, RiskLevel::High)      => 5.0,
    }
}

/// Draw one index proportionally to `weights` via a cumulative walk.
/// Returns `None` on an empty slice. Callers floor their weights at
/// [`MIN_WEIGHT`], so the total is always positive.
pub fn weighted_pick<R: Rng>(rng: &mut R, weights: &[f64]) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }
    let total: f64 = weights.iter().sum();
    let mut x = rng.gen_range(0.0..total);
    for (i, w) in weights.iter().enumerate() {
        if x < *w {
            return Some(i);
        }
        x -= w;
    }
    // Float rounding can walk past the end; the last index is still valid.
    Some(weights.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn risk_table_orders_modes_correctly() {
        assert!(risk_weight(RiskLevel::Low, Mode::Safe) > risk_weight(RiskLevel::High, Mode::Safe));
        assert!(risk_weight(RiskLevel::High, Mode::Risky) > risk_weight(RiskLevel::Low, Mode::Risky));
        assert_eq!(
            risk_weight(RiskLevel::Low, Mode::Balanced),
            risk_weight(RiskLevel::Medium, Mode::Balanced)
        );
    }

    #[test]
    fn weighted_pick_respects_weights() {
        let mut rng = StdRng::seed_from_u64(7);
        let weights = [1.0, 100.0, 1.0];
        let mut counts = [0usize; 3];
        for _ in 0..1000 {
            counts[weighted_pick(&mut rng, &weights).unwrap()] += 1;
        }
        assert!(counts[1] > 900, "dominant weight drawn only {} times", counts[1]);
        assert!(counts[0] > 0 || counts[2] > 0, "light weights never drawn");
    }

    #[test]
    fn weighted_pick_handles_edge_inputs() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(weighted_pick(&mut rng, &[]), None);
        assert_eq!(weighted_pick(&mut rng, &[3.5]), Some(0));
    }
}
