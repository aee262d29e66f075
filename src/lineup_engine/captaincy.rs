use rand::Rng;

use crate::lineup_engine::{
    models::{Mode, Player, RiskLevel, Role},
    sampler::{SlotContext, SOFT_ATTEMPTS},
    tracker::Tracker,
    weights::{risk_weight, weighted_pick, MIN_WEIGHT},
};

/// Captain candidates by mode: safe restricts to Low risk, balanced allows
/// Low and Medium, risky takes anyone. Falls back to the whole lineup when
/// the filter empties the pool.
fn candidate_pool<'a>(players: &'a [Player], mode: Mode) -> Vec<&'a Player> {
    let filtered: Vec<&Player> = players
        .iter()
        .filter(|p| match mode {
            Mode::Safe     => p.risk_level == RiskLevel::Low,
            Mode::Balanced => matches!(p.risk_level, RiskLevel::Low | RiskLevel::Medium),
            Mode::Risky    => true,
        })
        .collect();
    if filtered.is_empty() {
        players.iter().collect()
    } else {
        filtered
    }
}

/// Captaining the same player repeatedly gets progressively less likely.
fn captain_weight(p: &Player, ctx: &SlotContext<'_>, tracker: &Tracker) -> f64 {
    let w = risk_weight(p.risk_level, ctx.mode) * ctx.options.risk_intensity
        / (1.0 + 0.5 * tracker.captain_count(&p.id) as f64);
    w.max(MIN_WEIGHT)
}

fn vc_weight(p: &Player, ctx: &SlotContext<'_>, tracker: &Tracker) -> f64 {
    let w = risk_weight(p.risk_level, ctx.mode) / (1.0 + 0.3 * tracker.vc_count(&p.id) as f64);
    w.max(MIN_WEIGHT)
}

fn pick_captain<R: Rng>(
    rng: &mut R,
    players: &[Player],
    ctx: &SlotContext<'_>,
    tracker: &Tracker,
) -> Option<Player> {
    let mut pool = candidate_pool(players, ctx.mode);
    if pool.is_empty() {
        return None;
    }

    // Anti-streak: a player who captained the last 3 slots sits this one
    // out, unless that would empty the pool.
    if ctx.criteria.captain_streak_guard {
        if let Some(streaker) = tracker.streak_captain(3) {
            let thinned: Vec<&Player> =
                pool.iter().copied().filter(|p| p.id != streaker).collect();
            if !thinned.is_empty() {
                pool = thinned;
            }
        }
    }

    // Early all-rounder guarantee: by slot index 4, if no all-rounder has
    // captained yet, draw uniformly from the all-rounder candidates. Takes
    // precedence over the safe-core policy at this slot.
    if ctx.criteria.early_allrounder_captain
        && ctx.slot_index == 4
        && !tracker.allrounder_has_captained()
    {
        let ars: Vec<&Player> = pool
            .iter()
            .copied()
            .filter(|p| p.role == Role::AllRounder)
            .collect();
        if !ars.is_empty() {
            return Some(ars[rng.gen_range(0..ars.len())].clone());
        }
    }

    // Safe-core policy: first 5 slots deterministically captain the
    // least-used Low-risk candidate, overriding the weighted draw.
    if ctx.criteria.safe_core_captains && ctx.slot_index < 5 {
        if let Some(p) = pool
            .iter()
            .filter(|p| p.risk_level == RiskLevel::Low)
            .min_by_key(|p| tracker.captain_count(&p.id))
        {
            return Some((*p).clone());
        }
    }

    let ws: Vec<f64> = pool.iter().map(|p| captain_weight(p, ctx, tracker)).collect();
    weighted_pick(rng, &ws).map(|i| pool[i].clone())
}

fn pick_vice_captain<R: Rng>(
    rng: &mut R,
    players: &[Player],
    captain: &Player,
    ctx: &SlotContext<'_>,
    tracker: &Tracker,
) -> Option<Player> {
    let mut pool: Vec<&Player> = players.iter().filter(|p| p.id != captain.id).collect();
    if pool.is_empty() {
        return None;
    }

    // Prefer pairs this run has not produced yet.
    if ctx.criteria.avoid_repeat_pair {
        let fresh: Vec<&Player> = pool
            .iter()
            .copied()
            .filter(|p| !tracker.pair_used(&captain.id, &p.id))
            .collect();
        if !fresh.is_empty() {
            pool = fresh;
        }
    }

    let ws: Vec<f64> = pool.iter().map(|p| vc_weight(p, ctx, tracker)).collect();
    weighted_pick(rng, &ws).map(|i| pool[i].clone())
}

/// Choose captain and vice-captain for a validated lineup.
///
/// `None` rejects the whole slot back into the sampler's retry loop: the
/// uniqueness options and the minimum-distinct-pairs rule are slot-level
/// constraints, not captain re-draws.
pub(crate) fn pick_leaders<R: Rng>(
    rng: &mut R,
    players: &[Player],
    ctx: &SlotContext<'_>,
    tracker: &Tracker,
    attempt: u32,
) -> Option<(Player, Player)> {
    let captain = pick_captain(rng, players, ctx, tracker)?;
    if ctx.options.unique_captain && tracker.captain_count(&captain.id) > 0 {
        return None;
    }

    let vice = pick_vice_captain(rng, players, &captain, ctx, tracker)?;
    if ctx.options.unique_vice_captain && tracker.vc_count(&vice.id) > 0 {
        return None;
    }

    // Until 5 distinct C/VC pairs exist (and once 5 slots do), a repeated
    // pair is rejected while the attempt budget allows.
    if ctx.criteria.min_distinct_pairs
        && tracker.slots_produced() >= 5
        && tracker.distinct_pairs() < 5
        && tracker.pair_used(&captain.id, &vice.id)
        && attempt < SOFT_ATTEMPTS
    {
        return None;
    }

    Some((captain, vice))
}

/// Relaxed captain/VC assignment for a degraded slot: mode filter and
/// weights still apply, uniqueness and pair rules do not.
pub(crate) fn best_effort_leaders<R: Rng>(
    rng: &mut R,
    players: &[Player],
    ctx: &SlotContext<'_>,
    tracker: &Tracker,
) -> (Option<Player>, Option<Player>) {
    if players.is_empty() {
        return (None, None);
    }
    let Some(captain) = pick_captain(rng, players, ctx, tracker) else {
        return (None, None);
    };
    let vice = pick_vice_captain(rng, players, &captain, ctx, tracker);
    (Some(captain), vice)
}
