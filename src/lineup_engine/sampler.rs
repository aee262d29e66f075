use log::{debug, warn};
use rand::Rng;

use crate::lineup_engine::{
    captaincy::{best_effort_leaders, pick_leaders},
    models::{AdvancedOptions, CriteriaFlags, Lineup, Mode, Player, RiskLevel, Role},
    tracker::{lineup_key, Tracker},
    weights::{risk_weight, weighted_pick, MIN_WEIGHT},
};

/// Hard ceiling on per-slot attempts. Exceeding it degrades the slot instead
/// of failing the request.
pub(crate) const MAX_ATTEMPTS: u32 = 300;

/// Soft constraints (risky all-rounder core, min-distinct-pairs) stop
/// rejecting once this many attempts have been burned.
pub(crate) const SOFT_ATTEMPTS: u32 = 150;

/// Everything one slot needs to draw a lineup. Borrowed from the request and
/// the per-run pools; never outlives the run.
pub(crate) struct SlotContext<'a> {
    pub pool_a: &'a [Player],
    pub pool_b: &'a [Player],
    pub mode: Mode,
    pub criteria: &'a CriteriaFlags,
    pub options: &'a AdvancedOptions,
    pub team_count: u32,
    pub slot_index: usize,
}

impl SlotContext<'_> {
    /// Side split for this slot: (6,5) on even indices under rotation,
    /// fixed (5,6) otherwise.
    pub(crate) fn side_split(&self) -> (usize, usize) {
        if self.criteria.split_rotation && self.slot_index % 2 == 0 {
            (6, 5)
        } else {
            (5, 6)
        }
    }

    /// Appearance count at which a player stops being drawn by weight.
    fn exposure_cap(&self) -> u32 {
        (self.team_count as f64 * self.options.exposure_fraction).floor() as u32
    }

    /// Differential injection only kicks in over the last 10 slots.
    fn in_final_ten(&self) -> bool {
        self.slot_index >= (self.team_count as usize).saturating_sub(10)
    }
}

/// Outcome of one slot's bounded-retry loop.
pub(crate) enum SlotOutcome {
    /// All enabled constraints passed.
    Valid(Lineup),
    /// Attempt budget exhausted; the last draw was kept as a best effort.
    Degraded(Lineup),
}

// ---------------------------------------------------------------------------
// Draw weights
// ---------------------------------------------------------------------------

fn draw_weight<R: Rng>(
    rng: &mut R,
    p: &Player,
    ctx: &SlotContext<'_>,
    tracker: &Tracker,
) -> f64 {
    let mut w = risk_weight(p.risk_level, ctx.mode) * ctx.options.risk_intensity;

    let s = ctx.options.randomization_strength;
    if s > 0.0 {
        w *= rng.gen_range((1.0 - s / 2.0)..=(1.0 + s / 2.0));
    }

    if ctx.options.differential_injection && ctx.in_final_ten() {
        let used = tracker.appearances(&p.id);
        let mut scale = 1.0 - used as f64 / ctx.team_count as f64;
        if used < ctx.options.min_differential_count {
            scale *= 1.5;
        }
        w *= scale;
    }

    w.max(MIN_WEIGHT)
}

// ---------------------------------------------------------------------------
// Per-side selection
// ---------------------------------------------------------------------------

/// Draw `n` distinct players from one side's pool.
///
/// Locked players go in first (pool order, truncated to the slot size, exempt
/// from the exposure cap). The rest come from weighted draws without
/// replacement that skip anyone at the cap. If the weighted phase underfills,
/// the remainder is topped up uniformly from the unused pool members.
fn draw_side<R: Rng>(
    rng: &mut R,
    pool: &[Player],
    n: usize,
    ctx: &SlotContext<'_>,
    tracker: &Tracker,
) -> Vec<Player> {
    let cap = ctx.exposure_cap();
    let mut picked: Vec<Player> = Vec::with_capacity(n);

    for p in pool {
        if picked.len() == n {
            break;
        }
        if ctx.options.locked_ids.contains(&p.id) {
            picked.push(p.clone());
        }
    }

    let mut remaining: Vec<&Player> = pool
        .iter()
        .filter(|p| !picked.iter().any(|q| q.id == p.id))
        .collect();

    while picked.len() < n {
        let eligible: Vec<usize> = remaining
            .iter()
            .enumerate()
            .filter(|(_, p)| tracker.appearances(&p.id) < cap)
            .map(|(i, _)| i)
            .collect();
        if eligible.is_empty() {
            break;
        }
        let ws: Vec<f64> = eligible
            .iter()
            .map(|&i| draw_weight(rng, remaining[i], ctx, tracker))
            .collect();
        let Some(k) = weighted_pick(rng, &ws) else {
            break;
        };
        picked.push(remaining.remove(eligible[k]).clone());
    }

    // Uniform fallback ignores the exposure cap; underfilled slots are worse
    // than a cap overshoot.
    while picked.len() < n && !remaining.is_empty() {
        let i = rng.gen_range(0..remaining.len());
        picked.push(remaining.remove(i).clone());
    }

    picked
}

// ---------------------------------------------------------------------------
// Structural checks
// ---------------------------------------------------------------------------

/// Role composition bounds: 1-4 WK, 3-6 BAT, 1-4 AR, 3-6 BOWL.
pub(crate) fn roles_ok(players: &[Player]) -> bool {
    let mut wk = 0;
    let mut bat = 0;
    let mut ar = 0;
    let mut bowl = 0;
    for p in players {
        match p.role {
            Role::WicketkeeperBatsman => wk += 1,
            Role::Batsman             => bat += 1,
            Role::AllRounder          => ar += 1,
            Role::Bowler              => bowl += 1,
        }
    }
    (1..=4).contains(&wk) && (3..=6).contains(&bat) && (1..=4).contains(&ar) && (3..=6).contains(&bowl)
}

fn high_risk_count(players: &[Player]) -> usize {
    players.iter().filter(|p| p.risk_level == RiskLevel::High).count()
}

fn allrounder_count(players: &[Player]) -> usize {
    players.iter().filter(|p| p.role == Role::AllRounder).count()
}

// ---------------------------------------------------------------------------
// Slot loop
// ---------------------------------------------------------------------------

/// Produce one lineup for the slot via bounded-retry rejection sampling.
pub(crate) fn build_slot<R: Rng>(
    rng: &mut R,
    ctx: &SlotContext<'_>,
    tracker: &mut Tracker,
) -> SlotOutcome {
    let (n_a, n_b) = ctx.side_split();
    let mut last: Option<(Vec<Player>, Vec<Player>)> = None;

    for attempt in 1..=MAX_ATTEMPTS {
        let sel_a = draw_side(rng, ctx.pool_a, n_a, ctx, tracker);
        let sel_b = draw_side(rng, ctx.pool_b, n_b, ctx, tracker);
        last = Some((sel_a.clone(), sel_b.clone()));
        if sel_a.len() != n_a || sel_b.len() != n_b {
            continue;
        }

        let players: Vec<Player> = sel_a.iter().chain(sel_b.iter()).cloned().collect();

        if ctx.criteria.role_limits && !roles_ok(&players) {
            continue;
        }
        if ctx.criteria.side_balance_cap
            && (sel_a.len() > ctx.options.max_from_one_side
                || sel_b.len() > ctx.options.max_from_one_side)
        {
            continue;
        }
        // Mode rules: safe lineups tolerate at most 4 High-risk players;
        // risky lineups want an all-rounder core while attempts remain.
        if ctx.mode == Mode::Safe && high_risk_count(&players) > 4 {
            continue;
        }
        if ctx.mode == Mode::Risky
            && ctx.criteria.risky_allrounder_core
            && attempt < SOFT_ATTEMPTS
            && allrounder_count(&players) < 3
        {
            continue;
        }

        let key = lineup_key(&players);
        if ctx.criteria.unique_lineups && tracker.seen_lineup(&key) {
            continue;
        }

        let Some((captain, vice_captain)) = pick_leaders(rng, &players, ctx, tracker, attempt)
        else {
            continue;
        };

        tracker.record_slot(&players, &captain, &vice_captain, key);
        debug!("slot {} accepted after {} attempts", ctx.slot_index, attempt);
        return SlotOutcome::Valid(Lineup {
            from_side_a: sel_a.len(),
            from_side_b: sel_b.len(),
            players,
            captain: Some(captain),
            vice_captain: Some(vice_captain),
            degraded: false,
        });
    }

    // Budget exhausted: keep the last draw instead of failing the request.
    // The tracker is only ever updated for fully accepted slots.
    warn!(
        "slot {} exhausted {} attempts, keeping last draw",
        ctx.slot_index, MAX_ATTEMPTS
    );
    let (sel_a, sel_b) = last.unwrap_or_default();
    let players: Vec<Player> = sel_a.iter().chain(sel_b.iter()).cloned().collect();
    let (captain, vice_captain) = best_effort_leaders(rng, &players, ctx, tracker);
    SlotOutcome::Degraded(Lineup {
        from_side_a: sel_a.len(),
        from_side_b: sel_b.len(),
        players,
        captain,
        vice_captain,
        degraded: true,
    })
}
