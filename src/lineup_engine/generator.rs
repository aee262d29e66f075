use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::lineup_engine::{
    errors::GenerationError,
    models::{GenerationRequest, GenerationResult, Lineup, RosterProvider},
    pool::build_side_pool,
    sampler::{build_slot, SlotContext, SlotOutcome},
    tracker::Tracker,
};

/// Hard ceiling on the number of lineups per run.
const MAX_TEAM_COUNT: u32 = 20;

/// Generate a batch of fantasy lineups for one match.
///
/// Resolves both team names through `rosters`, builds the per-side candidate
/// pools, and runs the constraint-checked sampler once per requested slot
/// with a fresh [`Tracker`]. Fails up front with [`GenerationError::
/// TeamNotFound`] or [`GenerationError::InsufficientPool`]; once sampling
/// starts, individual slots degrade gracefully rather than failing the run.
pub fn generate_lineups<P: RosterProvider>(
    rosters: &P,
    request: &GenerationRequest,
) -> Result<GenerationResult, GenerationError> {
    let roster_a = rosters
        .lookup(&request.team_a)
        .ok_or_else(|| GenerationError::TeamNotFound(request.team_a.clone()))?;
    let roster_b = rosters
        .lookup(&request.team_b)
        .ok_or_else(|| GenerationError::TeamNotFound(request.team_b.clone()))?;

    let pool_a = build_side_pool(roster_a, request.mode, &request.options.excluded_ids);
    let pool_b = build_side_pool(roster_b, request.mode, &request.options.excluded_ids);

    // Each side must cover the largest split it will ever be asked to fill:
    // 6 for both sides under rotation, otherwise 5 from A and 6 from B.
    let (need_a, need_b) = if request.criteria.split_rotation {
        (6, 6)
    } else {
        (5, 6)
    };
    if pool_a.len() < need_a {
        return Err(GenerationError::InsufficientPool {
            team: request.team_a.clone(),
            available: pool_a.len(),
            required: need_a,
        });
    }
    if pool_b.len() < need_b {
        return Err(GenerationError::InsufficientPool {
            team: request.team_b.clone(),
            available: pool_b.len(),
            required: need_b,
        });
    }

    let team_count = request.team_count.clamp(1, MAX_TEAM_COUNT);
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    let mut tracker = Tracker::new();
    let mut lineups: Vec<Lineup> = Vec::with_capacity(team_count as usize);

    for slot_index in 0..team_count as usize {
        let ctx = SlotContext {
            pool_a: &pool_a,
            pool_b: &pool_b,
            mode: request.mode,
            criteria: &request.criteria,
            options: &request.options,
            team_count,
            slot_index,
        };
        let lineup = match build_slot(&mut rng, &ctx, &mut tracker) {
            SlotOutcome::Valid(l) | SlotOutcome::Degraded(l) => l,
        };
        lineups.push(lineup);
    }

    Ok(GenerationResult {
        lineups,
        distinct_captain_count: tracker.distinct_captains(),
        distinct_pair_count: tracker.distinct_pairs(),
    })
}
