use serde_json::{json, Value};

use crate::lineup_engine::models::{GenerationResult, Lineup, Mode, Player};

/// Number of lineups the presentation layer shows without unlocking.
pub const FREE_LINEUPS: usize = 3;

/// Sentinel rendered when a degraded lineup has no captain or vice-captain.
const NO_LEADER: &str = "—";

fn leader_name(leader: &Option<Player>) -> &str {
    leader.as_ref().map(|p| p.name.as_str()).unwrap_or(NO_LEADER)
}

fn player_entry(p: &Player, lineup: &Lineup) -> Value {
    let is_captain = lineup.captain.as_ref().is_some_and(|c| c.id == p.id);
    let is_vice = lineup.vice_captain.as_ref().is_some_and(|v| v.id == p.id);
    json!({
        "name": p.name,
        "role": p.role.to_string(),
        "risk_level": p.risk_level.to_string(),
        "is_captain": is_captain,
        "is_vice_captain": is_vice
    })
}

fn lineup_entry(lineup: &Lineup, index: usize, unlocked: bool) -> Value {
    let players: Vec<Value> = lineup.players.iter().map(|p| player_entry(p, lineup)).collect();
    json!({
        "number": index + 1,
        "players": players,
        "captain": leader_name(&lineup.captain),
        "vice_captain": leader_name(&lineup.vice_captain),
        "from_team1": lineup.from_side_a,
        "from_team2": lineup.from_side_b,
        "free": unlocked || index < FREE_LINEUPS,
        "degraded": lineup.degraded
    })
}

/// Map a [`GenerationResult`] to the JSON view model the results page
/// consumes: match strip, stats chips, and one entry per lineup with the
/// first [`FREE_LINEUPS`] marked free.
pub fn to_results_view(
    result: &GenerationResult,
    team_a: &str,
    team_b: &str,
    mode: Mode,
    venue: Option<&str>,
    unlocked: bool,
) -> Value {
    let generated = result.lineups.len();
    let teams: Vec<Value> = result
        .lineups
        .iter()
        .enumerate()
        .map(|(i, l)| lineup_entry(l, i, unlocked))
        .collect();

    json!({
        "match": {
            "team1": team_a,
            "team2": team_b,
            "mode": mode.to_string(),
            "venue": venue.unwrap_or("")
        },
        "stats": {
            "generated": generated,
            "free": if unlocked { generated } else { generated.min(FREE_LINEUPS) },
            "locked": if unlocked { 0 } else { generated.saturating_sub(FREE_LINEUPS) },
            "unique_captains": result.distinct_captain_count,
            "cv_combos": result.distinct_pair_count
        },
        "unlocked": unlocked,
        "teams": teams
    })
}
