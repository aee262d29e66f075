//! Full demo of the lineup generator.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `fantasy_xi_gen` works end to end:
//!
//! 1. **Mode comparison** — the same match is generated three times (same
//!    seed) in safe, balanced, and risky mode, showing how the risk mix and
//!    captain choices shift while the structural rules stay identical.
//!
//! 2. **Tuned run** — a 10-lineup balanced batch with a locked player, an
//!    excluded player, and the unique-captain option, printed in full.
//!
//! ## Key concepts demonstrated
//!
//! - `GenerationRequest::new(team_a, team_b, mode)` — minimal constructor;
//!   defaults to 20 lineups, all criteria on, entropy seed.
//! - `rng_seed: Some(u64)` makes the whole batch fully deterministic.
//! - `locked_ids` force a player into every lineup; `excluded_ids` remove a
//!    player from the pools entirely.
//! - `to_results_view` maps the result to the JSON shape the results page
//!    consumes, with the first 3 lineups free.

use fantasy_xi_gen::{
    generate_lineups, to_results_view, GenerationRequest, GenerationResult, Mode, Player,
    RiskLevel, Role, StaticRosters, TeamRoster,
};

/// A plausible two-team fixture: full XI plus a short bench each.
fn demo_rosters() -> StaticRosters {
    use RiskLevel::*;
    use Role::*;
    let player = |id: &str, name: &str, role: Role, risk: RiskLevel| Player {
        id: id.to_string(),
        name: name.to_string(),
        role,
        risk_level: risk,
    };

    let india = TeamRoster {
        team_name: "India".to_string(),
        players: vec![
            player("in1", "R. Kishan", WicketkeeperBatsman, Low),
            player("in2", "S. Agarwal", Batsman, Low),
            player("in3", "V. Rathore", Batsman, Low),
            player("in4", "A. Menon", Batsman, Medium),
            player("in5", "K. Pillai", Batsman, High),
            player("in6", "H. Chauhan", AllRounder, Low),
            player("in7", "D. Naik", AllRounder, Medium),
            player("in8", "J. Saini", Bowler, Low),
            player("in9", "M. Tyagi", Bowler, Medium),
            player("in10", "P. Rawat", Bowler, Medium),
            player("in11", "U. Bisht", Bowler, High),
            // bench
            player("in12", "T. Gill", Batsman, Medium),
            player("in13", "N. Joshi", AllRounder, High),
        ],
    };

    let australia = TeamRoster {
        team_name: "Australia".to_string(),
        players: vec![
            player("au1", "B. Carey", WicketkeeperBatsman, Low),
            player("au2", "L. Harper", WicketkeeperBatsman, Medium),
            player("au3", "J. Renshaw", Batsman, Low),
            player("au4", "C. Bancroft", Batsman, Medium),
            player("au5", "T. Short", Batsman, High),
            player("au6", "M. Stoinis", AllRounder, Low),
            player("au7", "A. Hardie", AllRounder, Medium),
            player("au8", "X. Bartlett", Bowler, Low),
            player("au9", "S. Abbott", Bowler, Medium),
            player("au10", "R. Meredith", Bowler, Medium),
            player("au11", "W. Sutherland", Bowler, High),
            // bench
            player("au12", "O. Davies", Batsman, High),
            player("au13", "F. Morris", Bowler, Medium),
        ],
    };

    StaticRosters::new(vec![india, australia])
}

/// Pretty-print one batch: per-lineup split, risk mix, and leaders.
fn print_batch(label: &str, result: &GenerationResult) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "  [{label}]  lineups: {}  distinct captains: {}  distinct C/VC pairs: {}",
        result.lineups.len(),
        result.distinct_captain_count,
        result.distinct_pair_count
    );
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for (i, lineup) in result.lineups.iter().enumerate() {
        let high = lineup
            .players
            .iter()
            .filter(|p| p.risk_level == RiskLevel::High)
            .count();
        let cap = lineup.captain.as_ref().map(|p| p.name.as_str()).unwrap_or("—");
        let vc = lineup.vice_captain.as_ref().map(|p| p.name.as_str()).unwrap_or("—");
        println!(
            "  #{:<2} split {}/{}  high-risk {}  C: {:<14} VC: {:<14}{}",
            i + 1,
            lineup.from_side_a,
            lineup.from_side_b,
            high,
            cap,
            vc,
            if lineup.degraded { "  [degraded]" } else { "" }
        );
    }
    println!();
}

fn main() {
    let rosters = demo_rosters();

    // ── Mode comparison ────────────────────────────────────────────────────
    // Same seed in all three modes: the side splits line up, the risk mix
    // and captaincy shift with the mode.
    println!();
    println!("══ Mode comparison (seed 42, 5 lineups) ══");
    println!();
    for mode in [Mode::Safe, Mode::Balanced, Mode::Risky] {
        let mut request = GenerationRequest::new("India", "Australia", mode);
        request.team_count = 5;
        request.rng_seed = Some(42);
        match generate_lineups(&rosters, &request) {
            Ok(result) => print_batch(&mode.to_string(), &result),
            Err(e) => println!("  generation failed: {e}"),
        }
    }

    // ── Tuned run ──────────────────────────────────────────────────────────
    println!("══ Tuned run: lock Stoinis, exclude Sutherland, unique captains ══");
    println!();
    let mut request = GenerationRequest::new("India", "Australia", Mode::Balanced);
    request.team_count = 10;
    request.rng_seed = Some(7);
    request.options.locked_ids.insert("au6".to_string());
    request.options.excluded_ids.insert("au11".to_string());
    request.options.unique_captain = true;
    match generate_lineups(&rosters, &request) {
        Ok(result) => {
            print_batch("tuned", &result);

            // The JSON view the results page consumes, first 3 lineups free.
            let view = to_results_view(
                &result,
                "India",
                "Australia",
                Mode::Balanced,
                Some("MCG"),
                false,
            );
            println!("── results view stats ──");
            println!("{}", serde_json::to_string_pretty(&view["stats"]).unwrap_or_default());
        }
        Err(e) => println!("  generation failed: {e}"),
    }
}
