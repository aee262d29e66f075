use std::collections::HashSet;

use crate::lineup_engine::models::{Mode, Player, TeamRoster};

/// How many bench players each mode pulls in on top of the Playing XI.
fn bench_depth(mode: Mode, bench_len: usize) -> usize {
    match mode {
        Mode::Safe     => 0,
        Mode::Balanced => bench_len.min(2),
        Mode::Risky    => bench_len,
    }
}

/// Build the ordered candidate pool for one side.
///
/// `safe` uses the Playing XI only, `balanced` adds the first 2 bench
/// players, `risky` adds the whole bench. Excluded IDs are dropped in every
/// mode. Pure function of its inputs.
pub fn build_side_pool(
    roster: &TeamRoster,
    mode: Mode,
    excluded: &HashSet<String>,
) -> Vec<Player> {
    let xi = roster.playing_xi();
    let bench = roster.bench();
    let depth = bench_depth(mode, bench.len());

    xi.iter()
        .chain(bench[..depth].iter())
        .filter(|p| !excluded.contains(&p.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lineup_engine::models::{RiskLevel, Role};

    fn roster(total: usize) -> TeamRoster {
        let players = (0..total)
            .map(|i| Player {
                id: format!("p{i}"),
                name: format!("Player {i}"),
                role: Role::Batsman,
                risk_level: RiskLevel::Medium,
            })
            .collect();
        TeamRoster {
            team_name: "Fixture".to_string(),
            players,
        }
    }

    #[test]
    fn safe_mode_uses_playing_xi_only() {
        let r = roster(15);
        let pool = build_side_pool(&r, Mode::Safe, &HashSet::new());
        assert_eq!(pool.len(), 11);
        assert_eq!(pool[0].id, "p0");
        assert_eq!(pool[10].id, "p10");
    }

    #[test]
    fn balanced_mode_adds_first_two_bench_players() {
        let r = roster(15);
        let pool = build_side_pool(&r, Mode::Balanced, &HashSet::new());
        assert_eq!(pool.len(), 13);
        assert_eq!(pool[11].id, "p11");
        assert_eq!(pool[12].id, "p12");
    }

    #[test]
    fn risky_mode_adds_entire_bench() {
        let r = roster(15);
        let pool = build_side_pool(&r, Mode::Risky, &HashSet::new());
        assert_eq!(pool.len(), 15);
    }

    #[test]
    fn short_bench_does_not_panic_in_balanced_mode() {
        let r = roster(12);
        let pool = build_side_pool(&r, Mode::Balanced, &HashSet::new());
        assert_eq!(pool.len(), 12);
    }

    #[test]
    fn excluded_ids_are_removed_in_every_mode() {
        let r = roster(15);
        let excluded: HashSet<String> = ["p0", "p12"].iter().map(|s| s.to_string()).collect();
        for mode in [Mode::Safe, Mode::Balanced, Mode::Risky] {
            let pool = build_side_pool(&r, mode, &excluded);
            assert!(
                pool.iter().all(|p| !excluded.contains(&p.id)),
                "excluded player leaked into {mode} pool"
            );
        }
        assert_eq!(build_side_pool(&r, Mode::Safe, &excluded).len(), 10);
        assert_eq!(build_side_pool(&r, Mode::Balanced, &excluded).len(), 11);
    }
}
