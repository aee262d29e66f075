use std::collections::{HashMap, HashSet};

use crate::lineup_engine::models::{Player, Role};

/// Cross-lineup state for one generation run.
///
/// Constructed fresh per run and updated exactly once per accepted slot via
/// [`Tracker::record_slot`]. Degraded slots leave it untouched. Nothing in
/// here is shared across runs.
#[derive(Debug, Default)]
pub struct Tracker {
    appearances: HashMap<String, u32>,
    captain_counts: HashMap<String, u32>,
    vc_counts: HashMap<String, u32>,
    seen_lineups: HashSet<String>,
    seen_pairs: HashSet<(String, String)>,
    captain_history: Vec<String>,
    allrounder_captained: bool,
    slots_produced: usize,
}

impl Tracker {
    pub fn new() -> Self {
        Tracker::default()
    }

    pub fn appearances(&self, player_id: &str) -> u32 {
        self.appearances.get(player_id).copied().unwrap_or(0)
    }

    pub fn captain_count(&self, player_id: &str) -> u32 {
        self.captain_counts.get(player_id).copied().unwrap_or(0)
    }

    pub fn vc_count(&self, player_id: &str) -> u32 {
        self.vc_counts.get(player_id).copied().unwrap_or(0)
    }

    pub fn seen_lineup(&self, key: &str) -> bool {
        self.seen_lineups.contains(key)
    }

    pub fn pair_used(&self, captain_id: &str, vc_id: &str) -> bool {
        self.seen_pairs
            .contains(&(captain_id.to_string(), vc_id.to_string()))
    }

    pub fn distinct_captains(&self) -> usize {
        self.captain_counts.len()
    }

    pub fn distinct_pairs(&self) -> usize {
        self.seen_pairs.len()
    }

    pub fn slots_produced(&self) -> usize {
        self.slots_produced
    }

    pub fn allrounder_has_captained(&self) -> bool {
        self.allrounder_captained
    }

    /// ID of the player who captained the last `streak` slots, if the same
    /// player captained all of them.
    pub fn streak_captain(&self, streak: usize) -> Option<&str> {
        if self.captain_history.len() < streak {
            return None;
        }
        let tail = &self.captain_history[self.captain_history.len() - streak..];
        let first = tail[0].as_str();
        tail.iter().all(|id| id == first).then_some(first)
    }

    /// Fold one accepted slot into the run state.
    pub fn record_slot(
        &mut self,
        players: &[Player],
        captain: &Player,
        vice_captain: &Player,
        lineup_key: String,
    ) {
        for p in players {
            *self.appearances.entry(p.id.clone()).or_insert(0) += 1;
        }
        *self.captain_counts.entry(captain.id.clone()).or_insert(0) += 1;
        *self.vc_counts.entry(vice_captain.id.clone()).or_insert(0) += 1;
        self.seen_pairs
            .insert((captain.id.clone(), vice_captain.id.clone()));
        self.seen_lineups.insert(lineup_key);
        self.captain_history.push(captain.id.clone());
        if captain.role == Role::AllRounder {
            self.allrounder_captained = true;
        }
        self.slots_produced += 1;
    }
}

/// Content identity of a lineup: sorted player IDs joined with commas.
/// Two lineups with the same players collide regardless of draw order.
pub fn lineup_key(players: &[Player]) -> String {
    let mut ids: Vec<&str> = players.iter().map(|p| p.id.as_str()).collect();
    ids.sort_unstable();
    ids.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lineup_engine::models::RiskLevel;

    fn player(id: &str, role: Role) -> Player {
        Player {
            id: id.to_string(),
            name: id.to_string(),
            role,
            risk_level: RiskLevel::Low,
        }
    }

    #[test]
    fn lineup_key_ignores_order() {
        let a = [player("b", Role::Batsman), player("a", Role::Bowler)];
        let b = [player("a", Role::Batsman), player("b", Role::Bowler)];
        assert_eq!(lineup_key(&a), lineup_key(&b));
        assert_eq!(lineup_key(&a), "a,b");
    }

    #[test]
    fn record_slot_updates_all_counters() {
        let mut t = Tracker::new();
        let players = vec![player("p1", Role::Batsman), player("p2", Role::AllRounder)];
        let cap = players[1].clone();
        let vc = players[0].clone();
        t.record_slot(&players, &cap, &vc, lineup_key(&players));

        assert_eq!(t.appearances("p1"), 1);
        assert_eq!(t.appearances("p2"), 1);
        assert_eq!(t.captain_count("p2"), 1);
        assert_eq!(t.vc_count("p1"), 1);
        assert!(t.pair_used("p2", "p1"));
        assert!(!t.pair_used("p1", "p2"));
        assert!(t.seen_lineup("p1,p2"));
        assert!(t.allrounder_has_captained());
        assert_eq!(t.slots_produced(), 1);
    }

    #[test]
    fn streak_captain_detects_three_in_a_row() {
        let mut t = Tracker::new();
        let players = vec![player("c", Role::Batsman), player("v", Role::Bowler)];
        let cap = players[0].clone();
        let vc = players[1].clone();
        for _ in 0..2 {
            t.record_slot(&players, &cap, &vc, lineup_key(&players));
        }
        assert_eq!(t.streak_captain(3), None);
        t.record_slot(&players, &cap, &vc, lineup_key(&players));
        assert_eq!(t.streak_captain(3), Some("c"));
    }
}
