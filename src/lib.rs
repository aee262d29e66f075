//! # fantasy_xi_gen
//!
//! A fully offline fantasy-cricket lineup generator.
//!
//! Given the rosters of two teams in a match, this library produces a batch
//! of structurally valid, mutually distinct 11-player fantasy lineups with
//! captain and vice-captain assigned, using weighted-random rejection
//! sampling under composition, captaincy, and diversity constraints.
//!
//! ## How it works
//!
//! 1. Create a [`GenerationRequest`] naming both teams, a [`Mode`]
//!    (`Safe` / `Balanced` / `Risky`), the lineup count, and optionally
//!    tuned [`CriteriaFlags`], [`AdvancedOptions`], and an RNG seed.
//! 2. Call [`generate_lineups`] with a [`RosterProvider`] — the engine builds
//!    each side's candidate pool, then fills one slot at a time: weighted
//!    draws biased by player risk level, validated against role composition,
//!    side balance, and batch-uniqueness constraints, retried under a bounded
//!    attempt budget.
//! 3. The returned [`GenerationResult`] holds every lineup in generation
//!    order plus distinct-captain and distinct-C/VC-pair statistics.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same batch every time — useful for tests and support investigations.
//! - **Graceful degradation**: a slot that exhausts its attempt budget keeps
//!   its last draw (flagged `degraded`) instead of failing the whole run.
//! - **Exposure and rotation control**: per-player exposure caps, captain
//!   anti-streak and anti-repeat rules, and C/VC pair diversity keep a batch
//!   of 20 lineups from collapsing onto the same few players.
//!
//! ## Quick start
//!
//! ```rust
//! use fantasy_xi_gen::{
//!     generate_lineups, GenerationRequest, Mode, Player, RiskLevel, Role,
//!     StaticRosters, TeamRoster,
//! };
//!
//! fn squad(prefix: &str) -> Vec<Player> {
//!     let roles = [
//!         Role::WicketkeeperBatsman, Role::Batsman, Role::Batsman, Role::Batsman,
//!         Role::Batsman, Role::AllRounder, Role::AllRounder, Role::Bowler,
//!         Role::Bowler, Role::Bowler, Role::Bowler,
//!     ];
//!     roles.iter().enumerate().map(|(i, &role)| Player {
//!         id: format!("{prefix}{i}"),
//!         name: format!("{prefix} player {i}"),
//!         role,
//!         risk_level: RiskLevel::Medium,
//!     }).collect()
//! }
//!
//! let rosters = StaticRosters::new(vec![
//!     TeamRoster { team_name: "India".into(), players: squad("ind") },
//!     TeamRoster { team_name: "Australia".into(), players: squad("aus") },
//! ]);
//!
//! let mut request = GenerationRequest::new("India", "Australia", Mode::Balanced);
//! request.team_count = 5;
//! request.rng_seed = Some(42);
//!
//! let result = generate_lineups(&rosters, &request).unwrap();
//! assert_eq!(result.lineups.len(), 5);
//! for lineup in &result.lineups {
//!     assert_eq!(lineup.players.len(), 11);
//! }
//! ```

pub mod lineup_engine;
pub mod view_adapter;

// Convenience re-exports so callers can use `fantasy_xi_gen::generate_lineups`
// directly without reaching into `lineup_engine::`.
pub use lineup_engine::{
    generate_lineups, AdvancedOptions, CriteriaFlags, GenerationError, GenerationRequest,
    GenerationResult, Lineup, Mode, Player, RiskLevel, Role, RosterProvider, StaticRosters,
    TeamRoster,
};
pub use view_adapter::{to_results_view, FREE_LINEUPS};
