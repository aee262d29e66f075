//! Core lineup engine — pool building, constraint-checked sampling, and
//! captain/vice-captain selection.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | All shared types: players, rosters, request/response structs |
//! | `errors`    | Fatal generation failures (`thiserror`) |
//! | `pool`      | Per-side candidate pool derivation from roster + mode |
//! | `weights`   | Risk-weight table and cumulative weighted draws |
//! | `tracker`   | Cross-lineup counters and seen-sets for one run |
//! | `sampler`   | The bounded-retry rejection-sampling loop per slot |
//! | `captaincy` | Weighted captain/VC selection with rotation rules |
//! | `generator` | Single entry point `generate_lineups()` |

pub mod errors;
pub mod generator;
pub mod models;
pub mod pool;
pub mod tracker;
pub mod weights;

mod captaincy;
mod sampler;

// Re-export the public API surface so callers can use
// `lineup_engine::generate_lineups` without reaching into sub-modules.
pub use errors::GenerationError;
pub use generator::generate_lineups;
pub use models::{
    AdvancedOptions, CriteriaFlags, GenerationRequest, GenerationResult, Lineup, Mode,
    Player, RiskLevel, Role, RosterProvider, StaticRosters, TeamRoster,
};
