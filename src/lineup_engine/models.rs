use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lineup_engine::errors::GenerationError;

// ---------------------------------------------------------------------------
// Player primitives
// ---------------------------------------------------------------------------

/// Cricket playing role. Serde names match the roster JSON
/// (`"All-rounder"`, `"Wicketkeeper-Batsman"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Batsman,
    Bowler,
    #[serde(rename = "All-rounder")]
    AllRounder,
    #[serde(rename = "Wicketkeeper-Batsman")]
    WicketkeeperBatsman,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Batsman             => "Batsman",
            Role::Bowler              => "Bowler",
            Role::AllRounder          => "All-rounder",
            Role::WicketkeeperBatsman => "Wicketkeeper-Batsman",
        };
        write!(f, "{}", s)
    }
}

/// Static risk label on a player. Drives sampling weight and captaincy
/// eligibility; never computed from real statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low    => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High   => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub risk_level: RiskLevel,
}

// ---------------------------------------------------------------------------
// Rosters
// ---------------------------------------------------------------------------

/// One team's full squad. The first 11 players are the confirmed Playing XI;
/// everything after that is the bench.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRoster {
    #[serde(rename = "team")]
    pub team_name: String,
    pub players: Vec<Player>,
}

impl TeamRoster {
    pub fn playing_xi(&self) -> &[Player] {
        let n = self.players.len().min(11);
        &self.players[..n]
    }

    pub fn bench(&self) -> &[Player] {
        if self.players.len() > 11 {
            &self.players[11..]
        } else {
            &[]
        }
    }
}

/// Resolves a team name to its roster. The engine only ever reads through
/// this seam, so callers can back it with JSON files, a database, or a
/// hand-built fixture in tests.
pub trait RosterProvider {
    fn lookup(&self, team_name: &str) -> Option<&TeamRoster>;
}

/// In-memory roster lookup keyed by team name.
#[derive(Debug, Clone, Default)]
pub struct StaticRosters {
    by_name: HashMap<String, TeamRoster>,
}

#[derive(Deserialize)]
struct RosterFile {
    teams: Vec<TeamRoster>,
}

impl StaticRosters {
    pub fn new(rosters: Vec<TeamRoster>) -> Self {
        let by_name = rosters
            .into_iter()
            .map(|r| (r.team_name.clone(), r))
            .collect();
        StaticRosters { by_name }
    }

    /// Load rosters from the `teams.json` shape:
    /// `{"teams": [{"team": "India", "players": [...]}, ...]}`.
    pub fn from_json(json: &str) -> Result<Self, GenerationError> {
        let file: RosterFile = serde_json::from_str(json)
            .map_err(|e| GenerationError::InvalidRoster(e.to_string()))?;
        Ok(StaticRosters::new(file.teams))
    }

    /// Names of every loaded team, in arbitrary order.
    pub fn team_names(&self) -> Vec<String> {
        self.by_name.keys().cloned().collect()
    }
}

impl RosterProvider for StaticRosters {
    fn lookup(&self, team_name: &str) -> Option<&TeamRoster> {
        self.by_name.get(team_name)
    }
}

// ---------------------------------------------------------------------------
// Generation mode
// ---------------------------------------------------------------------------

/// Overall risk appetite. Controls pool composition, draw weights, and the
/// captain candidate filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Safe,
    Balanced,
    Risky,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Safe     => write!(f, "safe"),
            Mode::Balanced => write!(f, "balanced"),
            Mode::Risky    => write!(f, "risky"),
        }
    }
}

// ---------------------------------------------------------------------------
// Criteria flags
// ---------------------------------------------------------------------------

/// Structural and diversity criteria, one field per recognized flag.
///
/// Everything defaults on except `safe_core_captains`. Unknown flag names are
/// rejected by [`CriteriaFlags::from_map`] rather than silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaFlags {
    /// Alternate the (6,5)/(5,6) side split across slot indices.
    pub split_rotation: bool,
    /// Require at least 5 distinct C/VC pairs once 5 slots exist.
    pub min_distinct_pairs: bool,
    /// Prefer (captain, vice-captain) pairs not used earlier in the run.
    pub avoid_repeat_pair: bool,
    /// Risky mode wants at least 3 all-rounders per lineup (soft).
    pub risky_allrounder_core: bool,
    /// No captain may repeat more than 3 consecutive slots.
    pub captain_streak_guard: bool,
    /// No two lineups in the batch may share the same player set.
    pub unique_lineups: bool,
    /// Cap players from either side at `max_from_one_side`.
    pub side_balance_cap: bool,
    /// Role composition: 1-4 WK, 3-6 BAT, 1-4 AR, 3-6 BOWL.
    pub role_limits: bool,
    /// Force an all-rounder captain by slot index 4 if none yet. Wins over
    /// `safe_core_captains` when both apply to the same slot.
    pub early_allrounder_captain: bool,
    /// First 5 slots: deterministically captain the least-used Low-risk pick.
    pub safe_core_captains: bool,
}

impl Default for CriteriaFlags {
    fn default() -> Self {
        CriteriaFlags {
            split_rotation: true,
            min_distinct_pairs: true,
            avoid_repeat_pair: true,
            risky_allrounder_core: true,
            captain_streak_guard: true,
            unique_lineups: true,
            side_balance_cap: true,
            role_limits: true,
            early_allrounder_captain: true,
            safe_core_captains: false,
        }
    }
}

impl CriteriaFlags {
    /// Build flags from a name → bool mapping, starting from the defaults.
    /// Any unrecognized name fails with [`GenerationError::UnknownCriterion`].
    pub fn from_map(flags: &HashMap<String, bool>) -> Result<Self, GenerationError> {
        let mut cr = CriteriaFlags::default();
        for (name, &on) in flags {
            match name.as_str() {
                "split_rotation"           => cr.split_rotation = on,
                "min_distinct_pairs"       => cr.min_distinct_pairs = on,
                "avoid_repeat_pair"        => cr.avoid_repeat_pair = on,
                "risky_allrounder_core"    => cr.risky_allrounder_core = on,
                "captain_streak_guard"     => cr.captain_streak_guard = on,
                "unique_lineups"           => cr.unique_lineups = on,
                "side_balance_cap"         => cr.side_balance_cap = on,
                "role_limits"              => cr.role_limits = on,
                "early_allrounder_captain" => cr.early_allrounder_captain = on,
                "safe_core_captains"       => cr.safe_core_captains = on,
                other => return Err(GenerationError::UnknownCriterion(other.to_string())),
            }
        }
        Ok(cr)
    }
}

// ---------------------------------------------------------------------------
// Advanced options
// ---------------------------------------------------------------------------

/// Tuning knobs layered on top of the criteria flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvancedOptions {
    /// Player IDs force-included in every lineup (exposure-exempt).
    pub locked_ids: HashSet<String>,
    /// Player IDs removed from both pools entirely.
    pub excluded_ids: HashSet<String>,
    /// Ceiling on players from a single side (applies when `side_balance_cap`).
    pub max_from_one_side: usize,
    /// Exposure cap as a fraction of the batch, in (0, 1]. A player at
    /// `floor(team_count * exposure_fraction)` appearances is skipped during
    /// weighted draws.
    pub exposure_fraction: f64,
    /// Multiplier on every risk weight. Must be > 0.
    pub risk_intensity: f64,
    /// Symmetric multiplicative noise half-width; 0 disables perturbation.
    pub randomization_strength: f64,
    /// Appearance count under which differential injection boosts a player.
    pub min_differential_count: u32,
    /// Reject any captain already used as captain this run.
    pub unique_captain: bool,
    /// Reject any vice-captain already used as vice-captain this run.
    pub unique_vice_captain: bool,
    /// Scale down well-exposed players in the final 10 slots.
    pub differential_injection: bool,
}

impl Default for AdvancedOptions {
    fn default() -> Self {
        AdvancedOptions {
            locked_ids: HashSet::new(),
            excluded_ids: HashSet::new(),
            max_from_one_side: 7,
            exposure_fraction: 1.0,
            risk_intensity: 1.0,
            randomization_strength: 0.0,
            min_differential_count: 3,
            unique_captain: false,
            unique_vice_captain: false,
            differential_injection: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// One full generation request. Consumed by [`generate_lineups`] and never
/// persisted beyond the run.
///
/// [`generate_lineups`]: crate::lineup_engine::generate_lineups
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub team_a: String,
    pub team_b: String,
    pub mode: Mode,
    /// Number of lineups to produce, clamped to 1..=20.
    pub team_count: u32,
    pub criteria: CriteriaFlags,
    pub options: AdvancedOptions,
    /// `Some(seed)` makes the whole run reproducible; `None` uses entropy.
    pub rng_seed: Option<u64>,
}

impl GenerationRequest {
    /// Request with default criteria and options: 20 lineups, entropy seed.
    pub fn new(team_a: impl Into<String>, team_b: impl Into<String>, mode: Mode) -> Self {
        GenerationRequest {
            team_a: team_a.into(),
            team_b: team_b.into(),
            mode,
            team_count: 20,
            criteria: CriteriaFlags::default(),
            options: AdvancedOptions::default(),
            rng_seed: None,
        }
    }
}

/// One generated fantasy team: 11 players split across both sides plus a
/// captain and a distinct vice-captain.
///
/// `captain`/`vice_captain` are `None` only on a degraded slot whose
/// selection came up empty; the view adapter renders those as `"—"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lineup {
    pub players: Vec<Player>,
    pub captain: Option<Player>,
    pub vice_captain: Option<Player>,
    pub from_side_a: usize,
    pub from_side_b: usize,
    /// True when the slot exhausted its attempt budget and kept the last
    /// draw instead of a fully validated lineup.
    pub degraded: bool,
}

/// Output of one full generation run. Order is meaningful: earlier lineups
/// get special-cased captaincy rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub lineups: Vec<Lineup>,
    pub distinct_captain_count: usize,
    pub distinct_pair_count: usize,
}
