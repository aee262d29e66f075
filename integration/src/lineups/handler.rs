use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use fantasy_xi_gen::{
    generate_lineups, to_results_view, AdvancedOptions, CriteriaFlags, GenerationError,
    GenerationRequest, Mode, StaticRosters,
};
use serde::Deserialize;
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Shared state: rosters loaded once at startup
// ---------------------------------------------------------------------------

pub struct AppState {
    pub rosters: StaticRosters,
    pub team_names: Vec<String>,
}

pub type SharedState = Arc<AppState>;

pub fn new_state(json: &str) -> Result<SharedState, GenerationError> {
    let rosters = StaticRosters::from_json(json)?;
    let mut team_names = rosters.team_names();
    team_names.sort_unstable();
    Ok(Arc::new(AppState { rosters, team_names }))
}

// ---------------------------------------------------------------------------
// Body types
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct GenerateBody {
    pub team1: String,
    pub team2: String,
    pub mode: String,
    #[serde(default = "default_team_count")]
    pub team_count: u32,
    #[serde(default)]
    pub criteria: HashMap<String, bool>,
    #[serde(default)]
    pub locked_ids: Vec<String>,
    #[serde(default)]
    pub excluded_ids: Vec<String>,
    pub venue: Option<String>,
    #[serde(default)]
    pub unlocked: bool,
    pub rng_seed: Option<u64>,
}

fn default_team_count() -> u32 {
    20
}

fn parse_mode(s: &str) -> Option<Mode> {
    match s {
        "safe"     => Some(Mode::Safe),
        "balanced" => Some(Mode::Balanced),
        "risky"    => Some(Mode::Risky),
        _ => None,
    }
}

fn bad_request(msg: String) -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": msg })))
}

// ---------------------------------------------------------------------------
// GET /api/teams
// ---------------------------------------------------------------------------

pub async fn list_teams(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({ "teams": state.team_names }))
}

// ---------------------------------------------------------------------------
// POST /api/lineups/generate
// ---------------------------------------------------------------------------

pub async fn generate(
    State(state): State<SharedState>,
    Json(body): Json<GenerateBody>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let mode = parse_mode(&body.mode)
        .ok_or_else(|| bad_request(format!("Unknown mode: {}", body.mode)))?;

    let criteria = CriteriaFlags::from_map(&body.criteria)
        .map_err(|e| bad_request(e.to_string()))?;

    let mut options = AdvancedOptions::default();
    options.locked_ids = body.locked_ids.into_iter().collect();
    options.excluded_ids = body.excluded_ids.into_iter().collect();

    let request = GenerationRequest {
        team_a: body.team1.clone(),
        team_b: body.team2.clone(),
        mode,
        team_count: body.team_count,
        criteria,
        options,
        rng_seed: body.rng_seed,
    };

    let result = generate_lineups(&state.rosters, &request).map_err(|e| match e {
        GenerationError::TeamNotFound(_) => {
            (StatusCode::NOT_FOUND, Json(json!({ "error": e.to_string() })))
        }
        GenerationError::InsufficientPool { .. } => {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "error": e.to_string() })))
        }
        other => bad_request(other.to_string()),
    })?;

    let view = to_results_view(
        &result,
        &body.team1,
        &body.team2,
        mode,
        body.venue.as_deref(),
        body.unlocked,
    );
    Ok(Json(view))
}
