use axum::{routing::{get, post}, Router};
use super::handler::{generate, list_teams, SharedState};

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/teams",            get(list_teams))
        .route("/api/lineups/generate", post(generate))
        .with_state(state)
}
