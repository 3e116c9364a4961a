//! Crew routes.

use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};

use crate::{ApiResult, AppState};
use cinetrack_db::CrewRepository;

/// Creates the crew routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/crew", get(list_crew))
}

/// GET `/crew` - Every crew member.
async fn list_crew(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let crew = CrewRepository::new(state.db.clone()).list_all().await?;
    Ok(Json(json!({
        "count": crew.len(),
        "crew": crew
    })))
}
