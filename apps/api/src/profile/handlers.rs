use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::profile::format::filter_skills;
use crate::profile::{project, ProfileView};
use crate::render::render_profile_markdown;
use crate::state::AppState;
use crate::store::CandidateId;

#[derive(Deserialize)]
pub struct SkillQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
pub struct SkillMatches {
    pub total: usize,
    pub matched: usize,
    pub skills: Vec<String>,
}

/// Loads and projects one candidate. Store misses and malformed records both
/// end up as 404; the distinction only shows in the logs.
async fn load_profile(state: &AppState, raw_id: &str) -> Result<ProfileView, AppError> {
    let id: CandidateId = raw_id.parse()?;

    let record = state.store.load(id).await.map_err(|e| {
        info!("Candidate lookup miss via {} store: {e}", state.store.backend());
        e
    })?;

    project(&record).map_err(|e| {
        warn!("Candidate {id} record is malformed: {e}");
        AppError::candidate_not_found(id)
    })
}

/// GET /api/v1/candidates/:id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ProfileView>, AppError> {
    let view = load_profile(&state, &raw_id).await?;
    Ok(Json(view))
}

/// GET /api/v1/candidates/:id/skills?q=term
pub async fn handle_filter_skills(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Query(params): Query<SkillQuery>,
) -> Result<Json<SkillMatches>, AppError> {
    let view = load_profile(&state, &raw_id).await?;
    let skills = filter_skills(&view.person.skills, &params.q);
    Ok(Json(SkillMatches {
        total: view.person.skills.len(),
        matched: skills.len(),
        skills,
    }))
}

/// GET /api/v1/candidates/:id/markdown
pub async fn handle_profile_markdown(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let view = load_profile(&state, &raw_id).await?;
    Ok((
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        render_profile_markdown(&view),
    ))
}
