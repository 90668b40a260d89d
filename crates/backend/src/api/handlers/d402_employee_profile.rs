use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use contracts::dashboards::d402_employee_profile::{
    EmployeeProfileResponse, EmployeeSearchRequest, EmployeeSearchResponse,
};

use crate::dashboards::d402_employee_profile::service;
use crate::shared::state::AppState;

/// GET /api/d402/search?query=...
pub async fn search(
    State(state): State<AppState>,
    Query(request): Query<EmployeeSearchRequest>,
) -> Result<Json<EmployeeSearchResponse>, StatusCode> {
    let dataset = match state.snapshot() {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::warn!("D402 Profile: {}", e);
            return Err(StatusCode::CONFLICT);
        }
    };

    let response = service::search_employees(&dataset, &request.query);
    tracing::info!(
        "D402 Profile: search '{}' matched {} employees",
        request.query,
        response.matches.len()
    );
    Ok(Json(response))
}

/// GET /api/d402/profile/:matricule
pub async fn get_profile(
    State(state): State<AppState>,
    Path(matricule): Path<String>,
) -> Result<Json<EmployeeProfileResponse>, StatusCode> {
    let dataset = match state.snapshot() {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::warn!("D402 Profile: {}", e);
            return Err(StatusCode::CONFLICT);
        }
    };

    match service::get_employee_profile(&dataset, &matricule) {
        Some(profile) => Ok(Json(profile)),
        None => {
            tracing::info!("D402 Profile: no employee for matricule '{}'", matricule);
            Err(StatusCode::NOT_FOUND)
        }
    }
}
