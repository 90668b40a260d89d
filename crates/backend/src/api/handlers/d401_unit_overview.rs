use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use contracts::dashboards::d401_unit_overview::{UnitOverviewRequest, UnitOverviewResponse};
use contracts::domain::org_units::{DepartmentsRequest, DepartmentsResponse};

use crate::dashboards::d401_unit_overview::service;
use crate::shared::state::AppState;

/// POST /api/d401/overview
pub async fn get_overview(
    State(state): State<AppState>,
    Json(request): Json<UnitOverviewRequest>,
) -> Result<Json<UnitOverviewResponse>, StatusCode> {
    let dataset = match state.snapshot() {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::warn!("D401 Unit: {}", e);
            return Err(StatusCode::CONFLICT);
        }
    };

    let response = service::get_unit_overview(&dataset, &request);
    tracing::info!(
        "D401 Unit: direction={:?}, {} departments selected, {} employees in scope",
        request.direction,
        request.departments.len(),
        response.employee_count
    );
    Ok(Json(response))
}

/// GET /api/d401/departments?direction=...
pub async fn get_departments(
    State(state): State<AppState>,
    Query(request): Query<DepartmentsRequest>,
) -> Result<Json<DepartmentsResponse>, StatusCode> {
    let dataset = match state.snapshot() {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::warn!("D401 Unit: {}", e);
            return Err(StatusCode::CONFLICT);
        }
    };

    let departments = service::selectable_departments(&dataset, request.direction.as_deref());
    Ok(Json(DepartmentsResponse { departments }))
}
