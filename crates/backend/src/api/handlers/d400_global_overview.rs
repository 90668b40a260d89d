use axum::{extract::State, http::StatusCode, Json};
use contracts::dashboards::d400_global_overview::GlobalOverviewResponse;

use crate::dashboards::d400_global_overview::service;
use crate::shared::state::AppState;

/// GET /api/d400/overview
pub async fn get_overview(
    State(state): State<AppState>,
) -> Result<Json<GlobalOverviewResponse>, StatusCode> {
    let dataset = match state.snapshot() {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::warn!("D400 Overview: {}", e);
            return Err(StatusCode::CONFLICT);
        }
    };

    let response = service::get_global_overview(&dataset);
    tracing::info!(
        "D400 Overview: {} employees, {} payroll months",
        response.total_employees,
        response.monthly_payroll.len()
    );
    Ok(Json(response))
}
