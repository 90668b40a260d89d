use axum::{extract::State, http::StatusCode, Json};
use contracts::domain::hr_workbook::{LoadResult, WorkbookData, WorkbookStatus};

use crate::domain::hr_workbook::service;
use crate::shared::state::AppState;

/// POST /api/workbook/load
pub async fn load(
    State(state): State<AppState>,
    Json(workbook): Json<WorkbookData>,
) -> Result<Json<LoadResult>, StatusCode> {
    tracing::info!(
        "Workbook: loading '{}' with {} sheets",
        workbook.file_name,
        workbook.sheets.len()
    );

    match service::load_workbook(&state, workbook) {
        Ok(result) => {
            tracing::info!(
                "Workbook: snapshot {} ready, {} employees",
                result.snapshot_id,
                result.total_employees
            );
            Ok(Json(result))
        }
        Err(e) => {
            tracing::error!("Workbook: load failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/workbook/status
pub async fn status(State(state): State<AppState>) -> Json<WorkbookStatus> {
    Json(service::status(&state))
}
