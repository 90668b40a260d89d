use anyhow::Result;
use contracts::domain::hr_workbook::{LoadResult, WorkbookData, WorkbookStatus};

use super::store::HrDataset;
use crate::shared::state::AppState;

/// Builds a snapshot from the parsed workbook and installs it.
///
/// The swap is atomic: queries either see the previous snapshot or the new
/// one, never a half-loaded state.
pub fn load_workbook(state: &AppState, workbook: WorkbookData) -> Result<LoadResult> {
    let dataset = HrDataset::from_workbook(workbook);
    let installed = state.install(dataset);

    tracing::info!(
        "Workbook: installed snapshot {} from '{}' ({} employees)",
        installed.snapshot_id(),
        installed.file_name(),
        installed.total_employees()
    );

    Ok(LoadResult {
        snapshot_id: installed.snapshot_id().to_string(),
        total_employees: installed.total_employees(),
        sheet_counts: installed.sheet_counts(),
    })
}

/// Status of the current snapshot; well-defined before the first load.
pub fn status(state: &AppState) -> WorkbookStatus {
    match state.try_snapshot() {
        Some(dataset) => WorkbookStatus {
            loaded: true,
            snapshot_id: Some(dataset.snapshot_id().to_string()),
            file_name: Some(dataset.file_name().to_string()),
            loaded_at: Some(dataset.loaded_at().to_rfc3339()),
            total_employees: dataset.total_employees(),
            sheet_counts: dataset.sheet_counts(),
        },
        None => WorkbookStatus {
            loaded: false,
            snapshot_id: None,
            file_name: None,
            loaded_at: None,
            total_employees: 0,
            sheet_counts: Vec::new(),
        },
    }
}
