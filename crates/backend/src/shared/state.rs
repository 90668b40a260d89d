use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::domain::hr_workbook::store::HrDataset;

/// Errors crossing the snapshot boundary
#[derive(Debug, Error)]
pub enum WorkbookError {
    /// Queries before the first successful load hit this; every other data
    /// irregularity degrades inside the engine instead of erroring.
    #[error("no workbook snapshot has been loaded")]
    NotLoaded,
}

/// Process-wide application state handed to every handler.
///
/// The snapshot is immutable once installed; a new load replaces the whole
/// `Arc` and in-flight queries keep reading the snapshot they started with.
#[derive(Clone, Default)]
pub struct AppState {
    snapshot: Arc<RwLock<Option<Arc<HrDataset>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a freshly built snapshot, replacing any previous one.
    pub fn install(&self, dataset: HrDataset) -> Arc<HrDataset> {
        let dataset = Arc::new(dataset);
        let mut guard = self.snapshot.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(Arc::clone(&dataset));
        dataset
    }

    /// Current snapshot, or `WorkbookError::NotLoaded` before the first load.
    pub fn snapshot(&self) -> Result<Arc<HrDataset>, WorkbookError> {
        self.try_snapshot().ok_or(WorkbookError::NotLoaded)
    }

    /// Current snapshot if one has been installed.
    pub fn try_snapshot(&self) -> Option<Arc<HrDataset>> {
        let guard = self.snapshot.read().unwrap_or_else(|e| e.into_inner());
        guard.as_ref().map(Arc::clone)
    }
}
