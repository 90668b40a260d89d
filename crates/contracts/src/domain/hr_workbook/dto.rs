use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::shared::table::TableRow;

/// Join-key column shared by every employee-related sheet
pub const MATRICULE: &str = "Matricule";

/// The fixed sheet vocabulary of the HR workbook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SheetKind {
    Identity,
    Position,
    Salary,
    History,
    Attendance,
    Missions,
    Evaluations,
    Trainings,
    Turnover,
}

impl SheetKind {
    pub const ALL: [SheetKind; 9] = [
        SheetKind::Identity,
        SheetKind::Position,
        SheetKind::Salary,
        SheetKind::History,
        SheetKind::Attendance,
        SheetKind::Missions,
        SheetKind::Evaluations,
        SheetKind::Trainings,
        SheetKind::Turnover,
    ];

    /// Sheet name as it appears in the source workbook.
    pub fn sheet_name(&self) -> &'static str {
        match self {
            SheetKind::Identity => "Identité",
            SheetKind::Position => "Poste_et_Carrière",
            SheetKind::Salary => "Salaire",
            SheetKind::History => "Historique",
            SheetKind::Attendance => "Présences_Absences",
            SheetKind::Missions => "Missions",
            SheetKind::Evaluations => "Évaluations",
            SheetKind::Trainings => "Formations",
            SheetKind::Turnover => "Turnover",
        }
    }

    /// Reverse lookup from the workbook sheet name; unknown sheets are ignored
    /// by the loader rather than rejected.
    pub fn from_sheet_name(name: &str) -> Option<SheetKind> {
        Self::ALL.iter().copied().find(|k| k.sheet_name() == name)
    }
}

/// One parsed sheet as shipped by the external loader
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetData {
    /// Column names in source order
    pub columns: Vec<String>,
    /// Rows as column-name -> value maps
    pub rows: Vec<TableRow>,
}

/// Parsed workbook payload for the load endpoint
///
/// The collaborator that owns file upload and spreadsheet parsing ships the
/// sheets already split into rows; raw workbook bytes never reach the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkbookData {
    /// Original workbook file name, kept for the status view
    pub file_name: String,
    /// Sheets keyed by their workbook name
    pub sheets: HashMap<String, SheetData>,
}

/// Result of a successful workbook load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadResult {
    /// Identifier of the freshly installed snapshot
    pub snapshot_id: String,
    /// Inner-join headcount of Identité and Poste_et_Carrière
    pub total_employees: usize,
    /// Row count per recognized sheet
    pub sheet_counts: Vec<SheetCount>,
}

/// Row count of one recognized sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetCount {
    pub sheet: String,
    pub rows: usize,
}

/// Current snapshot status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkbookStatus {
    pub loaded: bool,
    pub snapshot_id: Option<String>,
    pub file_name: Option<String>,
    /// RFC 3339 load timestamp
    pub loaded_at: Option<String>,
    pub total_employees: usize,
    pub sheet_counts: Vec<SheetCount>,
}
