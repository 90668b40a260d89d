use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Local};
use once_cell::sync::Lazy;
use uuid::Uuid;

use contracts::domain::hr_workbook::{SheetCount, SheetKind, WorkbookData, MATRICULE};
use contracts::shared::table::Table;

use crate::shared::indicators::compute::workforce;

static EMPTY_TABLE: Lazy<Table> = Lazy::new(Table::default);

/// One loaded workbook snapshot.
///
/// Immutable after construction; queries read it through a shared reference
/// and a fresh load builds a whole new instance.
pub struct HrDataset {
    snapshot_id: Uuid,
    file_name: String,
    loaded_at: DateTime<Local>,
    sheets: HashMap<SheetKind, Table>,
    total_employees: usize,
}

impl HrDataset {
    /// Builds a snapshot from the parsed workbook shipped by the loader.
    ///
    /// Sheets outside the fixed vocabulary are ignored; recognized sheets
    /// that are absent behave as empty tables.
    pub fn from_workbook(workbook: WorkbookData) -> Self {
        let mut sheets: HashMap<SheetKind, Table> = HashMap::new();
        for (name, sheet) in workbook.sheets {
            match SheetKind::from_sheet_name(&name) {
                Some(kind) => {
                    sheets.insert(kind, Table::new(sheet.columns, sheet.rows));
                }
                None => {
                    tracing::warn!("Workbook: ignoring unrecognized sheet '{}'", name);
                }
            }
        }

        let total_employees = workforce::total_employees(
            sheets.get(&SheetKind::Identity).unwrap_or(&EMPTY_TABLE),
            sheets.get(&SheetKind::Position).unwrap_or(&EMPTY_TABLE),
        );

        Self {
            snapshot_id: Uuid::new_v4(),
            file_name: workbook.file_name,
            loaded_at: Local::now(),
            sheets,
            total_employees,
        }
    }

    pub fn snapshot_id(&self) -> Uuid {
        self.snapshot_id
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn loaded_at(&self) -> DateTime<Local> {
        self.loaded_at
    }

    /// Inner-join headcount of Identité and Poste_et_Carrière, fixed at load.
    pub fn total_employees(&self) -> usize {
        self.total_employees
    }

    /// The sheet of the given kind; absent sheets read as empty tables.
    pub fn sheet(&self, kind: SheetKind) -> &Table {
        self.sheets.get(&kind).unwrap_or(&EMPTY_TABLE)
    }

    /// Row counts of the recognized sheets, in vocabulary order.
    pub fn sheet_counts(&self) -> Vec<SheetCount> {
        SheetKind::ALL
            .iter()
            .filter(|kind| self.sheets.contains_key(*kind))
            .map(|kind| SheetCount {
                sheet: kind.sheet_name().to_string(),
                rows: self.sheet(*kind).len(),
            })
            .collect()
    }

    /// The rows of one sheet belonging to an employee.
    ///
    /// `None` when the sheet has no matricule column at all; such sheets do
    /// not take part in per-employee resolution.
    pub fn employee_slice(&self, kind: SheetKind, matricule: &str) -> Option<Table> {
        let table = self.sheet(kind);
        if !table.has_column(MATRICULE) {
            return None;
        }
        let keys: HashSet<String> = [matricule.to_string()].into_iter().collect();
        Some(workforce::filter_by_matricules(table, &keys))
    }
}
