use serde::{Deserialize, Serialize};

use crate::shared::table::FormattedTable;

/// Free-text employee search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSearchRequest {
    pub query: String,
}

/// One search hit, surfaced for caller-side disambiguation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeMatch {
    pub matricule: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSearchResponse {
    pub matches: Vec<EmployeeMatch>,
}

/// Identity and position summary of one employee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub last_name: String,
    pub first_name: String,
    /// `None` when the birth date is missing or unparseable
    pub age: Option<u32>,
    pub gender: String,
    pub direction: String,
    pub department: String,
    pub current_position: String,
    /// Years in the company, as recorded in the position sheet
    pub seniority: String,
    pub education_level: String,
    pub key_skills: String,
    /// Employee payroll over their distinct salary months
    pub average_monthly_salary: Option<f64>,
    pub average_monthly_salary_display: String,
}

/// Missions sub-table with its derived activity count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionSection {
    /// Rows with `Statut` = "En cours"
    pub active_count: usize,
    pub table: FormattedTable,
}

/// Attendance sub-table restricted to the ten most recent rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceSection {
    /// `Congé_restant` of the first row, when the column exists
    pub remaining_leave: Option<String>,
    pub table: FormattedTable,
}

/// Full per-employee dossier
///
/// Sub-tables are `None` when the employee has no rows in the corresponding
/// sheet (or the sheet was not part of the workbook).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeProfileResponse {
    pub matricule: String,
    pub summary: EmployeeSummary,
    pub evaluations: Option<FormattedTable>,
    pub trainings: Option<FormattedTable>,
    pub missions: Option<MissionSection>,
    pub attendance: Option<AttendanceSection>,
    pub history: Option<FormattedTable>,
}
