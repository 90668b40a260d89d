use chrono::{Local, NaiveDate};

use contracts::dashboards::d402_employee_profile::{
    AttendanceSection, EmployeeMatch, EmployeeProfileResponse, EmployeeSearchResponse,
    EmployeeSummary, MissionSection,
};
use contracts::domain::hr_workbook::{SheetKind, MATRICULE};
use contracts::shared::table::{CellValue, Table, TableRow};

use crate::domain::hr_workbook::store::HrDataset;
use crate::shared::format::{
    format_ariary, format_table_for_display, parse_cell_date, NOT_AVAILABLE,
};
use crate::shared::indicators::compute::payroll;

/// Identity sheet columns consumed by the summary
const LAST_NAME_COLUMN: &str = "Nom";
const FIRST_NAME_COLUMN: &str = "Prénom";
const BIRTH_DATE_COLUMN: &str = "Date_Naissance";
const GENDER_COLUMN: &str = "Sexe";
const EDUCATION_COLUMN: &str = "Niveau_études";
const SKILLS_COLUMN: &str = "Compétences_clés";

/// Position sheet columns consumed by the summary
const DIRECTION_COLUMN: &str = "Direction";
const DEPARTMENT_COLUMN: &str = "Département";
const POSITION_COLUMN: &str = "Poste_Actuel";
const SENIORITY_COLUMN: &str = "Ancienneté";

/// Missions sheet status column and its "active" value
const MISSION_STATUS_COLUMN: &str = "Statut";
const MISSION_ACTIVE: &str = "En cours";

/// Attendance sheet leave-balance column
const REMAINING_LEAVE_COLUMN: &str = "Congé_restant";

/// Rows of the attendance sub-table surfaced on the profile
const ATTENDANCE_ROW_LIMIT: usize = 10;

/// Case-insensitive substring search over matricules and last names.
///
/// Every hit is returned; picking one is the caller's concern.
pub fn search_employees(dataset: &HrDataset, query: &str) -> EmployeeSearchResponse {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return EmployeeSearchResponse { matches: vec![] };
    }
    let needle = trimmed.to_lowercase();

    let identity = dataset.sheet(SheetKind::Identity);
    let matches = identity
        .rows
        .iter()
        .filter_map(|row| {
            let matricule = row.get(MATRICULE)?;
            if matricule.is_null() {
                return None;
            }
            let key = matricule.to_key_string();
            let name = row
                .get(LAST_NAME_COLUMN)
                .map(|v| v.to_display_string())
                .unwrap_or_default();
            let hit = key.to_lowercase().contains(&needle)
                || name.to_lowercase().contains(&needle);
            if !hit {
                return None;
            }
            Some(EmployeeMatch {
                matricule: key,
                full_name: format!("{} {}", name, field(row, FIRST_NAME_COLUMN)).trim().to_string(),
            })
        })
        .collect();

    EmployeeSearchResponse { matches }
}

/// Full dossier of one employee; `None` when the matricule is unknown to the
/// identity or position sheet.
pub fn get_employee_profile(
    dataset: &HrDataset,
    matricule: &str,
) -> Option<EmployeeProfileResponse> {
    let identity_rows = dataset.employee_slice(SheetKind::Identity, matricule)?;
    let position_rows = dataset.employee_slice(SheetKind::Position, matricule)?;
    let identity_row = identity_rows.rows.first()?;
    let position_row = position_rows.rows.first()?;

    let salary = dataset
        .employee_slice(SheetKind::Salary, matricule)
        .unwrap_or_default();
    let average_monthly_salary = payroll::average_monthly_payroll(&salary);

    let summary = EmployeeSummary {
        last_name: field(identity_row, LAST_NAME_COLUMN),
        first_name: field(identity_row, FIRST_NAME_COLUMN),
        age: derive_age(identity_row, Local::now().date_naive()),
        gender: field(identity_row, GENDER_COLUMN),
        direction: field(position_row, DIRECTION_COLUMN),
        department: field(position_row, DEPARTMENT_COLUMN),
        current_position: field(position_row, POSITION_COLUMN),
        seniority: field(position_row, SENIORITY_COLUMN),
        education_level: field(identity_row, EDUCATION_COLUMN),
        key_skills: field(identity_row, SKILLS_COLUMN),
        average_monthly_salary,
        average_monthly_salary_display: format_ariary(average_monthly_salary),
    };

    Some(EmployeeProfileResponse {
        matricule: matricule.to_string(),
        summary,
        evaluations: sub_table(dataset, SheetKind::Evaluations, matricule)
            .map(|t| format_table_for_display(&t)),
        trainings: sub_table(dataset, SheetKind::Trainings, matricule)
            .map(|t| format_table_for_display(&t)),
        missions: mission_section(dataset, matricule),
        attendance: attendance_section(dataset, matricule),
        history: sub_table(dataset, SheetKind::History, matricule)
            .map(|t| format_table_for_display(&t)),
    })
}

/// Summary field rendering: missing or null cells read "N/A".
fn field(row: &TableRow, column: &str) -> String {
    match row.get(column) {
        None | Some(CellValue::Null) => NOT_AVAILABLE.to_string(),
        Some(value) => value.to_display_string(),
    }
}

/// Whole years since the birth date, on the 365-day convention.
///
/// `None` when the birth date is missing or unparseable; a missing birth
/// date is surfaced as unknown, never as age 0.
fn derive_age(identity_row: &TableRow, today: NaiveDate) -> Option<u32> {
    let birth = identity_row
        .get(BIRTH_DATE_COLUMN)
        .and_then(parse_cell_date)?;
    let days = (today - birth).num_days();
    if days < 0 {
        return Some(0);
    }
    Some((days / 365) as u32)
}

/// Sub-table of one sheet, `None` when the employee has no rows in it.
fn sub_table(dataset: &HrDataset, kind: SheetKind, matricule: &str) -> Option<Table> {
    let slice = dataset.employee_slice(kind, matricule)?;
    if slice.is_empty() {
        return None;
    }
    Some(slice)
}

fn mission_section(dataset: &HrDataset, matricule: &str) -> Option<MissionSection> {
    let missions = sub_table(dataset, SheetKind::Missions, matricule)?;
    let active_count = missions
        .rows
        .iter()
        .filter(|row| {
            row.get(MISSION_STATUS_COLUMN)
                .map(|v| v.to_display_string() == MISSION_ACTIVE)
                .unwrap_or(false)
        })
        .count();
    Some(MissionSection {
        active_count,
        table: format_table_for_display(&missions),
    })
}

fn attendance_section(dataset: &HrDataset, matricule: &str) -> Option<AttendanceSection> {
    let attendance = sub_table(dataset, SheetKind::Attendance, matricule)?;
    let head = Table::new(
        attendance.columns.clone(),
        attendance
            .rows
            .iter()
            .take(ATTENDANCE_ROW_LIMIT)
            .cloned()
            .collect(),
    );
    let remaining_leave = if head.has_column(REMAINING_LEAVE_COLUMN) {
        Some(head.cell(0, REMAINING_LEAVE_COLUMN).to_display_string())
    } else {
        None
    };
    Some(AttendanceSection {
        remaining_leave,
        table: format_table_for_display(&head),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::hr_workbook::{SheetData, WorkbookData};
    use std::collections::HashMap;

    fn sheet(columns: &[&str], rows: Vec<Vec<(&str, CellValue)>>) -> SheetData {
        SheetData {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: rows
                .into_iter()
                .map(|pairs| {
                    pairs
                        .into_iter()
                        .map(|(k, v)| (k.to_string(), v))
                        .collect()
                })
                .collect(),
        }
    }

    fn dataset() -> HrDataset {
        let mut sheets = HashMap::new();
        sheets.insert(
            "Identité".to_string(),
            sheet(
                &["Matricule", "Nom", "Prénom", "Sexe", "Date_Naissance"],
                vec![
                    vec![
                        ("Matricule", CellValue::Integer(1001)),
                        ("Nom", CellValue::Text("Rakotondrabe".into())),
                        ("Prénom", CellValue::Text("Hery".into())),
                        ("Sexe", CellValue::Text("Homme".into())),
                        ("Date_Naissance", CellValue::Text("1990-06-15".into())),
                    ],
                    vec![
                        ("Matricule", CellValue::Integer(1002)),
                        ("Nom", CellValue::Text("Rasoanaivo".into())),
                        ("Prénom", CellValue::Text("Voahangy".into())),
                        ("Sexe", CellValue::Text("Femme".into())),
                        ("Date_Naissance", CellValue::Null),
                    ],
                ],
            ),
        );
        sheets.insert(
            "Poste_et_Carrière".to_string(),
            sheet(
                &["Matricule", "Direction", "Département", "Poste_Actuel", "Ancienneté"],
                vec![
                    vec![
                        ("Matricule", CellValue::Integer(1001)),
                        ("Direction", CellValue::Text("DGA Technique".into())),
                        ("Département", CellValue::Text("Direction laboratoire".into())),
                        ("Poste_Actuel", CellValue::Text("Géochimiste".into())),
                        ("Ancienneté", CellValue::Integer(8)),
                    ],
                    vec![
                        ("Matricule", CellValue::Integer(1002)),
                        ("Direction", CellValue::Text("DGA Management".into())),
                        ("Département", CellValue::Text("Département Paie".into())),
                        ("Poste_Actuel", CellValue::Text("Gestionnaire paie".into())),
                        ("Ancienneté", CellValue::Integer(3)),
                    ],
                ],
            ),
        );
        sheets.insert(
            "Salaire".to_string(),
            sheet(
                &["Matricule", "Mois", "Salaire_Brut"],
                vec![
                    vec![
                        ("Matricule", CellValue::Integer(1001)),
                        ("Mois", CellValue::Text("2025-01".into())),
                        ("Salaire_Brut", CellValue::Integer(100000)),
                    ],
                    vec![
                        ("Matricule", CellValue::Integer(1001)),
                        ("Mois", CellValue::Text("2025-02".into())),
                        ("Salaire_Brut", CellValue::Integer(150000)),
                    ],
                ],
            ),
        );
        sheets.insert(
            "Missions".to_string(),
            sheet(
                &["Matricule", "Objet", "Statut"],
                vec![
                    vec![
                        ("Matricule", CellValue::Integer(1001)),
                        ("Objet", CellValue::Text("Audit terrain".into())),
                        ("Statut", CellValue::Text("En cours".into())),
                    ],
                    vec![
                        ("Matricule", CellValue::Integer(1001)),
                        ("Objet", CellValue::Text("Forage côte Est".into())),
                        ("Statut", CellValue::Text("Terminée".into())),
                    ],
                ],
            ),
        );
        let attendance_rows: Vec<Vec<(&str, CellValue)>> = (0..12)
            .map(|i| {
                vec![
                    ("Matricule", CellValue::Integer(1001)),
                    ("Type", CellValue::Text("Présence".into())),
                    ("Congé_restant", CellValue::Integer(17 - i)),
                ]
            })
            .collect();
        sheets.insert(
            "Présences_Absences".to_string(),
            sheet(&["Matricule", "Type", "Congé_restant"], attendance_rows),
        );
        HrDataset::from_workbook(WorkbookData {
            file_name: "rh.xlsx".into(),
            sheets,
        })
    }

    #[test]
    fn test_search_by_matricule_and_name() {
        let data = dataset();
        let by_id = search_employees(&data, "1001");
        assert_eq!(by_id.matches.len(), 1);
        assert_eq!(by_id.matches[0].matricule, "1001");
        assert_eq!(by_id.matches[0].full_name, "Rakotondrabe Hery");

        // case-insensitive name fragment, multiple hits surfaced
        let by_name = search_employees(&data, "raso");
        assert_eq!(by_name.matches.len(), 1);
        assert_eq!(by_name.matches[0].matricule, "1002");

        let shared_prefix = search_employees(&data, "ra");
        assert_eq!(shared_prefix.matches.len(), 2);

        assert!(search_employees(&data, "").matches.is_empty());
        assert!(search_employees(&data, "zzz").matches.is_empty());
    }

    #[test]
    fn test_profile_summary_and_sections() {
        let data = dataset();
        let profile = get_employee_profile(&data, "1001").unwrap();
        assert_eq!(profile.summary.last_name, "Rakotondrabe");
        assert_eq!(profile.summary.direction, "DGA Technique");
        assert_eq!(profile.summary.seniority, "8");
        assert!(profile.summary.age.is_some());
        // 100000 + 150000 over two distinct months
        assert_eq!(profile.summary.average_monthly_salary, Some(125000.0));
        assert_eq!(
            profile.summary.average_monthly_salary_display,
            "125 000.00 Ar"
        );

        let missions = profile.missions.unwrap();
        assert_eq!(missions.active_count, 1);
        assert_eq!(missions.table.rows.len(), 2);

        let attendance = profile.attendance.unwrap();
        assert_eq!(attendance.table.rows.len(), ATTENDANCE_ROW_LIMIT);
        assert_eq!(attendance.remaining_leave.as_deref(), Some("17"));

        // sheets with no rows for this employee stay out of the dossier
        assert!(profile.evaluations.is_none());
        assert!(profile.trainings.is_none());
        assert!(profile.history.is_none());
    }

    #[test]
    fn test_profile_age_unknown_when_birth_date_missing() {
        let profile = get_employee_profile(&dataset(), "1002").unwrap();
        assert_eq!(profile.summary.age, None);
        // no salary rows for this employee
        assert_eq!(profile.summary.average_monthly_salary, None);
        assert_eq!(profile.summary.average_monthly_salary_display, "N/A");
    }

    #[test]
    fn test_profile_of_unknown_matricule_is_none() {
        assert!(get_employee_profile(&dataset(), "9999").is_none());
    }

    #[test]
    fn test_derive_age_convention() {
        let row: TableRow = HashMap::from([(
            BIRTH_DATE_COLUMN.to_string(),
            CellValue::Text("1990-06-15".into()),
        )]);
        let today = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        // 365-day years, mirroring the floor-division convention
        assert_eq!(derive_age(&row, today), Some(35));
        let unborn = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();
        assert_eq!(derive_age(&row, unborn), Some(0));
    }
}
