use contracts::dashboards::d401_unit_overview::{UnitOverviewRequest, UnitOverviewResponse};
use contracts::domain::hr_workbook::SheetKind;
use contracts::shared::table::Table;

use crate::dashboards::d400_global_overview::service::payroll_series;
use crate::domain::hr_workbook::store::HrDataset;
use crate::domain::org_units::hierarchy::{self, DEPARTMENT_COLUMN, DIRECTION_COLUMN};
use crate::shared::format::format_ariary;
use crate::shared::indicators::compute::{payroll, workforce};

/// Position rows matching the direction / department selection.
fn filter_position(position: &Table, request: &UnitOverviewRequest) -> Table {
    let rows = position
        .rows
        .iter()
        .filter(|row| {
            if let Some(direction) = &request.direction {
                let cell = row.get(DIRECTION_COLUMN);
                if cell.map(|v| v.to_display_string()) != Some(direction.clone()) {
                    return false;
                }
            }
            if !request.departments.is_empty() {
                let department = row
                    .get(DEPARTMENT_COLUMN)
                    .map(|v| v.to_display_string())
                    .unwrap_or_default();
                if !request.departments.contains(&department) {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect();
    Table::new(position.columns.clone(), rows)
}

/// Departments selectable for the given direction choice.
pub fn selectable_departments(dataset: &HrDataset, direction: Option<&str>) -> Vec<String> {
    hierarchy::selectable_departments(direction, dataset.sheet(SheetKind::Position))
}

/// Dashboard scoped to one direction and an optional department set.
///
/// The selection is resolved to a matricule set on the position sheet; every
/// other sheet is then restricted by matricule membership before the
/// indicators run.
pub fn get_unit_overview(
    dataset: &HrDataset,
    request: &UnitOverviewRequest,
) -> UnitOverviewResponse {
    let filtered_position = filter_position(dataset.sheet(SheetKind::Position), request);
    let matricules = workforce::matricule_set(&filtered_position);

    let identity = workforce::filter_by_matricules(dataset.sheet(SheetKind::Identity), &matricules);
    let salary = workforce::filter_by_matricules(dataset.sheet(SheetKind::Salary), &matricules);
    let attendance =
        workforce::filter_by_matricules(dataset.sheet(SheetKind::Attendance), &matricules);
    let turnover = workforce::filter_by_matricules(dataset.sheet(SheetKind::Turnover), &matricules);

    let total_employees = workforce::total_employees(&identity, &filtered_position);
    let average_salary = payroll::average_gross_salary(&salary);
    let total_payroll = payroll::total_gross_salary(&salary);
    let average_monthly_payroll = payroll::average_monthly_payroll(&salary);

    UnitOverviewResponse {
        employee_count: filtered_position.len(),
        total_employees,
        turnover_rate: workforce::turnover_rate(&turnover, total_employees),
        absenteeism_rate: workforce::absenteeism_rate(&attendance),
        gender_diversity_rate: workforce::gender_diversity_rate(&identity, total_employees),
        average_salary,
        average_salary_display: format_ariary(average_salary),
        total_payroll,
        total_payroll_display: format_ariary(total_payroll),
        average_monthly_payroll,
        average_monthly_payroll_display: format_ariary(average_monthly_payroll),
        monthly_payroll: payroll_series(&salary),
        gender_distribution: workforce::value_counts(&identity, workforce::GENDER_COLUMN),
        turnover_reasons: workforce::value_counts(&turnover, workforce::LEAVE_REASON_COLUMN),
    }
}
