use contracts::dashboards::d400_global_overview::GlobalOverviewResponse;
use contracts::domain::hr_workbook::SheetKind;
use contracts::shared::reporting::MonthlyPayrollPoint;
use contracts::shared::table::Table;

use crate::domain::hr_workbook::store::HrDataset;
use crate::shared::format::format_ariary;
use crate::shared::indicators::compute::{payroll, workforce};

/// Scales raw monthly sums to millions for the chart series.
pub fn payroll_series(salary: &Table) -> Vec<MonthlyPayrollPoint> {
    payroll::monthly_payroll_totals(salary)
        .into_iter()
        .map(|(month, total)| MonthlyPayrollPoint {
            month,
            total_millions: total / 1_000_000.0,
        })
        .collect()
}

/// Company-wide dashboard over the full snapshot.
pub fn get_global_overview(dataset: &HrDataset) -> GlobalOverviewResponse {
    let identity = dataset.sheet(SheetKind::Identity);
    let salary = dataset.sheet(SheetKind::Salary);
    let attendance = dataset.sheet(SheetKind::Attendance);
    let turnover = dataset.sheet(SheetKind::Turnover);

    let total_employees = dataset.total_employees();
    let average_gross_salary = payroll::average_gross_salary(salary);
    let total_payroll = payroll::total_gross_salary(salary);

    GlobalOverviewResponse {
        total_employees,
        turnover_rate: workforce::turnover_rate(turnover, total_employees),
        average_gross_salary,
        average_gross_salary_display: format_ariary(average_gross_salary),
        absenteeism_rate: workforce::absenteeism_rate(attendance),
        gender_diversity_rate: workforce::gender_diversity_rate(identity, total_employees),
        monthly_payroll: payroll_series(salary),
        total_payroll,
        total_payroll_display: format_ariary(total_payroll),
        gender_distribution: workforce::value_counts(identity, workforce::GENDER_COLUMN),
        turnover_reasons: workforce::value_counts(turnover, workforce::LEAVE_REASON_COLUMN),
    }
}
