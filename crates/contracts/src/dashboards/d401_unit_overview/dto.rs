use serde::{Deserialize, Serialize};

use crate::shared::reporting::{CategoryCount, MonthlyPayrollPoint};

/// Scope selection for the per-direction dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitOverviewRequest {
    /// `None` means "all directions"
    #[serde(default)]
    pub direction: Option<String>,
    /// Department restriction; empty means "no restriction"
    #[serde(default)]
    pub departments: Vec<String>,
}

/// Response for the per-direction dashboard
///
/// Carries the global metric set recomputed at filtered scope, plus the
/// per-month payroll average that only makes sense there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitOverviewResponse {
    /// Position rows remaining after the filter
    pub employee_count: usize,
    /// Inner-join headcount at filtered scope (denominator of the rates)
    pub total_employees: usize,
    /// Departures over filtered headcount, percent
    pub turnover_rate: f64,
    /// Non-presence rows over filtered attendance rows, percent
    pub absenteeism_rate: f64,
    /// Women over filtered headcount, percent
    pub gender_diversity_rate: f64,
    /// Mean gross salary at filtered scope
    pub average_salary: Option<f64>,
    pub average_salary_display: String,
    /// Summed gross payroll at filtered scope
    pub total_payroll: Option<f64>,
    pub total_payroll_display: String,
    /// Payroll over distinct salary months at filtered scope
    pub average_monthly_payroll: Option<f64>,
    pub average_monthly_payroll_display: String,
    /// Gross payroll per month at filtered scope, in millions of Ariary
    pub monthly_payroll: Vec<MonthlyPayrollPoint>,
    /// Headcount per value of `Sexe` at filtered scope
    pub gender_distribution: Vec<CategoryCount>,
    /// Departures per value of `Motif` at filtered scope
    pub turnover_reasons: Vec<CategoryCount>,
}
