use serde::{Deserialize, Serialize};

use crate::shared::reporting::{CategoryCount, MonthlyPayrollPoint};

/// Response for the company-wide dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalOverviewResponse {
    /// Inner-join headcount of Identité and Poste_et_Carrière
    pub total_employees: usize,
    /// Departures over headcount, percent (0 when headcount is 0)
    pub turnover_rate: f64,
    /// Mean gross salary; `None` when the salary sheet is empty
    pub average_gross_salary: Option<f64>,
    /// `average_gross_salary` rendered in Ariary ("N/A" when unavailable)
    pub average_gross_salary_display: String,
    /// Non-presence attendance rows over all rows, percent
    pub absenteeism_rate: f64,
    /// Women over headcount, percent
    pub gender_diversity_rate: f64,
    /// Gross payroll per month, in millions of Ariary
    pub monthly_payroll: Vec<MonthlyPayrollPoint>,
    /// All-time gross payroll; `None` when the salary sheet is empty
    pub total_payroll: Option<f64>,
    /// `total_payroll` rendered in Ariary
    pub total_payroll_display: String,
    /// Headcount per value of `Sexe`
    pub gender_distribution: Vec<CategoryCount>,
    /// Departures per value of `Motif`
    pub turnover_reasons: Vec<CategoryCount>,
}
