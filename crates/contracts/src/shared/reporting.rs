use serde::{Deserialize, Serialize};

/// Count of rows sharing one value of a column (gender split, leave reasons)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// One point of the monthly payroll series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPayrollPoint {
    /// Month key as it appears in the salary sheet
    pub month: String,
    /// Gross payroll for the month, scaled to millions of Ariary
    pub total_millions: f64,
}
