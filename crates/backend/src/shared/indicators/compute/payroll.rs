//! Payroll indicators over the salary sheet.

use std::collections::HashMap;

use contracts::shared::table::Table;

use crate::shared::format::{parse_text_date, FRENCH_MONTHS};

/// Gross salary column of the salary sheet
pub const GROSS_SALARY_COLUMN: &str = "Salaire_Brut";
/// Month column of the salary sheet
pub const MONTH_COLUMN: &str = "Mois";

/// Numeric-coerced gross salary values, non-numeric rows skipped.
fn gross_salaries(salary: &Table) -> Vec<f64> {
    salary
        .rows
        .iter()
        .filter_map(|row| row.get(GROSS_SALARY_COLUMN))
        .filter_map(|v| v.as_number())
        .collect()
}

/// Mean gross salary; `None` when the sheet holds no numeric salary.
pub fn average_gross_salary(salary: &Table) -> Option<f64> {
    let values = gross_salaries(salary);
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Summed gross payroll; `None` on an empty sheet.
pub fn total_gross_salary(salary: &Table) -> Option<f64> {
    if salary.is_empty() {
        return None;
    }
    Some(gross_salaries(salary).iter().sum())
}

/// Distinct non-null month keys of the salary sheet.
fn distinct_months(salary: &Table) -> Vec<String> {
    let mut months: Vec<String> = salary
        .rows
        .iter()
        .filter_map(|row| row.get(MONTH_COLUMN))
        .filter(|v| !v.is_null())
        .map(|v| v.to_display_string())
        .collect();
    months.sort();
    months.dedup();
    months
}

/// Payroll over distinct salary months; `None` when no month key exists.
pub fn average_monthly_payroll(salary: &Table) -> Option<f64> {
    let month_count = distinct_months(salary).len();
    if month_count == 0 {
        return None;
    }
    Some(gross_salaries(salary).iter().sum::<f64>() / month_count as f64)
}

/// Chronological sort key of a month representation, when it has one.
///
/// Accepts `YYYY-MM`, the full textual date representations, and bare French
/// month names. Returns `None` for anything else.
fn month_sort_key(key: &str) -> Option<(i32, u32, u32)> {
    let trimmed = key.trim();
    if let Some((year, month)) = trimmed.split_once('-') {
        if let (Ok(y), Ok(m)) = (year.parse::<i32>(), month.parse::<u32>()) {
            if year.len() == 4 && (1..=12).contains(&m) {
                return Some((y, m, 0));
            }
        }
    }
    if let Some(date) = parse_text_date(trimmed) {
        use chrono::Datelike;
        return Some((date.year(), date.month(), date.day()));
    }
    let lower = trimmed.to_lowercase();
    FRENCH_MONTHS
        .iter()
        .position(|m| *m == lower)
        .map(|idx| (0, idx as u32 + 1, 0))
}

/// Gross payroll summed per month key.
///
/// Ordered chronologically when every key has a natural chronological
/// ordering, ascending by string otherwise. Values are raw Ariary sums;
/// million-scaling for display belongs to the caller.
pub fn monthly_payroll_totals(salary: &Table) -> Vec<(String, f64)> {
    let mut totals: HashMap<String, f64> = HashMap::new();
    for row in &salary.rows {
        let month = match row.get(MONTH_COLUMN) {
            Some(v) if !v.is_null() => v.to_display_string(),
            _ => continue,
        };
        let amount = row
            .get(GROSS_SALARY_COLUMN)
            .and_then(|v| v.as_number())
            .unwrap_or(0.0);
        *totals.entry(month).or_insert(0.0) += amount;
    }

    let mut result: Vec<(String, f64)> = totals.into_iter().collect();
    let chronological: Option<Vec<(i32, u32, u32)>> = result
        .iter()
        .map(|(month, _)| month_sort_key(month))
        .collect();
    match chronological {
        Some(_) => result.sort_by_key(|(month, _)| month_sort_key(month)),
        None => result.sort_by(|a, b| a.0.cmp(&b.0)),
    }
    result
}
