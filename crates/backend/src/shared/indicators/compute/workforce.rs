//! Headcount, turnover, attendance and diversity indicators.
//!
//! Every function is a pure computation over table slices; the only join
//! mechanism in the engine is matricule-set membership.

use std::collections::{HashMap, HashSet};

use contracts::domain::hr_workbook::MATRICULE;
use contracts::shared::reporting::CategoryCount;
use contracts::shared::table::Table;

/// `Sexe` column of the identity sheet
pub const GENDER_COLUMN: &str = "Sexe";
/// `Sexe` value counted by the diversity indicator
pub const FEMALE: &str = "Femme";
/// `Type` column of the attendance sheet
pub const ATTENDANCE_TYPE_COLUMN: &str = "Type";
/// `Type` value meaning the employee was present
pub const PRESENT: &str = "Présence";
/// `Motif` column of the turnover sheet
pub const LEAVE_REASON_COLUMN: &str = "Motif";

/// Canonical matricule keys present in a table, nulls skipped.
pub fn matricule_set(table: &Table) -> HashSet<String> {
    table
        .rows
        .iter()
        .filter_map(|row| row.get(MATRICULE))
        .filter(|v| !v.is_null())
        .map(|v| v.to_key_string())
        .collect()
}

/// Rows whose matricule belongs to `keys`; column list is preserved.
pub fn filter_by_matricules(table: &Table, keys: &HashSet<String>) -> Table {
    let rows = table
        .rows
        .iter()
        .filter(|row| {
            row.get(MATRICULE)
                .map(|v| keys.contains(&v.to_key_string()))
                .unwrap_or(false)
        })
        .cloned()
        .collect();
    Table::new(table.columns.clone(), rows)
}

/// Inner-join headcount of the identity and position sheets.
///
/// 0 whenever either sheet is empty.
pub fn total_employees(identity: &Table, position: &Table) -> usize {
    if identity.is_empty() || position.is_empty() {
        return 0;
    }
    let identity_keys = matricule_set(identity);
    let position_keys = matricule_set(position);
    identity_keys.intersection(&position_keys).count()
}

/// Departures over headcount, percent. Defined as 0 at zero headcount.
pub fn turnover_rate(turnover: &Table, total_employees: usize) -> f64 {
    if total_employees == 0 {
        return 0.0;
    }
    turnover.len() as f64 / total_employees as f64 * 100.0
}

/// Non-presence rows over all attendance rows, percent. 0 on an empty sheet.
pub fn absenteeism_rate(attendance: &Table) -> f64 {
    if attendance.is_empty() {
        return 0.0;
    }
    let absent = attendance
        .rows
        .iter()
        .filter(|row| {
            row.get(ATTENDANCE_TYPE_COLUMN)
                .map(|v| v.to_display_string() != PRESENT)
                .unwrap_or(true)
        })
        .count();
    absent as f64 / attendance.len() as f64 * 100.0
}

/// Women over headcount, percent. Defined as 0 at zero headcount.
pub fn gender_diversity_rate(identity: &Table, total_employees: usize) -> f64 {
    if total_employees == 0 {
        return 0.0;
    }
    let women = identity
        .rows
        .iter()
        .filter(|row| {
            row.get(GENDER_COLUMN)
                .map(|v| v.to_display_string() == FEMALE)
                .unwrap_or(false)
        })
        .count();
    women as f64 / total_employees as f64 * 100.0
}

/// Occurrence counts of the non-null values of a column, largest first
/// (ties broken by label so repeated queries stay byte-identical).
pub fn value_counts(table: &Table, column: &str) -> Vec<CategoryCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for row in &table.rows {
        if let Some(value) = row.get(column) {
            if !value.is_null() {
                *counts.entry(value.to_display_string()).or_insert(0) += 1;
            }
        }
    }
    let mut result: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(label, count)| CategoryCount { label, count })
        .collect();
    result.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::table::CellValue;
    use std::collections::HashMap;

    fn table(columns: &[&str], rows: Vec<Vec<(&str, CellValue)>>) -> Table {
        Table::new(
            columns.iter().map(|c| c.to_string()).collect(),
            rows.into_iter()
                .map(|pairs| {
                    pairs
                        .into_iter()
                        .map(|(k, v)| (k.to_string(), v))
                        .collect::<HashMap<_, _>>()
                })
                .collect(),
        )
    }

    fn identity_three() -> Table {
        table(
            &["Matricule", "Sexe"],
            vec![
                vec![
                    ("Matricule", CellValue::Integer(1)),
                    ("Sexe", CellValue::Text("Homme".into())),
                ],
                vec![
                    ("Matricule", CellValue::Integer(2)),
                    ("Sexe", CellValue::Text("Femme".into())),
                ],
                vec![
                    ("Matricule", CellValue::Integer(3)),
                    ("Sexe", CellValue::Text("Femme".into())),
                ],
            ],
        )
    }

    #[test]
    fn test_total_employees_inner_join() {
        let identity = identity_three();
        // position only knows two of the three, plus one unknown matricule
        let position = table(
            &["Matricule"],
            vec![
                vec![("Matricule", CellValue::Integer(1))],
                vec![("Matricule", CellValue::Integer(3))],
                vec![("Matricule", CellValue::Integer(99))],
            ],
        );
        assert_eq!(total_employees(&identity, &position), 2);
        assert_eq!(total_employees(&identity, &Table::default()), 0);
        assert_eq!(total_employees(&Table::default(), &position), 0);
    }

    #[test]
    fn test_join_keys_survive_float_typing() {
        // the same matricule read as 1001 in one sheet and 1001.0 in another
        let identity = table(
            &["Matricule"],
            vec![vec![("Matricule", CellValue::Integer(1001))]],
        );
        let position = table(
            &["Matricule"],
            vec![vec![("Matricule", CellValue::Number(1001.0))]],
        );
        assert_eq!(total_employees(&identity, &position), 1);
    }

    #[test]
    fn test_filter_by_matricules() {
        let salary = table(
            &["Matricule", "Salaire_Brut"],
            vec![
                vec![
                    ("Matricule", CellValue::Integer(1)),
                    ("Salaire_Brut", CellValue::Integer(100)),
                ],
                vec![
                    ("Matricule", CellValue::Integer(2)),
                    ("Salaire_Brut", CellValue::Integer(200)),
                ],
            ],
        );
        let keys: HashSet<String> = ["1".to_string()].into_iter().collect();
        let filtered = filter_by_matricules(&salary, &keys);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.cell(0, "Matricule"), &CellValue::Integer(1));
        assert_eq!(filtered.columns, salary.columns);
    }

    #[test]
    fn test_turnover_rate_zero_headcount() {
        let turnover = table(
            &["Matricule"],
            vec![vec![("Matricule", CellValue::Integer(1))]],
        );
        assert_eq!(turnover_rate(&turnover, 0), 0.0);
        assert_eq!(turnover_rate(&turnover, 4), 25.0);
        assert_eq!(turnover_rate(&Table::default(), 4), 0.0);
    }

    #[test]
    fn test_absenteeism_rate() {
        let mut rows = Vec::new();
        for _ in 0..7 {
            rows.push(vec![("Type", CellValue::Text("Présence".into()))]);
        }
        rows.push(vec![("Type", CellValue::Text("Congé".into()))]);
        rows.push(vec![("Type", CellValue::Text("Maladie".into()))]);
        rows.push(vec![("Type", CellValue::Text("Absence".into()))]);
        let attendance = table(&["Type"], rows);
        assert_eq!(absenteeism_rate(&attendance), 30.0);
        assert_eq!(absenteeism_rate(&Table::default()), 0.0);
    }

    #[test]
    fn test_gender_diversity_rate() {
        let identity = identity_three();
        let rate = gender_diversity_rate(&identity, 3);
        assert!((rate - 66.66666666666667).abs() < 1e-9);
        assert_eq!(gender_diversity_rate(&identity, 0), 0.0);
    }

    #[test]
    fn test_value_counts_deterministic_order() {
        let turnover = table(
            &["Motif"],
            vec![
                vec![("Motif", CellValue::Text("Retraite".into()))],
                vec![("Motif", CellValue::Text("Démission".into()))],
                vec![("Motif", CellValue::Text("Démission".into()))],
                vec![("Motif", CellValue::Null)],
                vec![("Motif", CellValue::Text("Licenciement".into()))],
            ],
        );
        let counts = value_counts(&turnover, "Motif");
        assert_eq!(
            counts,
            vec![
                CategoryCount {
                    label: "Démission".into(),
                    count: 2
                },
                CategoryCount {
                    label: "Licenciement".into(),
                    count: 1
                },
                CategoryCount {
                    label: "Retraite".into(),
                    count: 1
                },
            ]
        );
    }
}
