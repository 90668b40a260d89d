use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Value in a workbook table cell
///
/// `Integer` is tried before `Number` during deserialization so that integral
/// JSON values (matricules, counts) keep their integer typing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Null value
    Null,
    /// Integer value
    Integer(i64),
    /// Numeric value
    Number(f64),
    /// Text value
    Text(String),
}

impl CellValue {
    /// Best-effort numeric coercion; text is trimmed and parsed as f64.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Integer(i) => Some(*i as f64),
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse::<f64>().ok(),
            CellValue::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// String rendering used when a cell passes through formatting unchanged.
    pub fn to_display_string(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Integer(i) => i.to_string(),
            CellValue::Null => String::new(),
        }
    }

    /// Canonical string form for join keys and search.
    ///
    /// Integral floats render without the trailing `.0` so that a matricule
    /// read as `1001.0` joins against one read as `1001`.
    pub fn to_key_string(&self) -> String {
        match self {
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Number(n) if n.fract() == 0.0 && n.is_finite() => {
                (*n as i64).to_string()
            }
            CellValue::Number(n) => n.to_string(),
            CellValue::Integer(i) => i.to_string(),
            CellValue::Null => String::new(),
        }
    }
}

/// A single table row: column name -> value
pub type TableRow = HashMap<String, CellValue>;

static NULL_CELL: CellValue = CellValue::Null;

/// One loaded workbook sheet: ordered column names plus keyed rows
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    /// Column names in source order
    pub columns: Vec<String>,
    /// Rows in source order
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<TableRow>) -> Self {
        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Cell lookup tolerant of absent columns (absent == Null).
    pub fn cell<'a>(&'a self, row: usize, column: &str) -> &'a CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(&NULL_CELL)
    }

    /// Distinct non-null values of a column, sorted ascending.
    pub fn distinct_values(&self, column: &str) -> Vec<String> {
        let mut values: Vec<String> = self
            .rows
            .iter()
            .filter_map(|row| row.get(column))
            .filter(|v| !v.is_null())
            .map(|v| v.to_display_string())
            .collect();
        values.sort();
        values.dedup();
        values
    }
}

/// A table rendered for display: every cell already a string
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormattedTable {
    /// Column names in source order
    pub columns: Vec<String>,
    /// Rows in source order, every value display-ready
    pub rows: Vec<HashMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_coercion() {
        assert_eq!(CellValue::Integer(42).as_number(), Some(42.0));
        assert_eq!(CellValue::Number(1.5).as_number(), Some(1.5));
        assert_eq!(CellValue::Text(" 120000 ".into()).as_number(), Some(120000.0));
        assert_eq!(CellValue::Text("abc".into()).as_number(), None);
        assert_eq!(CellValue::Null.as_number(), None);
    }

    #[test]
    fn test_key_string_drops_integral_fraction() {
        assert_eq!(CellValue::Number(1001.0).to_key_string(), "1001");
        assert_eq!(CellValue::Integer(1001).to_key_string(), "1001");
        assert_eq!(CellValue::Text(" E07 ".into()).to_key_string(), "E07");
    }

    #[test]
    fn test_untagged_deserialization() {
        let row: TableRow =
            serde_json::from_str(r#"{"Matricule": 1001, "Nom": "Rakoto", "Prime": 1.5, "Fin": null}"#)
                .unwrap();
        assert_eq!(row["Matricule"], CellValue::Integer(1001));
        assert_eq!(row["Nom"], CellValue::Text("Rakoto".into()));
        assert_eq!(row["Prime"], CellValue::Number(1.5));
        assert_eq!(row["Fin"], CellValue::Null);
    }

    #[test]
    fn test_distinct_values_sorted() {
        let rows = vec![
            HashMap::from([("Direction".to_string(), CellValue::Text("DGA Technique".into()))]),
            HashMap::from([("Direction".to_string(), CellValue::Null)]),
            HashMap::from([("Direction".to_string(), CellValue::Text("DGA Management".into()))]),
            HashMap::from([("Direction".to_string(), CellValue::Text("DGA Technique".into()))]),
        ];
        let table = Table::new(vec!["Direction".to_string()], rows);
        assert_eq!(
            table.distinct_values("Direction"),
            vec!["DGA Management".to_string(), "DGA Technique".to_string()]
        );
    }
}
