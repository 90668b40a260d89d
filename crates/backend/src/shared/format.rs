use chrono::{NaiveDate, NaiveDateTime};
use contracts::shared::table::{CellValue, FormattedTable, Table};

/// Sentinel shown wherever a value is missing or unparseable
pub const NOT_AVAILABLE: &str = "N/A";

/// Column-name keywords marking monetary columns (matched case-insensitively)
pub const MONETARY_KEYWORDS: &[&str] = &[
    "salaire",
    "bonus",
    "montant",
    "prime",
    "indemnité",
    "sanction",
    "coût",
    "cout",
    "depense",
    "dépense",
];

/// Column-name keywords marking date columns (matched case-insensitively)
pub const DATE_KEYWORDS: &[&str] = &[
    "date", "naissance", "debut", "fin", "mois", "annee", "année",
];

/// French month names used for date rendering
pub const FRENCH_MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Formats an amount in Ariary: two decimals, space-separated thousands.
///
/// Grouping is done by hand so the output never depends on the host locale.
pub fn format_ariary(value: Option<f64>) -> String {
    let v = match value {
        Some(v) if v.is_finite() => v,
        _ => return NOT_AVAILABLE.to_string(),
    };
    let rendered = format!("{:.2}", v.abs());
    let mut parts = rendered.splitn(2, '.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");
    let sign = if v < 0.0 { "-" } else { "" };
    format!("{}{}.{} Ar", sign, group_thousands(int_part, ' '), dec_part)
}

/// Groups a digit string into triads with the given separator
fn group_thousands(digits: &str, separator: char) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Space-grouped rendering of a plain count (log output, sizes)
pub fn format_count(n: usize) -> String {
    group_thousands(&n.to_string(), ' ')
}

/// Accepted textual date representations, tried in order
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parses a textual date under the accepted representations.
pub fn parse_text_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.date());
        }
    }
    None
}

/// Parses a cell as a date; only textual cells can carry one.
pub fn parse_cell_date(value: &CellValue) -> Option<NaiveDate> {
    match value {
        CellValue::Text(s) => parse_text_date(s),
        _ => None,
    }
}

/// Renders a cell as a French date, e.g. "22 janvier 2025".
///
/// Null becomes "N/A"; anything that does not parse as a date passes through
/// as its plain string form, so the function is total and idempotent.
pub fn format_french_date(value: &CellValue) -> String {
    if value.is_null() {
        return NOT_AVAILABLE.to_string();
    }
    match parse_cell_date(value) {
        Some(date) => {
            use chrono::Datelike;
            format!(
                "{} {} {}",
                date.day(),
                FRENCH_MONTHS[date.month0() as usize],
                date.year()
            )
        }
        None => value.to_display_string(),
    }
}

/// True when the column name carries one of the monetary keywords.
pub fn is_monetary_column(name: &str) -> bool {
    let lower = name.to_lowercase();
    MONETARY_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// True when the column name carries one of the date keywords.
pub fn is_date_column(name: &str) -> bool {
    let lower = name.to_lowercase();
    DATE_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// True when every non-null cell of the column parses as a date (and at least
/// one such cell exists); the counterpart of a date-typed source column.
fn column_is_date_typed(table: &Table, column: &str) -> bool {
    let mut seen = false;
    for row in &table.rows {
        match row.get(column) {
            None | Some(CellValue::Null) => continue,
            Some(value) => {
                if parse_cell_date(value).is_none() {
                    return false;
                }
                seen = true;
            }
        }
    }
    seen
}

/// Renders monetary columns in Ariary; other columns pass through.
///
/// Operates on a copy: column names and row count never change, and cells of
/// flagged columns that do not coerce to a number become "N/A".
pub fn format_monetary_columns(table: &Table) -> Table {
    let flagged: Vec<String> = table
        .columns
        .iter()
        .filter(|c| is_monetary_column(c))
        .cloned()
        .collect();
    if flagged.is_empty() {
        return table.clone();
    }
    let mut formatted = table.clone();
    for row in &mut formatted.rows {
        for column in &flagged {
            if let Some(cell) = row.get_mut(column) {
                *cell = CellValue::Text(format_ariary(cell.as_number()));
            }
        }
    }
    formatted
}

/// Renders date columns as French dates; other columns pass through.
///
/// A column qualifies by keyword or because all its values already parse as
/// dates. Copy semantics as for [`format_monetary_columns`].
pub fn format_date_columns(table: &Table) -> Table {
    let flagged: Vec<String> = table
        .columns
        .iter()
        .filter(|c| is_date_column(c) || column_is_date_typed(table, c))
        .cloned()
        .collect();
    if flagged.is_empty() {
        return table.clone();
    }
    let mut formatted = table.clone();
    for row in &mut formatted.rows {
        for column in &flagged {
            if let Some(cell) = row.get_mut(column) {
                *cell = CellValue::Text(format_french_date(cell));
            }
        }
    }
    formatted
}

/// Monetary formatting first, then dates.
///
/// A column matching both keyword sets is currency-rendered first; the date
/// pass then sees a non-date string and leaves it unchanged.
pub fn format_table(table: &Table) -> Table {
    format_date_columns(&format_monetary_columns(table))
}

/// Fully formats a table and renders every cell as a display string.
pub fn format_table_for_display(table: &Table) -> FormattedTable {
    let formatted = format_table(table);
    FormattedTable {
        columns: formatted.columns.clone(),
        rows: formatted
            .rows
            .iter()
            .map(|row| {
                formatted
                    .columns
                    .iter()
                    .map(|c| {
                        (
                            c.clone(),
                            row.get(c)
                                .map(CellValue::to_display_string)
                                .unwrap_or_default(),
                        )
                    })
                    .collect()
            })
            .collect(),
    }
}
