use chrono::{DateTime, Local};

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedTable {
    pub source_name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub original_rows: Vec<Vec<String>>,
    pub imported_at: DateTime<Local>,
}

impl UploadedTable {
    pub fn new(source_name: String, columns: Vec<String>, rows: Vec<Vec<String>>) -> UploadedTable {
        let columns = if rows.is_empty() { Vec::new() } else { columns };
        UploadedTable {
            source_name,
            columns,
            original_rows: rows.clone(),
            rows,
            imported_at: Local::now(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn has_edits(&self) -> bool {
        self.rows != self.original_rows
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.eq_ignore_ascii_case(name.trim()))
    }
}

pub fn is_status_column(name: &str) -> bool {
    name.to_ascii_lowercase().contains("status")
}

pub fn is_numeric_column(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    if lower.contains("status") || lower.contains("date") {
        return false;
    }
    ["premium", "claim", "amount", "policies"]
        .iter()
        .any(|keyword| lower.contains(keyword))
}

pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}
