use chrono::{DateTime, Local};

#[derive(Debug, Clone, PartialEq)]
pub struct ChangeLogEntry {
    pub timestamp: DateTime<Local>,
    pub table: String,
    pub row: usize,
    pub column: String,
    pub old_value: String,
    pub new_value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellUpdate {
    pub old_value: String,
    pub new_value: String,
}
