use std::collections::HashSet;

use crate::domain::entities::upload::{is_numeric_column, parse_amount, UploadedTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationStatus {
    Valid,
    Warning,
    Error,
}

impl ValidationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ValidationStatus::Valid => "Valid",
            ValidationStatus::Warning => "Warning",
            ValidationStatus::Error => "Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub severity: ValidationStatus,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub status: ValidationStatus,
    pub issues: Vec<ValidationIssue>,
}

pub fn validate_table(table: &UploadedTable) -> ValidationReport {
    let mut issues = Vec::new();

    if table.rows.is_empty() {
        issues.push(ValidationIssue {
            severity: ValidationStatus::Error,
            message: format!("{} contains no data rows.", table.source_name),
        });
    }

    if let Some(policy_idx) = table.column_index("Policy No") {
        let mut seen = HashSet::new();
        let mut duplicates = 0_usize;
        for row in &table.rows {
            let value = row.get(policy_idx).map(String::as_str).unwrap_or("");
            if !seen.insert(value.to_string()) {
                duplicates += 1;
            }
        }
        if duplicates > 0 {
            issues.push(ValidationIssue {
                severity: ValidationStatus::Warning,
                message: format!("Found {duplicates} duplicate Policy No values."),
            });
        }
    }

    for (col_idx, column) in table.columns.iter().enumerate() {
        if !is_numeric_column(column) {
            continue;
        }
        let non_numeric = table
            .rows
            .iter()
            .filter(|row| {
                let value = row.get(col_idx).map(String::as_str).unwrap_or("");
                parse_amount(value).is_none()
            })
            .count();
        if non_numeric > 0 {
            issues.push(ValidationIssue {
                severity: ValidationStatus::Warning,
                message: format!("Found {non_numeric} non-numeric values in {column} column."),
            });
        }
    }

    let status = issues
        .iter()
        .map(|issue| issue.severity)
        .max()
        .unwrap_or(ValidationStatus::Valid);

    ValidationReport { status, issues }
}
