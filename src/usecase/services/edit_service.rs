use anyhow::{bail, Context, Result};
use chrono::Local;

use crate::domain::entities::edit::{CellUpdate, ChangeLogEntry};
use crate::domain::entities::records::ClaimStatus;
use crate::domain::entities::upload::{
    is_numeric_column, is_status_column, parse_amount, UploadedTable,
};

fn validate_value(column: &str, value: &str) -> Result<()> {
    if is_status_column(column) {
        if ClaimStatus::parse(value).is_none() {
            bail!("{column} must be one of: Approved, Rejected, Reversed, Pending");
        }
        return Ok(());
    }

    if is_numeric_column(column) {
        match parse_amount(value) {
            Some(amount) if amount < 0.0 => bail!("{column} must be >= 0"),
            Some(_) => {}
            None => bail!("{column} must be numeric"),
        }
    }

    Ok(())
}

pub fn update_cell(
    table: &mut UploadedTable,
    log: &mut Vec<ChangeLogEntry>,
    row: usize,
    column: &str,
    new_value: &str,
) -> Result<CellUpdate> {
    let col_idx = table
        .column_index(column)
        .with_context(|| format!("column {column:?} not found in {}", table.source_name))?;
    if row >= table.rows.len() {
        bail!("row {row} not found in {}", table.source_name);
    }

    validate_value(column, new_value)?;

    let old_value = table.rows[row][col_idx].clone();
    table.rows[row][col_idx] = new_value.to_string();

    log.push(ChangeLogEntry {
        timestamp: Local::now(),
        table: table.source_name.clone(),
        row,
        column: column.to_string(),
        old_value: old_value.clone(),
        new_value: new_value.to_string(),
    });

    Ok(CellUpdate {
        old_value,
        new_value: new_value.to_string(),
    })
}

pub fn reset_table(table: &mut UploadedTable, log: &mut Vec<ChangeLogEntry>) -> usize {
    table.rows = table.original_rows.clone();
    let before = log.len();
    log.retain(|entry| entry.table != table.source_name);
    before - log.len()
}
