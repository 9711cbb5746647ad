use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Reader};

use crate::domain::entities::upload::UploadedTable;
use crate::infra::import::source_name;

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => v.to_string(),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

pub fn parse_workbook(path: &Path) -> Result<UploadedTable> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("failed to open workbook: {}", path.display()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .with_context(|| format!("workbook has no sheets: {}", path.display()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("failed to read sheet: {sheet_name}"))?;

    let mut sheet_rows = range.rows();
    let columns: Vec<String> = sheet_rows
        .next()
        .map(|header| {
            header
                .iter()
                .map(|cell| cell_to_string(cell).trim().to_string())
                .collect()
        })
        .unwrap_or_default();

    if columns.is_empty() {
        anyhow::bail!("sheet {sheet_name:?} has no header row")
    }

    let header_len = columns.len();
    let rows: Vec<Vec<String>> = sheet_rows
        .map(|row| {
            (0..header_len)
                .map(|col_idx| row.get(col_idx).map(cell_to_string).unwrap_or_default())
                .collect()
        })
        .collect();

    Ok(UploadedTable::new(source_name(path), columns, rows))
}
