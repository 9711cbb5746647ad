use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::upload::UploadedTable;
use crate::infra::import::source_name;

pub fn parse_csv(path: &Path) -> Result<UploadedTable> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open csv: {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read headers from csv: {}", path.display()))?
        .clone();

    if headers.is_empty() {
        anyhow::bail!("csv header is required")
    }

    let columns: Vec<String> = headers.iter().map(|name| name.trim().to_string()).collect();

    let header_len = columns.len();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to parse csv record")?;
        let row: Vec<String> = (0..header_len)
            .map(|col_idx| record.get(col_idx).unwrap_or("").to_string())
            .collect();
        rows.push(row);
    }

    Ok(UploadedTable::new(source_name(path), columns, rows))
}
