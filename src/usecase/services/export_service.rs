use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::records::MonthlyRecord;
use crate::domain::entities::upload::UploadedTable;

pub const MONTHLY_HEADERS: [&str; 6] = [
    "Month", "Premium", "Claims", "Policies", "Region", "Product",
];

pub fn write_monthly_csv(path: &Path, monthly: &[MonthlyRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create csv: {}", path.display()))?;

    writer
        .write_record(MONTHLY_HEADERS)
        .context("failed to write csv header")?;

    for row in monthly {
        writer
            .write_record([
                row.month.clone(),
                row.premium.to_string(),
                row.claims.to_string(),
                row.policies.to_string(),
                row.region.clone(),
                row.product.clone(),
            ])
            .with_context(|| format!("failed to write monthly row for {}", row.month))?;
    }

    writer.flush().context("failed to flush csv")?;
    Ok(())
}

pub fn write_table_csv(path: &Path, table: &UploadedTable) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create csv: {}", path.display()))?;

    if !table.columns.is_empty() {
        writer
            .write_record(&table.columns)
            .with_context(|| format!("failed to write header for {}", table.source_name))?;
    }

    for row in &table.rows {
        writer
            .write_record(row)
            .with_context(|| format!("failed to write row for {}", table.source_name))?;
    }

    writer.flush().context("failed to flush csv")?;
    Ok(())
}
