use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::domain::entities::upload::UploadedTable;
use crate::infra::import::{is_supported, parse_spreadsheet};

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub tables: Vec<UploadedTable>,
    pub skipped: usize,
    pub failed: usize,
}

pub fn import_batch(paths: &[PathBuf]) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for path in paths {
        if !is_supported(path) {
            debug!("skipping unsupported upload: {}", path.display());
            outcome.skipped += 1;
            continue;
        }

        match parse_spreadsheet(path) {
            Ok(table) => {
                info!(
                    "imported {} ({} rows, {} columns)",
                    table.source_name,
                    table.row_count(),
                    table.columns.len()
                );
                outcome.tables.push(table);
            }
            Err(err) => {
                warn!("failed to import {}: {err:#}", path.display());
                outcome.failed += 1;
            }
        }
    }

    outcome
}
