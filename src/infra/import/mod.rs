pub mod csv;
pub mod xlsx;

use std::path::Path;

use anyhow::Result;

use crate::domain::entities::upload::UploadedTable;

pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["xlsx", "csv", "xls"];

pub fn file_extension(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default()
}

pub fn is_supported(path: &Path) -> bool {
    SUPPORTED_EXTENSIONS.contains(&file_extension(path).as_str())
}

pub fn source_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or("upload")
        .to_string()
}

pub fn parse_spreadsheet(path: &Path) -> Result<UploadedTable> {
    match file_extension(path).as_str() {
        "csv" => csv::parse_csv(path),
        "xlsx" | "xls" => xlsx::parse_workbook(path),
        other => anyhow::bail!("unsupported file extension: {other:?}"),
    }
}
