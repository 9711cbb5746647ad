use dioxus::prelude::*;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::domain::entities::filters::{ALL_DEALERS, ALL_PRODUCTS, ALL_REGIONS, DateRange};
use crate::domain::entities::insight::{Insight, InsightKind, Trend};
use crate::ui::state::app_state::DashboardState;
use crate::usecase::services::edit_service::{reset_table, update_cell};
use crate::usecase::services::export_service::{write_monthly_csv, write_table_csv};
use crate::usecase::services::import_service::import_batch;
use crate::usecase::services::insight_service::insights;
use crate::usecase::services::metrics_service::{
    claim_status_breakdown, format_amount, kpi_summary,
};
use crate::usecase::services::query_service::{filter_options, filtered_view};
use crate::usecase::services::validate_service::validate_table;

const HEADER_CELL_STYLE: &str = "border: 1px solid #bbb; padding: 6px; background: #f2f2f2; text-align: left;";
const CELL_STYLE: &str = "border: 1px solid #bbb; padding: 6px;";

fn insight_accent(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Success => "#10b981",
        InsightKind::Info => "#3b82f6",
        InsightKind::Warning => "#f59e0b",
        InsightKind::Danger => "#ef4444",
        InsightKind::Forecast => "#8b5cf6",
    }
}

fn trend_marker(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "▲",
        Trend::Down => "▼",
        Trend::Neutral => "-",
    }
}

#[component]
pub fn App() -> Element {
    let state = DashboardState::new();
    let dataset = state.dataset;
    let mut filters = state.filters;
    let mut uploads = state.uploads;
    let mut change_log = state.change_log;
    let mut selected_upload = state.selected_upload;
    let mut editing_cell = state.editing_cell;
    let mut editing_value = state.editing_value;
    let mut busy = state.busy;
    let mut status = state.status;

    let current_filters = filters();
    let view = filtered_view(&dataset(), &current_filters);
    let kpis = kpi_summary(&view);
    let options = filter_options(&dataset());
    let insight_cards = insights(&view, &kpis);
    let status_slices = claim_status_breakdown(&view);

    let region_value = current_filters.region_label();
    let product_value = current_filters.product_label();
    let dealer_value = current_filters.dealer_label();
    let range_value = current_filters.date_range.label();
    let range_labels: Vec<&'static str> =
        DateRange::ALL.iter().map(|range| range.label()).collect();

    let premium_value = format!("AED {}", format_amount(kpis.premium));
    let claims_value = format!("AED {}", format_amount(kpis.claims));
    let policies_value = format_amount(kpis.policies as f64);
    let loss_ratio_value = format!("{}%", kpis.loss_ratio);

    let monthly_headers = vec![
        "Month".to_string(),
        "Premium".to_string(),
        "Claims".to_string(),
        "Policies".to_string(),
        "Region".to_string(),
        "Product".to_string(),
    ];
    let monthly_rows: Vec<Vec<String>> = view
        .monthly
        .iter()
        .map(|row| {
            vec![
                row.month.clone(),
                format_amount(row.premium),
                format_amount(row.claims),
                row.policies.to_string(),
                row.region.clone(),
                row.product.clone(),
            ]
        })
        .collect();

    let dealer_headers = vec![
        "Dealer".to_string(),
        "Region".to_string(),
        "Product".to_string(),
        "Policies".to_string(),
        "Premium".to_string(),
        "Claims".to_string(),
        "Loss Ratio".to_string(),
    ];
    let dealer_rows: Vec<Vec<String>> = view
        .dealers
        .iter()
        .map(|row| {
            vec![
                row.name.clone(),
                row.region.clone(),
                row.product.clone(),
                row.policies.to_string(),
                format_amount(row.premium),
                format_amount(row.claims),
                format!("{:.1}%", row.loss_ratio),
            ]
        })
        .collect();

    let region_headers = vec![
        "Region".to_string(),
        "Premium".to_string(),
        "Claims".to_string(),
        "Policies".to_string(),
        "Dealers".to_string(),
    ];
    let region_rows: Vec<Vec<String>> = view
        .regions
        .iter()
        .map(|row| {
            vec![
                row.region.clone(),
                format_amount(row.premium),
                format_amount(row.claims),
                row.policies.to_string(),
                row.dealer_count.to_string(),
            ]
        })
        .collect();

    let product_headers = vec![
        "Product".to_string(),
        "Policies".to_string(),
        "Premium".to_string(),
        "Claims".to_string(),
    ];
    let product_rows: Vec<Vec<String>> = view
        .products
        .iter()
        .map(|row| {
            vec![
                row.product.clone(),
                row.count.to_string(),
                format_amount(row.premium),
                format_amount(row.claims),
            ]
        })
        .collect();

    let claim_type_headers = vec![
        "Claim Type".to_string(),
        "Share".to_string(),
        "Amount".to_string(),
    ];
    let claim_type_rows: Vec<Vec<String>> = view
        .claim_types
        .iter()
        .map(|row| {
            vec![
                row.name.clone(),
                format!("{:.1}%", row.share),
                format!("AED {}", format_amount(row.amount)),
            ]
        })
        .collect();

    let status_rows: Vec<(String, String, String)> = status_slices
        .iter()
        .map(|slice| {
            (
                slice.status.as_str().to_string(),
                format!("{} claims / AED {}", slice.count, format_amount(slice.amount)),
                slice.color.to_string(),
            )
        })
        .collect();

    let claim_rows: Vec<(String, String, String, String, String, String, String)> = view
        .recent_claims
        .iter()
        .map(|entry| {
            (
                entry.id.clone(),
                entry.policy_id.clone(),
                entry.region.clone(),
                entry.product.clone(),
                format!("AED {}", format_amount(entry.amount)),
                entry.date.format("%Y-%m-%d").to_string(),
                entry.status.as_str().to_string(),
            )
        })
        .collect();
    let claim_colors: Vec<String> = view
        .recent_claims
        .iter()
        .map(|entry| entry.status.color().to_string())
        .collect();
    let claim_badge_rows: Vec<((String, String, String, String, String, String, String), String)> =
        claim_rows.into_iter().zip(claim_colors).collect();

    let uploaded = uploads();
    let upload_tabs: Vec<(usize, String)> = uploaded
        .iter()
        .enumerate()
        .map(|(idx, table)| {
            (
                idx,
                format!("{} ({})", table.source_name, table.row_count()),
            )
        })
        .collect();
    let active_table = selected_upload()
        .filter(|idx| *idx < uploaded.len())
        .and_then(|idx| uploaded.get(idx).cloned());
    let active_meta: Option<(String, String, usize, bool)> = active_table.as_ref().map(|table| {
        (
            table.source_name.clone(),
            table.imported_at.format("%Y-%m-%d %H:%M").to_string(),
            table.row_count(),
            table.has_edits(),
        )
    });
    let log_headers = vec![
        "Time".to_string(),
        "Column".to_string(),
        "Row".to_string(),
        "From".to_string(),
        "To".to_string(),
    ];
    let log_rows: Vec<Vec<String>> = active_table
        .as_ref()
        .map(|table| {
            change_log()
                .iter()
                .filter(|entry| entry.table == table.source_name)
                .rev()
                .take(10)
                .map(|entry| {
                    vec![
                        entry.timestamp.format("%H:%M:%S").to_string(),
                        entry.column.clone(),
                        format!("{}", entry.row + 1),
                        entry.old_value.clone(),
                        entry.new_value.clone(),
                    ]
                })
                .collect()
        })
        .unwrap_or_default();

    let monthly_for_export = view.monthly.clone();

    rsx! {
        div {
            style: "font-family: sans-serif; max-width: 1280px; margin: 0 auto; padding: 12px;",
            nav {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                h2 { style: "margin: 0 16px 0 0;", "ClaimLens" }
                button {
                    disabled: busy(),
                    onclick: move |_| {
                        if busy() {
                            return;
                        }

                        let Some(paths) = FileDialog::new()
                            .add_filter("Spreadsheets", &["xlsx", "csv", "xls"])
                            .pick_files() else {
                            *status.write() = "Import cancelled".to_string();
                            return;
                        };

                        *busy.write() = true;
                        *status.write() = format!("Importing {} file(s)", paths.len());

                        let outcome = import_batch(&paths);
                        let imported = outcome.tables.len();
                        let flagged = outcome
                            .tables
                            .iter()
                            .filter(|table| !validate_table(table).issues.is_empty())
                            .count();
                        if imported > 0 {
                            let mut tables = uploads();
                            let first_new = tables.len();
                            tables.extend(outcome.tables);
                            *uploads.write() = tables;
                            *selected_upload.write() = Some(first_new);
                            *editing_cell.write() = None;
                        }

                        let mut summary = if outcome.failed > 0 || outcome.skipped > 0 {
                            format!(
                                "Imported {imported} file(s), {} failed, {} skipped",
                                outcome.failed, outcome.skipped
                            )
                        } else {
                            format!("Imported {imported} file(s)")
                        };
                        if flagged > 0 {
                            summary.push_str(&format!(", {flagged} with validation issues"));
                        }
                        *status.write() = summary;

                        *busy.write() = false;
                    },
                    "Import Data"
                }
                button {
                    disabled: busy(),
                    onclick: move |_| {
                        let Some(path) = FileDialog::new()
                            .add_filter("CSV", &["csv"])
                            .set_file_name("monthly_view.csv")
                            .save_file() else {
                            *status.write() = "Export cancelled".to_string();
                            return;
                        };

                        *status.write() = match write_monthly_csv(&path, &monthly_for_export) {
                            Ok(()) => format!("Exported {} monthly row(s)", monthly_for_export.len()),
                            Err(err) => format!("Export failed: {err}"),
                        };
                    },
                    "Export Monthly CSV"
                }
                span { " {status}" }
            }

            div {
                style: "display: flex; gap: 16px; flex-wrap: wrap; margin: 8px 0;",
                label { "Region "
                    select {
                        disabled: busy(),
                        value: region_value,
                        onchange: move |event| {
                            let value = event.value();
                            let mut next = filters();
                            next.region = if value == ALL_REGIONS { None } else { Some(value) };
                            *filters.write() = next;
                            *status.write() = "Filters updated".to_string();
                        },
                        option { value: "{ALL_REGIONS}", "{ALL_REGIONS}" }
                        for region in options.regions.clone() {
                            option { value: "{region}", "{region}" }
                        }
                    }
                }
                label { "Product "
                    select {
                        disabled: busy(),
                        value: product_value,
                        onchange: move |event| {
                            let value = event.value();
                            let mut next = filters();
                            next.product = if value == ALL_PRODUCTS { None } else { Some(value) };
                            *filters.write() = next;
                            *status.write() = "Filters updated".to_string();
                        },
                        option { value: "{ALL_PRODUCTS}", "{ALL_PRODUCTS}" }
                        for product in options.products.clone() {
                            option { value: "{product}", "{product}" }
                        }
                    }
                }
                label { "Dealer "
                    select {
                        disabled: busy(),
                        value: dealer_value,
                        onchange: move |event| {
                            let value = event.value();
                            let mut next = filters();
                            next.dealer = if value == ALL_DEALERS { None } else { Some(value) };
                            *filters.write() = next;
                            *status.write() = "Filters updated".to_string();
                        },
                        option { value: "{ALL_DEALERS}", "{ALL_DEALERS}" }
                        for dealer in options.dealers.clone() {
                            option { value: "{dealer}", "{dealer}" }
                        }
                    }
                }
                label { "Period "
                    select {
                        disabled: busy(),
                        value: range_value,
                        onchange: move |event| {
                            let mut next = filters();
                            next.date_range = DateRange::from_label(&event.value());
                            *filters.write() = next;
                            *status.write() = "Filters updated".to_string();
                        },
                        for label in range_labels.clone() {
                            option { value: "{label}", "{label}" }
                        }
                    }
                }
            }

            div {
                style: "display: flex; gap: 16px; flex-wrap: wrap; margin: 12px 0;",
                KpiCard { label: "Total Premium", value: premium_value }
                KpiCard { label: "Total Claims", value: claims_value }
                KpiCard { label: "Active Policies", value: policies_value }
                KpiCard { label: "Loss Ratio", value: loss_ratio_value }
            }

            h3 { "Insights" }
            div {
                style: "display: flex; flex-direction: column; gap: 8px; margin-bottom: 16px;",
                for card in insight_cards.clone() {
                    InsightCard { insight: card }
                }
            }

            h3 { "Monthly Performance" }
            DataTable {
                headers: monthly_headers,
                rows: monthly_rows,
                empty_label: "No rows match the current filters",
            }

            h3 { "Dealer Performance" }
            DataTable {
                headers: dealer_headers,
                rows: dealer_rows,
                empty_label: "No dealers match the current filters",
            }

            div {
                style: "display: flex; gap: 24px; flex-wrap: wrap;",
                div { style: "flex: 1; min-width: 320px;",
                    h3 { "Regions" }
                    DataTable {
                        headers: region_headers,
                        rows: region_rows,
                        empty_label: "No regions match the current filters",
                    }
                }
                div { style: "flex: 1; min-width: 320px;",
                    h3 { "Products" }
                    DataTable {
                        headers: product_headers,
                        rows: product_rows,
                        empty_label: "No products match the current filters",
                    }
                }
            }

            div {
                style: "display: flex; gap: 24px; flex-wrap: wrap;",
                div { style: "flex: 1; min-width: 320px;",
                    h3 { "Claim Types" }
                    DataTable {
                        headers: claim_type_headers,
                        rows: claim_type_rows,
                        empty_label: "No claim types",
                    }
                }
                div { style: "flex: 1; min-width: 320px;",
                    h3 { "Claim Status" }
                    div { style: "display: flex; flex-direction: column; gap: 6px;",
                        for (name, detail, color) in status_rows.clone() {
                            div { style: "display: flex; align-items: center; gap: 8px;",
                                span { style: "display: inline-block; width: 10px; height: 10px; border-radius: 999px; background: {color};" }
                                strong { "{name}" }
                                span { style: "color: #475569;", "{detail}" }
                            }
                        }
                    }
                }
            }

            h3 { "Recent Claims" }
            table { style: "border-collapse: collapse; width: 100%; border: 1px solid #bbb;",
                thead {
                    tr {
                        th { style: "{HEADER_CELL_STYLE}", "Claim" }
                        th { style: "{HEADER_CELL_STYLE}", "Policy" }
                        th { style: "{HEADER_CELL_STYLE}", "Region" }
                        th { style: "{HEADER_CELL_STYLE}", "Product" }
                        th { style: "{HEADER_CELL_STYLE}", "Amount" }
                        th { style: "{HEADER_CELL_STYLE}", "Date" }
                        th { style: "{HEADER_CELL_STYLE}", "Status" }
                    }
                }
                tbody {
                    if claim_badge_rows.is_empty() {
                        tr {
                            td { style: "{CELL_STYLE}", colspan: 7, "No claims match the current filters" }
                        }
                    } else {
                        for ((id, policy, region, product, amount, date, status_name), color) in claim_badge_rows.clone() {
                            tr {
                                td { style: "{CELL_STYLE}", "{id}" }
                                td { style: "{CELL_STYLE}", "{policy}" }
                                td { style: "{CELL_STYLE}", "{region}" }
                                td { style: "{CELL_STYLE}", "{product}" }
                                td { style: "{CELL_STYLE}", "{amount}" }
                                td { style: "{CELL_STYLE}", "{date}" }
                                td { style: "{CELL_STYLE}",
                                    span {
                                        style: "background: {color}; color: white; padding: 2px 8px; border-radius: 999px; font-size: 12px;",
                                        "{status_name}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            h3 { "Uploaded Data" }
            if upload_tabs.is_empty() {
                p { style: "color: #475569;", "No files uploaded yet. Import a spreadsheet to review it here." }
            } else {
                div {
                    style: "display: flex; gap: 6px; margin: 8px 0; flex-wrap: wrap;",
                    for (idx, tab_label) in upload_tabs.clone() {
                        button {
                            disabled: busy(),
                            onclick: move |_| {
                                *selected_upload.write() = Some(idx);
                                *editing_cell.write() = None;
                            },
                            if Some(idx) == selected_upload() {
                                "[{tab_label}]"
                            } else {
                                "{tab_label}"
                            }
                        }
                    }
                }
            }

            if let Some((name, imported_at, row_total, edited)) = active_meta.clone() {
                div {
                    style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; margin: 8px 0;",
                    strong { "{name}" }
                    span { style: "color: #475569;", "imported {imported_at}, {row_total} row(s)" }
                    if edited {
                        em { style: "color: #f59e0b;", "unsaved edits" }
                    }
                    button {
                        disabled: busy(),
                        onclick: move |_| {
                            let Some(idx) = selected_upload() else {
                                return;
                            };
                            let Some(table) = uploads().get(idx).cloned() else {
                                return;
                            };
                            let report = validate_table(&table);
                            *status.write() = if report.issues.is_empty() {
                                format!("{}: no issues found", table.source_name)
                            } else {
                                let notes: Vec<String> = report
                                    .issues
                                    .iter()
                                    .map(|issue| issue.message.clone())
                                    .collect();
                                format!(
                                    "{} [{}]: {}",
                                    table.source_name,
                                    report.status.label(),
                                    notes.join(" ")
                                )
                            };
                        },
                        "Validate"
                    }
                    button {
                        disabled: busy(),
                        onclick: move |_| {
                            let Some(idx) = selected_upload() else {
                                return;
                            };

                            let confirmed = MessageDialog::new()
                                .set_level(MessageLevel::Warning)
                                .set_title("Reset Edits")
                                .set_description("Discard all edits to this table and restore the imported values?")
                                .set_buttons(MessageButtons::YesNo)
                                .show();
                            if confirmed != MessageDialogResult::Yes {
                                return;
                            }

                            let mut tables = uploads();
                            let Some(table) = tables.get_mut(idx) else {
                                return;
                            };
                            let mut log = change_log();
                            let reverted = reset_table(table, &mut log);
                            *uploads.write() = tables;
                            *change_log.write() = log;
                            *editing_cell.write() = None;
                            *status.write() = format!("Reverted {reverted} change(s)");
                        },
                        "Reset Edits"
                    }
                    button {
                        disabled: busy(),
                        onclick: move |_| {
                            let Some(idx) = selected_upload() else {
                                return;
                            };
                            let Some(table) = uploads().get(idx).cloned() else {
                                return;
                            };
                            let Some(path) = FileDialog::new()
                                .add_filter("CSV", &["csv"])
                                .set_file_name("upload_export.csv")
                                .save_file() else {
                                *status.write() = "Export cancelled".to_string();
                                return;
                            };

                            *status.write() = match write_table_csv(&path, &table) {
                                Ok(()) => format!(
                                    "Exported {} ({} rows)",
                                    table.source_name,
                                    table.row_count()
                                ),
                                Err(err) => format!("Export failed: {err}"),
                            };
                        },
                        "Export CSV"
                    }
                }
            }

            if let Some(table) = active_table.clone() {
                table { style: "border-collapse: collapse; width: 100%; border: 1px solid #bbb;",
                    thead {
                        tr {
                            for header in table.columns.clone() {
                                th { style: "{HEADER_CELL_STYLE}", "{header}" }
                            }
                        }
                    }
                    tbody {
                        if table.rows.is_empty() {
                            tr {
                                td { style: "{CELL_STYLE}", colspan: table.columns.len().max(1), "No data rows" }
                            }
                        } else {
                            for (row_idx, row) in table.rows.clone().into_iter().enumerate() {
                                tr {
                                    for (col_idx, cell) in row.into_iter().enumerate() {
                                        td {
                                            style: "{CELL_STYLE}",
                                            onclick: move |_| {
                                                if busy() || editing_cell() == Some((row_idx, col_idx)) {
                                                    return;
                                                }
                                                let Some(idx) = selected_upload() else {
                                                    return;
                                                };
                                                let current = uploads()
                                                    .get(idx)
                                                    .and_then(|t| t.rows.get(row_idx))
                                                    .and_then(|r| r.get(col_idx))
                                                    .cloned()
                                                    .unwrap_or_default();
                                                *editing_cell.write() = Some((row_idx, col_idx));
                                                *editing_value.write() = current;
                                            },
                                            if editing_cell() == Some((row_idx, col_idx)) {
                                                input {
                                                    value: editing_value(),
                                                    onchange: move |event| {
                                                        let value = event.value();
                                                        let Some(idx) = selected_upload() else {
                                                            return;
                                                        };
                                                        let mut tables = uploads();
                                                        let Some(table) = tables.get_mut(idx) else {
                                                            return;
                                                        };
                                                        let Some(column) = table.columns.get(col_idx).cloned() else {
                                                            return;
                                                        };
                                                        let mut log = change_log();
                                                        match update_cell(table, &mut log, row_idx, &column, &value) {
                                                            Ok(update) => {
                                                                *uploads.write() = tables;
                                                                *change_log.write() = log;
                                                                *status.write() = format!(
                                                                    "Updated {column} (was {}, now {})",
                                                                    update.old_value, update.new_value
                                                                );
                                                            }
                                                            Err(err) => {
                                                                *status.write() = format!("Edit rejected: {err}");
                                                            }
                                                        }
                                                        *editing_cell.write() = None;
                                                    },
                                                }
                                                button {
                                                    onclick: move |_| {
                                                        *editing_cell.write() = None;
                                                    },
                                                    "Cancel"
                                                }
                                            } else {
                                                "{cell}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                h3 { "Change Log" }
                DataTable {
                    headers: log_headers.clone(),
                    rows: log_rows.clone(),
                    empty_label: "No edits recorded",
                }
            }
        }
    }
}

#[component]
fn KpiCard(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            style: "border: 1px solid #ddd; border-radius: 8px; padding: 12px 16px; min-width: 180px;",
            div { style: "color: #64748b; font-size: 13px;", "{label}" }
            div { style: "font-size: 22px; font-weight: 600;", "{value}" }
        }
    }
}

#[component]
fn InsightCard(insight: Insight) -> Element {
    let accent = insight_accent(insight.kind);
    let marker = trend_marker(insight.trend);
    rsx! {
        div {
            style: "border: 1px solid #ddd; border-left: 4px solid {accent}; border-radius: 6px; padding: 10px 14px;",
            div {
                style: "display: flex; justify-content: space-between; gap: 12px; flex-wrap: wrap;",
                strong { "{insight.title}" }
                span { style: "color: {accent}; font-weight: 600;", "{marker} {insight.metric}" }
            }
            div { style: "color: #475569; font-size: 14px;", "{insight.description}" }
        }
    }
}

#[component]
fn DataTable(headers: Vec<String>, rows: Vec<Vec<String>>, empty_label: &'static str) -> Element {
    rsx! {
        table { style: "border-collapse: collapse; width: 100%; border: 1px solid #bbb;",
            thead {
                tr {
                    for header in headers.clone() {
                        th { style: "{HEADER_CELL_STYLE}", "{header}" }
                    }
                }
            }
            tbody {
                if rows.is_empty() {
                    tr {
                        td { style: "{CELL_STYLE}", colspan: headers.len().max(1), "{empty_label}" }
                    }
                } else {
                    for row in rows {
                        tr {
                            for cell in row {
                                td { style: "{CELL_STYLE}", "{cell}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
