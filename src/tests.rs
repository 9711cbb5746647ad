use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Local;
use rust_xlsxwriter::Workbook;

use crate::domain::entities::dataset::{Dataset, FilteredView};
use crate::domain::entities::edit::ChangeLogEntry;
use crate::domain::entities::filters::{DateRange, FilterState};
use crate::domain::entities::insight::{InsightKind, Trend};
use crate::domain::entities::records::{ClaimStatus, DealerRecord, MonthlyRecord};
use crate::domain::entities::upload::{parse_amount, UploadedTable};
use crate::infra::import::csv::parse_csv;
use crate::infra::import::parse_spreadsheet;
use crate::infra::import::xlsx::parse_workbook;
use crate::usecase::services::edit_service::{reset_table, update_cell};
use crate::usecase::services::export_service::{
    write_monthly_csv, write_table_csv, MONTHLY_HEADERS,
};
use crate::usecase::services::import_service::import_batch;
use crate::usecase::services::insight_service::insights;
use crate::usecase::services::metrics_service::{
    claim_status_breakdown, format_amount, kpi_summary,
};
use crate::usecase::services::query_service::{filter_options, filtered_view};
use crate::usecase::services::validate_service::{validate_table, ValidationStatus};

fn unique_test_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("claimlens-{prefix}-{nanos}"))
}

fn month_row(label: &str, premium: f64, claims: f64, policies: u32) -> MonthlyRecord {
    MonthlyRecord {
        month: label.to_string(),
        premium,
        claims,
        policies,
        region: "North".to_string(),
        product: "Extended Warranty".to_string(),
    }
}

fn monthly_only(monthly: Vec<MonthlyRecord>) -> Dataset {
    Dataset {
        monthly,
        dealers: Vec::new(),
        regions: Vec::new(),
        products: Vec::new(),
        claim_types: Vec::new(),
        recent_claims: Vec::new(),
    }
}

fn view_of(monthly: Vec<MonthlyRecord>) -> FilteredView {
    FilteredView {
        monthly,
        dealers: Vec::new(),
        regions: Vec::new(),
        products: Vec::new(),
        recent_claims: Vec::new(),
        claim_types: Vec::new(),
    }
}

fn dealer_row(name: &str, premium: f64, claims: f64, policies: u32, loss_ratio: f64) -> DealerRecord {
    DealerRecord {
        name: name.to_string(),
        premium,
        claims,
        policies,
        loss_ratio,
        region: "North".to_string(),
        product: "Extended Warranty".to_string(),
    }
}

fn sample_table() -> UploadedTable {
    UploadedTable::new(
        "sales.csv".to_string(),
        vec![
            "Policy No".to_string(),
            "Premium".to_string(),
            "Claim Status".to_string(),
        ],
        vec![
            vec![
                "P-1001".to_string(),
                "1200".to_string(),
                "Approved".to_string(),
            ],
            vec![
                "P-1002".to_string(),
                "900".to_string(),
                "Pending".to_string(),
            ],
        ],
    )
}

#[test]
fn default_filters_return_every_baseline_row() {
    let dataset = Dataset::baseline();
    let view = filtered_view(&dataset, &FilterState::default());

    assert_eq!(view.monthly.len(), dataset.monthly.len());
    assert_eq!(view.dealers.len(), dataset.dealers.len());
    assert_eq!(view.regions.len(), dataset.regions.len());
    assert_eq!(view.products.len(), dataset.products.len());
    assert_eq!(view.recent_claims.len(), dataset.recent_claims.len());
    assert_eq!(view.claim_types, dataset.claim_types);

    let kpis = kpi_summary(&view);
    assert_eq!(kpis.premium, 4_278_000.0);
    assert_eq!(kpis.claims, 1_963_400.0);
    assert_eq!(kpis.policies, 2_940);
    assert_eq!(kpis.loss_ratio, "45.9");
}

#[test]
fn region_filter_restricts_each_regional_table() {
    let dataset = Dataset::baseline();
    let filters = FilterState {
        region: Some("Abu Dhabi".to_string()),
        ..FilterState::default()
    };
    let view = filtered_view(&dataset, &filters);

    assert!(view.monthly.iter().all(|row| row.region == "Abu Dhabi"));
    assert!(view.dealers.iter().all(|row| row.region == "Abu Dhabi"));
    assert!(view.regions.iter().all(|row| row.region == "Abu Dhabi"));
    assert!(view
        .recent_claims
        .iter()
        .all(|row| row.region == "Abu Dhabi"));
    assert_eq!(
        view.products.len(),
        dataset.products.len(),
        "product table should not react to the region filter"
    );
    assert_eq!(
        view.claim_types.len(),
        dataset.claim_types.len(),
        "claim types are never filtered"
    );
}

#[test]
fn dubai_region_view_matches_baseline_fixture() {
    let dataset = Dataset::baseline();
    let filters = FilterState {
        region: Some("Dubai".to_string()),
        ..FilterState::default()
    };
    let view = filtered_view(&dataset, &filters);

    assert_eq!(view.monthly.len(), 2, "baseline has exactly two Dubai months");
    assert_eq!(view.monthly[0].month, "Jun");
    assert_eq!(view.monthly[0].premium, 610_000.0);
    assert_eq!(view.monthly[1].month, "Jul");
    assert_eq!(view.monthly[1].premium, 550_000.0);

    let kpis = kpi_summary(&view);
    assert_eq!(kpis.premium, 1_160_000.0);
    assert_eq!(kpis.claims, 587_400.0);
    assert_eq!(kpis.policies, 778);
    assert_eq!(kpis.loss_ratio, "50.6");

    assert_eq!(view.recent_claims.len(), 3);
    assert!(view.recent_claims.iter().all(|row| row.region == "Dubai"));
}

#[test]
fn product_filter_leaves_region_table_untouched() {
    let dataset = Dataset::baseline();
    let filters = FilterState {
        product: Some("Extended Warranty".to_string()),
        ..FilterState::default()
    };
    let view = filtered_view(&dataset, &filters);

    assert_eq!(view.monthly.len(), 4);
    assert!(view
        .monthly
        .iter()
        .all(|row| row.product == "Extended Warranty"));
    assert_eq!(view.dealers.len(), 4);
    assert_eq!(view.products.len(), 1);
    assert_eq!(view.products[0].product, "Extended Warranty");
    assert_eq!(
        view.regions.len(),
        dataset.regions.len(),
        "region table should not react to the product filter"
    );
    assert_eq!(view.recent_claims.len(), 4);
}

#[test]
fn dealer_filter_only_narrows_dealer_table() {
    let dataset = Dataset::baseline();
    let filters = FilterState {
        dealer: Some("Al Futtaim Motors".to_string()),
        ..FilterState::default()
    };
    let view = filtered_view(&dataset, &filters);

    assert_eq!(view.dealers.len(), 1);
    assert_eq!(view.dealers[0].name, "Al Futtaim Motors");
    assert_eq!(view.monthly.len(), dataset.monthly.len());
    assert_eq!(view.regions.len(), dataset.regions.len());
    assert_eq!(view.recent_claims.len(), dataset.recent_claims.len());
}

#[test]
fn trailing_window_keeps_last_entries_in_order() {
    let months: Vec<MonthlyRecord> = (1..=24)
        .map(|idx| month_row(&format!("M{idx}"), 1_000.0 + idx as f64, 400.0, 10))
        .collect();
    let dataset = monthly_only(months);

    let last_three = filtered_view(
        &dataset,
        &FilterState {
            date_range: DateRange::Last3Months,
            ..FilterState::default()
        },
    );
    let labels: Vec<&str> = last_three
        .monthly
        .iter()
        .map(|row| row.month.as_str())
        .collect();
    assert_eq!(labels, vec!["M22", "M23", "M24"]);

    let last_month = filtered_view(
        &dataset,
        &FilterState {
            date_range: DateRange::Last30Days,
            ..FilterState::default()
        },
    );
    assert_eq!(last_month.monthly.len(), 1);
    assert_eq!(last_month.monthly[0].month, "M24");

    let all_time = filtered_view(&dataset, &FilterState::default());
    assert_eq!(all_time.monthly.len(), 24);

    let short = filtered_view(
        &monthly_only(vec![month_row("Only", 900.0, 100.0, 4)]),
        &FilterState {
            date_range: DateRange::Last6Months,
            ..FilterState::default()
        },
    );
    assert_eq!(
        short.monthly.len(),
        1,
        "window larger than the series keeps everything"
    );
}

#[test]
fn unknown_range_label_defaults_to_twelve_months() {
    assert_eq!(DateRange::from_label("Last 3 Months"), DateRange::Last3Months);
    assert_eq!(DateRange::from_label("Last Fortnight"), DateRange::LastYear);
    assert_eq!(DateRange::from_label("Last Fortnight").window_months(), Some(12));
    assert_eq!(DateRange::AllTime.window_months(), None);

    let months: Vec<MonthlyRecord> = (1..=24)
        .map(|idx| month_row(&format!("M{idx}"), 1_000.0, 400.0, 10))
        .collect();
    let view = filtered_view(
        &monthly_only(months),
        &FilterState {
            date_range: DateRange::from_label("something else"),
            ..FilterState::default()
        },
    );
    assert_eq!(view.monthly.len(), 12);
    assert_eq!(view.monthly[0].month, "M13");
}

#[test]
fn empty_view_reports_zero_kpis() {
    let dataset = Dataset::baseline();
    let filters = FilterState {
        region: Some("Nowhere".to_string()),
        ..FilterState::default()
    };
    let view = filtered_view(&dataset, &filters);

    assert!(view.monthly.is_empty());

    let kpis = kpi_summary(&view);
    assert_eq!(kpis.premium, 0.0);
    assert_eq!(kpis.claims, 0.0);
    assert_eq!(kpis.policies, 0);
    assert_eq!(kpis.loss_ratio, "0.0", "zero premium must not divide");
}

#[test]
fn loss_ratio_is_formatted_to_one_decimal() {
    let view = view_of(vec![month_row("Jan", 1_000.0, 457.0, 12)]);
    let kpis = kpi_summary(&view);
    assert_eq!(kpis.loss_ratio, "45.7");
}

#[test]
fn format_amount_groups_thousands() {
    assert_eq!(format_amount(0.0), "0");
    assert_eq!(format_amount(999.4), "999");
    assert_eq!(format_amount(999.5), "1,000");
    assert_eq!(format_amount(1_160_000.0), "1,160,000");
    assert_eq!(format_amount(-12_345.0), "-12,345");
}

#[test]
fn parse_amount_tolerates_separators() {
    assert_eq!(parse_amount("1,234.5"), Some(1_234.5));
    assert_eq!(parse_amount(" 42 "), Some(42.0));
    assert_eq!(parse_amount("-5"), Some(-5.0));
    assert_eq!(parse_amount(""), None);
    assert_eq!(parse_amount("abc"), None);
}

#[test]
fn claim_status_breakdown_counts_by_status() {
    let dataset = Dataset::baseline();
    let view = filtered_view(&dataset, &FilterState::default());
    let slices = claim_status_breakdown(&view);

    assert_eq!(slices.len(), 4);
    assert_eq!(slices[0].status, ClaimStatus::Approved);
    assert_eq!(slices[0].count, 4);
    assert_eq!(slices[0].amount, 30_110.0);
    assert_eq!(slices[0].color, "#10b981");
    assert_eq!(slices[1].status, ClaimStatus::Rejected);
    assert_eq!(slices[1].count, 1);
    assert_eq!(slices[1].amount, 1_980.0);
    assert_eq!(slices[2].status, ClaimStatus::Reversed);
    assert_eq!(slices[2].count, 1);
    assert_eq!(slices[2].amount, 4_450.0);
    assert_eq!(slices[3].status, ClaimStatus::Pending);
    assert_eq!(slices[3].count, 2);
    assert_eq!(slices[3].amount, 18_450.0);
}

#[test]
fn filter_options_list_distinct_sorted_values() {
    let options = filter_options(&Dataset::baseline());

    assert_eq!(
        options.regions,
        vec!["Abu Dhabi", "Ajman", "Dubai", "Sharjah"]
    );
    assert_eq!(
        options.products,
        vec!["Extended Warranty", "GAP Insurance", "Service Contract"]
    );
    assert_eq!(options.dealers.len(), 7);
    assert_eq!(options.dealers[0], "Al Futtaim Motors");
    assert_eq!(options.dealers[6], "Premier Motors");
}

#[test]
fn csv_import_infers_columns_and_rows() {
    let temp_dir = unique_test_dir("csv-import");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let csv_path = temp_dir.join("policies.csv");
    fs::write(
        &csv_path,
        "Policy No,Premium\nP-1001,1200\nP-1002,980\nP-1003,1450\n",
    )
    .expect("should write csv fixture");

    let table = parse_csv(&csv_path).expect("csv parse should succeed");

    assert_eq!(table.columns, vec!["Policy No", "Premium"]);
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.rows[0], vec!["P-1001", "1200"]);
    assert_eq!(table.rows[2], vec!["P-1003", "1450"]);
    assert_eq!(table.source_name, "policies.csv");
    assert!(!table.has_edits());

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn corrupt_uploads_fail_without_panicking() {
    let temp_dir = unique_test_dir("corrupt-import");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");

    let garbage_csv = temp_dir.join("garbage.csv");
    fs::write(&garbage_csv, [0xFF_u8, 0xFE, 0x00, 0x42, 0xFF, 0x01]).expect("should write bytes");
    assert!(
        parse_spreadsheet(&garbage_csv).is_err(),
        "binary garbage should be rejected"
    );

    let garbage_xlsx = temp_dir.join("garbage.xlsx");
    fs::write(&garbage_xlsx, b"not a workbook at all").expect("should write bytes");
    assert!(
        parse_spreadsheet(&garbage_xlsx).is_err(),
        "fake workbook should be rejected"
    );

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn empty_csv_yields_no_columns() {
    let temp_dir = unique_test_dir("empty-csv");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let csv_path = temp_dir.join("empty.csv");
    fs::write(&csv_path, "name,city\n").expect("should write csv fixture");

    let table = parse_csv(&csv_path).expect("header-only csv should parse");

    assert!(table.rows.is_empty());
    assert!(
        table.columns.is_empty(),
        "a table without data rows exposes no columns"
    );

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn workbook_import_reads_first_sheet_only() {
    let temp_dir = unique_test_dir("xlsx-import");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let xlsx_path = temp_dir.join("policies.xlsx");

    let mut workbook = Workbook::new();
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Sales").expect("should name sheet");
        sheet.write_string(0, 0, "Policy No").expect("should write header");
        sheet.write_string(0, 1, "Premium").expect("should write header");
        sheet.write_string(1, 0, "P-1001").expect("should write cell");
        sheet.write_number(1, 1, 1200.0).expect("should write cell");
        sheet.write_string(2, 0, "P-1002").expect("should write cell");
        sheet.write_number(2, 1, 980.5).expect("should write cell");
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Claims").expect("should name sheet");
        sheet.write_string(0, 0, "Claim No").expect("should write header");
        sheet.write_string(1, 0, "C-1").expect("should write cell");
    }
    workbook.save(&xlsx_path).expect("should save workbook fixture");

    let table = parse_workbook(&xlsx_path).expect("workbook parse should succeed");

    assert_eq!(table.source_name, "policies.xlsx");
    assert_eq!(table.columns, vec!["Policy No", "Premium"]);
    assert_eq!(table.row_count(), 2, "second sheet must be ignored");
    assert_eq!(table.rows[0], vec!["P-1001", "1200"]);
    assert_eq!(table.rows[1], vec!["P-1002", "980.5"]);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn import_batch_skips_unsupported_and_broken_files() {
    let temp_dir = unique_test_dir("import-batch");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");

    let good = temp_dir.join("good.csv");
    fs::write(&good, "Policy No,Premium\nP-1,100\n").expect("should write csv fixture");
    let notes = temp_dir.join("notes.txt");
    fs::write(&notes, "not tabular").expect("should write txt fixture");
    let broken = temp_dir.join("broken.xlsx");
    fs::write(&broken, b"zip? no").expect("should write broken fixture");

    let outcome = import_batch(&[notes, broken, good]);

    assert_eq!(outcome.tables.len(), 1, "only the csv should import");
    assert_eq!(outcome.tables[0].source_name, "good.csv");
    assert_eq!(outcome.skipped, 1, "txt is filtered before parsing");
    assert_eq!(outcome.failed, 1, "broken workbook fails but batch continues");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn uploaded_cell_edits_are_validated_and_logged() {
    let mut table = sample_table();
    let mut log: Vec<ChangeLogEntry> = Vec::new();

    let update = update_cell(&mut table, &mut log, 0, "Premium", "1,500")
        .expect("numeric edit should be accepted");
    assert_eq!(update.old_value, "1200");
    assert_eq!(update.new_value, "1,500");
    assert_eq!(table.rows[0][1], "1,500");
    assert!(table.has_edits());
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].table, "sales.csv");
    assert_eq!(log[0].column, "Premium");
    assert_eq!(log[0].old_value, "1200");

    update_cell(&mut table, &mut log, 1, "premium", "2000")
        .expect("column lookup should ignore case");

    let err = update_cell(&mut table, &mut log, 0, "Premium", "abc")
        .expect_err("non-numeric premium should be rejected");
    assert!(err.to_string().contains("must be numeric"), "got: {err}");

    let err = update_cell(&mut table, &mut log, 0, "Premium", "-10")
        .expect_err("negative premium should be rejected");
    assert!(err.to_string().contains(">= 0"), "got: {err}");

    update_cell(&mut table, &mut log, 1, "Claim Status", "reversed")
        .expect("status parsing should ignore case");
    let err = update_cell(&mut table, &mut log, 1, "Claim Status", "Paused")
        .expect_err("unknown status should be rejected");
    assert!(err.to_string().contains("must be one of"), "got: {err}");

    assert!(update_cell(&mut table, &mut log, 9, "Premium", "1").is_err());
    assert!(update_cell(&mut table, &mut log, 0, "Nope", "1").is_err());

    assert_eq!(log.len(), 3, "only accepted edits are logged");
}

#[test]
fn reset_restores_original_rows_and_clears_log() {
    let mut table = sample_table();
    let mut log: Vec<ChangeLogEntry> = Vec::new();

    update_cell(&mut table, &mut log, 0, "Premium", "1500").expect("edit should be accepted");
    update_cell(&mut table, &mut log, 1, "Premium", "950").expect("edit should be accepted");
    log.push(ChangeLogEntry {
        timestamp: Local::now(),
        table: "other.csv".to_string(),
        row: 0,
        column: "Premium".to_string(),
        old_value: "1".to_string(),
        new_value: "2".to_string(),
    });
    assert!(table.has_edits());

    let reverted = reset_table(&mut table, &mut log);

    assert_eq!(reverted, 2, "both edits to this table are reverted");
    assert!(!table.has_edits());
    assert_eq!(table.rows[0][1], "1200");
    assert_eq!(table.rows[1][1], "900");
    assert_eq!(log.len(), 1, "entries for other tables survive a reset");
    assert_eq!(log[0].table, "other.csv");
}

#[test]
fn insights_flag_loss_ratio_bands() {
    let high = view_of(vec![month_row("Jan", 1_000.0, 900.0, 12)]);
    let cards = insights(&high, &kpi_summary(&high));
    assert_eq!(cards[0].kind, InsightKind::Warning);
    assert_eq!(cards[0].title, "High Loss Ratio Alert");
    assert_eq!(cards[0].metric, "90.0%");
    assert_eq!(cards[0].trend, Trend::Down);

    let elevated = view_of(vec![month_row("Jan", 1_000.0, 700.0, 12)]);
    let cards = insights(&elevated, &kpi_summary(&elevated));
    assert_eq!(cards[0].kind, InsightKind::Warning);
    assert_eq!(cards[0].title, "Elevated Loss Ratio");
    assert_eq!(cards[0].trend, Trend::Neutral);

    let healthy = view_of(vec![month_row("Jan", 1_000.0, 300.0, 12)]);
    let cards = insights(&healthy, &kpi_summary(&healthy));
    assert_eq!(cards.len(), 1, "no dealers and too few months for more");
    assert_eq!(cards[0].kind, InsightKind::Success);
    assert_eq!(cards[0].title, "Healthy Performance");
    assert_eq!(cards[0].trend, Trend::Up);
}

#[test]
fn insights_call_out_best_and_worst_dealers() {
    let mut view = view_of(vec![month_row("Jan", 10_000.0, 2_000.0, 80)]);
    view.dealers = vec![
        dealer_row("Risky Motors", 500.0, 750.0, 20, 150.0),
        dealer_row("Star Motors", 2_000.0, 400.0, 40, 20.0),
        dealer_row("Tiny Motors", 90.0, 400.0, 5, 444.4),
    ];
    let cards = insights(&view, &kpi_summary(&view));

    let danger = cards
        .iter()
        .find(|card| card.kind == InsightKind::Danger)
        .expect("a dealer above 100% loss ratio should raise a danger card");
    assert_eq!(danger.title, "Critical Dealer Risk");
    assert!(danger.description.contains("Risky Motors"));
    assert_eq!(danger.metric, "150.0% LR");

    let info = cards
        .iter()
        .find(|card| card.kind == InsightKind::Info)
        .expect("the top dealer by premium should raise an info card");
    assert_eq!(info.title, "Top Performer");
    assert!(info.description.contains("Star Motors"));
    assert_eq!(info.metric, "40 Policies");

    assert!(
        !cards.iter().any(|card| card.description.contains("Tiny Motors")),
        "dealers with ten or fewer policies are ignored"
    );
}

#[test]
fn insights_forecast_next_month_premium() {
    let growing = view_of(vec![
        month_row("Jan", 100.0, 30.0, 5),
        month_row("Feb", 110.0, 30.0, 5),
        month_row("Mar", 121.0, 30.0, 5),
    ]);
    let cards = insights(&growing, &kpi_summary(&growing));
    let forecast = cards
        .iter()
        .find(|card| card.kind == InsightKind::Forecast)
        .expect("three months of data should produce a forecast");
    assert_eq!(forecast.title, "Sales Forecast");
    assert_eq!(forecast.metric, "133");
    assert_eq!(forecast.trend, Trend::Up);
    assert!(forecast.description.contains("+10.0%"));

    let declining = view_of(vec![
        month_row("Jan", 121.0, 30.0, 5),
        month_row("Feb", 110.0, 30.0, 5),
        month_row("Mar", 100.0, 30.0, 5),
    ]);
    let cards = insights(&declining, &kpi_summary(&declining));
    let forecast = cards
        .iter()
        .find(|card| card.kind == InsightKind::Forecast)
        .expect("three months of data should produce a forecast");
    assert_eq!(forecast.trend, Trend::Down);

    let sparse = view_of(vec![
        month_row("Jan", 100.0, 30.0, 5),
        month_row("Feb", 110.0, 30.0, 5),
    ]);
    let cards = insights(&sparse, &kpi_summary(&sparse));
    assert!(
        !cards.iter().any(|card| card.kind == InsightKind::Forecast),
        "fewer than three months cannot be projected"
    );
}

#[test]
fn validate_table_reports_structural_issues() {
    let empty = UploadedTable::new(
        "empty.csv".to_string(),
        vec!["Policy No".to_string()],
        Vec::new(),
    );
    let report = validate_table(&empty);
    assert_eq!(report.status, ValidationStatus::Error);
    assert_eq!(report.issues.len(), 1);

    let messy = UploadedTable::new(
        "messy.csv".to_string(),
        vec!["Policy No".to_string(), "Premium".to_string()],
        vec![
            vec!["P-1".to_string(), "100".to_string()],
            vec!["P-1".to_string(), "abc".to_string()],
            vec!["P-2".to_string(), "300".to_string()],
        ],
    );
    let report = validate_table(&messy);
    assert_eq!(report.status, ValidationStatus::Warning);
    assert!(report
        .issues
        .iter()
        .any(|issue| issue.message == "Found 1 duplicate Policy No values."));
    assert!(report
        .issues
        .iter()
        .any(|issue| issue.message == "Found 1 non-numeric values in Premium column."));

    let clean = sample_table();
    let report = validate_table(&clean);
    assert_eq!(report.status, ValidationStatus::Valid);
    assert!(report.issues.is_empty());
}

#[test]
fn csv_export_round_trips_monthly_view() {
    let temp_dir = unique_test_dir("csv-export");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let csv_path = temp_dir.join("monthly.csv");

    let dataset = Dataset::baseline();
    let filters = FilterState {
        region: Some("Dubai".to_string()),
        ..FilterState::default()
    };
    let view = filtered_view(&dataset, &filters);

    write_monthly_csv(&csv_path, &view.monthly).expect("export should succeed");

    let mut reader = csv::Reader::from_path(&csv_path).expect("should reopen exported csv");
    let headers: Vec<String> = reader
        .headers()
        .expect("exported csv should have headers")
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(headers, MONTHLY_HEADERS);

    let records: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("exported rows should parse");
    assert_eq!(records.len(), 2);
    assert_eq!(&records[0][0], "Jun");
    assert_eq!(&records[0][1], "610000");
    assert_eq!(&records[1][0], "Jul");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn table_export_writes_working_rows() {
    let temp_dir = unique_test_dir("table-export");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let csv_path = temp_dir.join("sales.csv");

    let mut table = sample_table();
    let mut log: Vec<ChangeLogEntry> = Vec::new();
    update_cell(&mut table, &mut log, 0, "Premium", "1,500").expect("edit should be accepted");

    write_table_csv(&csv_path, &table).expect("export should succeed");

    let reread = parse_csv(&csv_path).expect("exported table should parse");
    assert_eq!(reread.columns, table.columns);
    assert_eq!(reread.rows, table.rows, "edited values are what exports");
    assert_eq!(reread.rows[0][1], "1,500");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}
