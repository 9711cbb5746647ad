use crate::domain::entities::dataset::{FilteredView, KpiSummary, StatusSlice};
use crate::domain::entities::records::ClaimStatus;

pub fn kpi_summary(view: &FilteredView) -> KpiSummary {
    let premium: f64 = view.monthly.iter().map(|row| row.premium).sum();
    let claims: f64 = view.monthly.iter().map(|row| row.claims).sum();
    let policies: u64 = view.monthly.iter().map(|row| u64::from(row.policies)).sum();

    let loss_ratio = if premium > 0.0 {
        format!("{:.1}", claims / premium * 100.0)
    } else {
        "0.0".to_string()
    };

    KpiSummary {
        premium,
        claims,
        policies,
        loss_ratio,
    }
}

pub fn format_amount(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

pub fn claim_status_breakdown(view: &FilteredView) -> Vec<StatusSlice> {
    ClaimStatus::ALL
        .iter()
        .map(|&status| {
            let mut count = 0_u32;
            let mut amount = 0.0_f64;
            for entry in view.recent_claims.iter().filter(|e| e.status == status) {
                count += 1;
                amount += entry.amount;
            }
            StatusSlice {
                status,
                count,
                amount,
                color: status.color(),
            }
        })
        .collect()
}
