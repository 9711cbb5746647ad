use crate::domain::entities::dataset::{FilteredView, KpiSummary};
use crate::domain::entities::insight::{Insight, InsightKind, Trend};
use crate::domain::entities::records::DealerRecord;
use crate::usecase::services::metrics_service::format_amount;

pub fn insights(view: &FilteredView, kpis: &KpiSummary) -> Vec<Insight> {
    let mut out = Vec::new();

    let loss_ratio = if kpis.premium > 0.0 {
        kpis.claims / kpis.premium * 100.0
    } else {
        0.0
    };

    if loss_ratio > 80.0 {
        out.push(Insight {
            kind: InsightKind::Warning,
            title: "High Loss Ratio Alert".to_string(),
            description: format!(
                "Overall loss ratio is {loss_ratio:.1}%, which is critical. Review high-risk dealers immediately."
            ),
            metric: format!("{loss_ratio:.1}%"),
            trend: Trend::Down,
        });
    } else if loss_ratio > 60.0 {
        out.push(Insight {
            kind: InsightKind::Warning,
            title: "Elevated Loss Ratio".to_string(),
            description: format!(
                "Loss ratio of {loss_ratio:.1}% is above the healthy threshold of 60%."
            ),
            metric: format!("{loss_ratio:.1}%"),
            trend: Trend::Neutral,
        });
    } else {
        out.push(Insight {
            kind: InsightKind::Success,
            title: "Healthy Performance".to_string(),
            description: format!("Loss ratio of {loss_ratio:.1}% is within profitable range."),
            metric: format!("{loss_ratio:.1}%"),
            trend: Trend::Up,
        });
    }

    let major: Vec<&DealerRecord> = view.dealers.iter().filter(|d| d.policies > 10).collect();
    if let Some(worst) = major.iter().max_by(|a, b| a.loss_ratio.total_cmp(&b.loss_ratio)) {
        if worst.loss_ratio > 100.0 {
            out.push(Insight {
                kind: InsightKind::Danger,
                title: "Critical Dealer Risk".to_string(),
                description: format!(
                    "Dealer {} has {:.1}% loss ratio.",
                    worst.name, worst.loss_ratio
                ),
                metric: format!("{:.1}% LR", worst.loss_ratio),
                trend: Trend::Down,
            });
        }
    }
    if let Some(best) = major.iter().max_by(|a, b| a.premium.total_cmp(&b.premium)) {
        out.push(Insight {
            kind: InsightKind::Info,
            title: "Top Performer".to_string(),
            description: format!(
                "Dealer {} leads with {} in premium.",
                best.name,
                format_amount(best.premium)
            ),
            metric: format!("{} Policies", best.policies),
            trend: Trend::Up,
        });
    }

    if view.monthly.len() >= 3 {
        let last_three = &view.monthly[view.monthly.len() - 3..];
        let mut growth_rates = Vec::new();
        for pair in last_three.windows(2) {
            let prev = pair[0].premium;
            let curr = pair[1].premium;
            if prev > 0.0 {
                growth_rates.push((curr - prev) / prev);
            }
        }
        let avg_growth = if growth_rates.is_empty() {
            0.0
        } else {
            growth_rates.iter().sum::<f64>() / growth_rates.len() as f64
        };

        let last_premium = last_three[last_three.len() - 1].premium;
        let projected = last_premium * (1.0 + avg_growth);

        out.push(Insight {
            kind: InsightKind::Forecast,
            title: "Sales Forecast".to_string(),
            description: format!(
                "Based on recent trends, next month's premium is projected to be around {} ({:+.1}%).",
                format_amount(projected),
                avg_growth * 100.0
            ),
            metric: format_amount(projected),
            trend: if avg_growth > 0.0 { Trend::Up } else { Trend::Down },
        });
    }

    out
}
