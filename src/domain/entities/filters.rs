pub const ALL_REGIONS: &str = "All Regions";
pub const ALL_PRODUCTS: &str = "All Products";
pub const ALL_DEALERS: &str = "All Dealers";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    AllTime,
    Last30Days,
    Last3Months,
    Last6Months,
    LastYear,
}

impl Default for DateRange {
    fn default() -> Self {
        DateRange::AllTime
    }
}

impl DateRange {
    pub const ALL: [DateRange; 5] = [
        DateRange::AllTime,
        DateRange::Last30Days,
        DateRange::Last3Months,
        DateRange::Last6Months,
        DateRange::LastYear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DateRange::AllTime => "All Time",
            DateRange::Last30Days => "Last 30 Days",
            DateRange::Last3Months => "Last 3 Months",
            DateRange::Last6Months => "Last 6 Months",
            DateRange::LastYear => "Last Year",
        }
    }

    pub fn window_months(&self) -> Option<usize> {
        match self {
            DateRange::AllTime => None,
            DateRange::Last30Days => Some(1),
            DateRange::Last3Months => Some(3),
            DateRange::Last6Months => Some(6),
            DateRange::LastYear => Some(12),
        }
    }

    pub fn from_label(label: &str) -> DateRange {
        DateRange::ALL
            .iter()
            .copied()
            .find(|range| range.label() == label)
            .unwrap_or(DateRange::LastYear)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub region: Option<String>,
    pub product: Option<String>,
    pub dealer: Option<String>,
    pub date_range: DateRange,
}

impl FilterState {
    pub fn region_label(&self) -> String {
        self.region.clone().unwrap_or_else(|| ALL_REGIONS.to_string())
    }

    pub fn product_label(&self) -> String {
        self.product.clone().unwrap_or_else(|| ALL_PRODUCTS.to_string())
    }

    pub fn dealer_label(&self) -> String {
        self.dealer.clone().unwrap_or_else(|| ALL_DEALERS.to_string())
    }
}
