use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRecord {
    pub month: String,
    pub premium: f64,
    pub claims: f64,
    pub policies: u32,
    pub region: String,
    pub product: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DealerRecord {
    pub name: String,
    pub premium: f64,
    pub claims: f64,
    pub policies: u32,
    pub loss_ratio: f64,
    pub region: String,
    pub product: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionRecord {
    pub region: String,
    pub premium: f64,
    pub claims: f64,
    pub policies: u32,
    pub dealer_count: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub product: String,
    pub count: u32,
    pub premium: f64,
    pub claims: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClaimTypeRecord {
    pub name: String,
    pub share: f64,
    pub amount: f64,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimStatus {
    Approved,
    Rejected,
    Reversed,
    Pending,
}

impl ClaimStatus {
    pub const ALL: [ClaimStatus; 4] = [
        ClaimStatus::Approved,
        ClaimStatus::Rejected,
        ClaimStatus::Reversed,
        ClaimStatus::Pending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Rejected => "Rejected",
            ClaimStatus::Reversed => "Reversed",
            ClaimStatus::Pending => "Pending",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ClaimStatus::Approved => "#10b981",
            ClaimStatus::Rejected => "#ef4444",
            ClaimStatus::Reversed => "#f59e0b",
            ClaimStatus::Pending => "#3b82f6",
        }
    }

    pub fn parse(value: &str) -> Option<ClaimStatus> {
        ClaimStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl std::fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClaimLogEntry {
    pub id: String,
    pub policy_id: String,
    pub region: String,
    pub product: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub status: ClaimStatus,
}
