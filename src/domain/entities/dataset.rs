use chrono::NaiveDate;

use crate::domain::entities::records::{
    ClaimLogEntry, ClaimStatus, ClaimTypeRecord, DealerRecord, MonthlyRecord, ProductRecord,
    RegionRecord,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub monthly: Vec<MonthlyRecord>,
    pub dealers: Vec<DealerRecord>,
    pub regions: Vec<RegionRecord>,
    pub products: Vec<ProductRecord>,
    pub claim_types: Vec<ClaimTypeRecord>,
    pub recent_claims: Vec<ClaimLogEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    pub monthly: Vec<MonthlyRecord>,
    pub dealers: Vec<DealerRecord>,
    pub regions: Vec<RegionRecord>,
    pub products: Vec<ProductRecord>,
    pub recent_claims: Vec<ClaimLogEntry>,
    pub claim_types: Vec<ClaimTypeRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KpiSummary {
    pub premium: f64,
    pub claims: f64,
    pub policies: u64,
    pub loss_ratio: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub regions: Vec<String>,
    pub products: Vec<String>,
    pub dealers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusSlice {
    pub status: ClaimStatus,
    pub count: u32,
    pub amount: f64,
    pub color: &'static str,
}

fn month(
    month: &str,
    premium: f64,
    claims: f64,
    policies: u32,
    region: &str,
    product: &str,
) -> MonthlyRecord {
    MonthlyRecord {
        month: month.to_string(),
        premium,
        claims,
        policies,
        region: region.to_string(),
        product: product.to_string(),
    }
}

fn dealer(
    name: &str,
    premium: f64,
    claims: f64,
    policies: u32,
    loss_ratio: f64,
    region: &str,
    product: &str,
) -> DealerRecord {
    DealerRecord {
        name: name.to_string(),
        premium,
        claims,
        policies,
        loss_ratio,
        region: region.to_string(),
        product: product.to_string(),
    }
}

fn region(region: &str, premium: f64, claims: f64, policies: u32, dealer_count: u32) -> RegionRecord {
    RegionRecord {
        region: region.to_string(),
        premium,
        claims,
        policies,
        dealer_count,
    }
}

fn product(product: &str, count: u32, premium: f64, claims: f64) -> ProductRecord {
    ProductRecord {
        product: product.to_string(),
        count,
        premium,
        claims,
    }
}

fn claim_type(name: &str, share: f64, amount: f64, color: &str) -> ClaimTypeRecord {
    ClaimTypeRecord {
        name: name.to_string(),
        share,
        amount,
        color: color.to_string(),
    }
}

fn claim(
    id: &str,
    policy_id: &str,
    region: &str,
    product: &str,
    amount: f64,
    date: NaiveDate,
    status: ClaimStatus,
) -> ClaimLogEntry {
    ClaimLogEntry {
        id: id.to_string(),
        policy_id: policy_id.to_string(),
        region: region.to_string(),
        product: product.to_string(),
        amount,
        date,
        status,
    }
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("baseline dates should be valid")
}

impl Dataset {
    pub fn baseline() -> Dataset {
        Dataset {
            monthly: vec![
                month("Jan", 420_000.0, 185_000.0, 310, "Abu Dhabi", "Extended Warranty"),
                month("Feb", 455_000.0, 210_500.0, 335, "Sharjah", "Service Contract"),
                month("Mar", 498_000.0, 244_000.0, 352, "Abu Dhabi", "GAP Insurance"),
                month("Apr", 530_000.0, 198_000.0, 361, "Ajman", "Extended Warranty"),
                month("May", 575_000.0, 262_500.0, 389, "Sharjah", "Extended Warranty"),
                month("Jun", 610_000.0, 300_000.0, 401, "Dubai", "Service Contract"),
                month("Jul", 550_000.0, 287_400.0, 377, "Dubai", "Extended Warranty"),
                month("Aug", 640_000.0, 276_000.0, 415, "Abu Dhabi", "Service Contract"),
            ],
            dealers: vec![
                dealer("Al Futtaim Motors", 512_000.0, 234_000.0, 342, 45.7, "Dubai", "Extended Warranty"),
                dealer("Juma Al Majid", 448_000.0, 189_000.0, 301, 42.2, "Dubai", "Service Contract"),
                dealer("Al Habtoor Motors", 396_500.0, 142_000.0, 265, 35.8, "Dubai", "GAP Insurance"),
                dealer("Premier Motors", 421_000.0, 260_000.0, 280, 61.8, "Abu Dhabi", "Extended Warranty"),
                dealer("Al Masaood Automobiles", 355_000.0, 171_500.0, 244, 48.3, "Abu Dhabi", "Service Contract"),
                dealer("Liberty Automobiles", 298_000.0, 119_000.0, 201, 39.9, "Sharjah", "Extended Warranty"),
                dealer("Crown Motors", 265_000.0, 99_000.0, 180, 37.4, "Ajman", "Extended Warranty"),
            ],
            regions: vec![
                region("Dubai", 1_356_500.0, 565_000.0, 908, 3),
                region("Abu Dhabi", 776_000.0, 431_500.0, 524, 2),
                region("Sharjah", 298_000.0, 119_000.0, 201, 1),
                region("Ajman", 265_000.0, 99_000.0, 180, 1),
            ],
            products: vec![
                product("Extended Warranty", 1003, 1_496_000.0, 712_000.0),
                product("Service Contract", 545, 803_000.0, 360_500.0),
                product("GAP Insurance", 265, 396_500.0, 142_000.0),
            ],
            claim_types: vec![
                claim_type("Mechanical Failure", 38.0, 412_000.0, "#3b82f6"),
                claim_type("Electrical Fault", 26.0, 281_000.0, "#10b981"),
                claim_type("Accidental Damage", 19.0, 205_500.0, "#f59e0b"),
                claim_type("Total Loss", 10.0, 108_000.0, "#ef4444"),
                claim_type("Other", 7.0, 75_600.0, "#64748b"),
            ],
            recent_claims: vec![
                claim("CL-1041", "POL-20344", "Dubai", "Extended Warranty", 8_400.0, day(2024, 8, 14), ClaimStatus::Approved),
                claim("CL-1040", "POL-19872", "Abu Dhabi", "Service Contract", 3_150.0, day(2024, 8, 11), ClaimStatus::Pending),
                claim("CL-1039", "POL-20011", "Dubai", "Service Contract", 12_750.0, day(2024, 8, 9), ClaimStatus::Approved),
                claim("CL-1038", "POL-18453", "Sharjah", "Extended Warranty", 1_980.0, day(2024, 8, 5), ClaimStatus::Rejected),
                claim("CL-1037", "POL-19214", "Abu Dhabi", "Extended Warranty", 6_200.0, day(2024, 7, 30), ClaimStatus::Approved),
                claim("CL-1036", "POL-17702", "Ajman", "Extended Warranty", 4_450.0, day(2024, 7, 22), ClaimStatus::Reversed),
                claim("CL-1035", "POL-19650", "Dubai", "GAP Insurance", 15_300.0, day(2024, 7, 18), ClaimStatus::Pending),
                claim("CL-1034", "POL-18110", "Abu Dhabi", "Service Contract", 2_760.0, day(2024, 7, 12), ClaimStatus::Approved),
            ],
        }
    }
}
