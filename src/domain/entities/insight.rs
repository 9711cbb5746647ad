#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    Success,
    Info,
    Warning,
    Danger,
    Forecast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    pub metric: String,
    pub trend: Trend,
}
