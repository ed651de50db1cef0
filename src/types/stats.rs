//! Aggregated statistics produced from a record collection

use chrono::NaiveDate;
use serde::Serialize;

use super::SugarLevel;

/// Occurrence count of one brand
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BrandCount {
    pub brand: String,
    pub count: u64,
    pub total_spent: f64,
}

/// Records grouped by the Monday that starts their week
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeeklyBucket {
    /// Monday of the week, serialized as YYYY-MM-DD
    pub key: NaiveDate,
    /// "{startMonth}.{startDay}-{endMonth}.{endDay}", e.g. "1.1-1.7"
    pub label: String,
    pub count: u64,
    pub amount: f64,
}

/// Spend per calendar month number. The year is not part of the key.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlySpend {
    pub month: u32,
    /// Two-digit month, e.g. "03"
    pub label: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SugarCount {
    pub sugar: SugarLevel,
    pub count: u64,
}

impl SugarCount {
    /// Share of `total` records, in [0, 1]
    pub fn share(&self, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            self.count as f64 / total as f64
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct Overview {
    pub record_count: u64,
    pub total_spent: f64,
    pub average_price: f64,
}

/// Everything the stats view shows, in one serializable bundle
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatsReport {
    pub overview: Overview,
    pub top_brands: Vec<BrandCount>,
    pub weekly: Vec<WeeklyBucket>,
    pub monthly: Vec<MonthlySpend>,
    pub sugar: Vec<SugarCount>,
}
