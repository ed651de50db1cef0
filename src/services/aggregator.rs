//! Aggregator service for computing spending statistics

use crate::types::{
    BrandCount, MonthlySpend, Overview, StatsReport, SugarCount, TeaRecord, WeeklyBucket,
};
use chrono::{Datelike, Duration, NaiveDate};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

/// Number of brands shown in the brand ranking
pub const DEFAULT_TOP_BRANDS: usize = 5;

/// Number of weeks shown in the weekly chart
pub const DEFAULT_CHART_WEEKS: usize = 8;

/// Aggregator for computing spending statistics
pub struct Aggregator;

impl Aggregator {
    /// Rank brands by record count (descending).
    /// Brands with equal counts keep their first-seen order.
    pub fn top_brands(records: &[TeaRecord], n: usize) -> Vec<BrandCount> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<BrandCount> = Vec::new();

        for record in records {
            let slot = *index.entry(record.brand.as_str()).or_insert_with(|| {
                counts.push(BrandCount {
                    brand: record.brand.clone(),
                    count: 0,
                    total_spent: 0.0,
                });
                counts.len() - 1
            });
            counts[slot].count = counts[slot].count.saturating_add(1);
            counts[slot].total_spent += record.price;
        }

        // sort_by is stable, so ties stay in first-seen order
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts.truncate(n);
        counts
    }

    /// Aggregate records by week (Monday start), sorted by week ascending
    pub fn weekly_spend(records: &[TeaRecord]) -> Vec<WeeklyBucket> {
        let mut weeks: BTreeMap<NaiveDate, (u64, f64)> = BTreeMap::new();

        for record in records {
            let slot = weeks.entry(week_start(record.date)).or_insert((0, 0.0));
            slot.0 = slot.0.saturating_add(1);
            slot.1 += record.price;
        }

        weeks
            .into_iter()
            .map(|(monday, (count, amount))| WeeklyBucket {
                key: monday,
                label: week_label(monday),
                count,
                amount,
            })
            .collect()
    }

    /// Sum spend per month number, sorted by month ascending.
    ///
    /// The year is dropped from the key, so March 2023 and March 2024 land in
    /// the same bucket.
    pub fn monthly_spend(records: &[TeaRecord]) -> Vec<MonthlySpend> {
        let mut months: BTreeMap<u32, f64> = BTreeMap::new();

        for record in records {
            *months.entry(record.date.month()).or_insert(0.0) += record.price;
        }

        months
            .into_iter()
            .map(|(month, amount)| MonthlySpend {
                month,
                label: format!("{:02}", month),
                amount,
            })
            .collect()
    }

    /// Count records per sugar level, in first-seen order
    pub fn sugar_distribution(records: &[TeaRecord]) -> Vec<SugarCount> {
        let mut result: Vec<SugarCount> = Vec::new();

        for record in records {
            match result.iter_mut().find(|s| s.sugar == record.sugar) {
                Some(stat) => stat.count = stat.count.saturating_add(1),
                None => result.push(SugarCount {
                    sugar: record.sugar,
                    count: 1,
                }),
            }
        }

        result
    }

    /// Sum of prices; `0.0` (never `-0.0`) when empty
    pub fn total_spent(records: &[TeaRecord]) -> f64 {
        records.iter().fold(0.0, |acc, r| acc + r.price)
    }

    /// Mean price; 0 for an empty collection
    pub fn average_price(records: &[TeaRecord]) -> f64 {
        if records.is_empty() {
            return 0.0;
        }
        Self::total_spent(records) / records.len() as f64
    }

    pub fn overview(records: &[TeaRecord]) -> Overview {
        Overview {
            record_count: records.len() as u64,
            total_spent: Self::total_spent(records),
            average_price: Self::average_price(records),
        }
    }

    /// Case-insensitive substring match on brand or drink name
    pub fn matches(record: &TeaRecord, term: &str) -> bool {
        let term = term.to_lowercase();
        record.brand.to_lowercase().contains(&term) || record.name.to_lowercase().contains(&term)
    }

    /// Newest date first; same-date records newest `created_at` first.
    /// Records equal on both keys keep their input order.
    pub fn sort_for_display(records: &mut [TeaRecord]) {
        records.sort_by(display_order);
    }

    /// Borrowed view of `records` in display order
    pub fn in_display_order(records: &[TeaRecord]) -> Vec<&TeaRecord> {
        let mut sorted: Vec<&TeaRecord> = records.iter().collect();
        sorted.sort_by(|a, b| display_order(a, b));
        sorted
    }

    /// Records matching `term`, in display order
    pub fn search<'a>(records: &'a [TeaRecord], term: &str) -> Vec<&'a TeaRecord> {
        let mut found: Vec<&TeaRecord> = records
            .iter()
            .filter(|r| Self::matches(r, term))
            .collect();
        found.sort_by(|a, b| display_order(a, b));
        found
    }

    /// Last `n` buckets of an ascending weekly series
    pub fn recent_weeks(buckets: &[WeeklyBucket], n: usize) -> &[WeeklyBucket] {
        &buckets[buckets.len().saturating_sub(n)..]
    }

    pub fn report(records: &[TeaRecord], top_n: usize) -> StatsReport {
        StatsReport {
            overview: Self::overview(records),
            top_brands: Self::top_brands(records, top_n),
            weekly: Self::weekly_spend(records),
            monthly: Self::monthly_spend(records),
            sugar: Self::sugar_distribution(records),
        }
    }
}

fn display_order(a: &TeaRecord, b: &TeaRecord) -> Ordering {
    b.date
        .cmp(&a.date)
        .then_with(|| b.created_at.cmp(&a.created_at))
}

/// Monday of the week containing `date` (Sunday belongs to the week before it)
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let days_since_monday = date.weekday().num_days_from_monday();
    date - Duration::days(days_since_monday as i64)
}

/// "M.D-M.D" label for the week starting at `monday`
pub fn week_label(monday: NaiveDate) -> String {
    let sunday = monday + Duration::days(6);
    format!(
        "{}.{}-{}.{}",
        monday.month(),
        monday.day(),
        sunday.month(),
        sunday.day()
    )
}
