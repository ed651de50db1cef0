//! Plain-text and JSON rendering for `list` and `stats`

use serde::Serialize;
use std::fmt::Write;

use teatrack::types::{Result, StatsReport, TeaRecord, TeatrackError};

const BAR_WIDTH: usize = 20;
const SHORT_ID_LEN: usize = 8;

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| TeatrackError::Parse(e.to_string()))
}

fn short_id(id: &str) -> &str {
    id.char_indices()
        .nth(SHORT_ID_LEN)
        .map_or(id, |(idx, _)| &id[..idx])
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// `<id> <date> <brand> <name> ¥<price>`
pub fn summary_line(record: &TeaRecord) -> String {
    format!(
        "{}  {}  {} {}  ¥{:.2}",
        short_id(&record.id),
        record.date,
        record.brand,
        record.name,
        record.price
    )
}

pub fn render_records(records: &[&TeaRecord]) -> String {
    if records.is_empty() {
        return "No records.\n".to_string();
    }
    let mut out = String::new();
    for record in records {
        let _ = writeln!(
            out,
            "{}  {}/{}  {}",
            summary_line(record),
            record.sugar,
            record.ice,
            stars(record.rating)
        );
        if let Some(note) = record.note() {
            let _ = writeln!(out, "          {}", note);
        }
    }
    out
}

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len.min(BAR_WIDTH))
}

pub fn render_stats(report: &StatsReport) -> String {
    let mut out = String::new();
    let overview = &report.overview;
    let _ = writeln!(
        out,
        "Records: {}   Total: ¥{:.2}   Average: ¥{:.2}",
        overview.record_count, overview.total_spent, overview.average_price
    );
    if overview.record_count == 0 {
        return out;
    }

    out.push_str("\nTop brands\n");
    for (i, brand) in report.top_brands.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {}  {} cups  ¥{:.2}",
            i + 1,
            brand.brand,
            brand.count,
            brand.total_spent
        );
    }

    out.push_str("\nWeekly spend\n");
    let max_week = report.weekly.iter().map(|w| w.amount).fold(0.0, f64::max);
    for week in report.weekly.iter().rev() {
        let _ = writeln!(
            out,
            "  {:<11} {:>3} cups  ¥{:>8.2}  {}",
            week.label,
            week.count,
            week.amount,
            bar(week.amount, max_week)
        );
    }

    out.push_str("\nMonthly spend\n");
    let max_month = report.monthly.iter().map(|m| m.amount).fold(0.0, f64::max);
    for month in &report.monthly {
        let _ = writeln!(
            out,
            "  {}月  ¥{:>8.2}  {}",
            month.label,
            month.amount,
            bar(month.amount, max_month)
        );
    }

    out.push_str("\nSugar\n");
    let total = overview.record_count as usize;
    for stat in &report.sugar {
        let _ = writeln!(
            out,
            "  {}  {:>3}  {:>5.1}%",
            stat.sugar,
            stat.count,
            stat.share(total) * 100.0
        );
    }
    out
}
