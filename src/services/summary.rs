//! Reshape grouped aggregate rows into chart series.

use chrono::Datelike;

use crate::config::MonthBucketing;
use crate::models::chart::ChartSeries;
use crate::models::game::CategoryCount;
use crate::models::reservation::DateCount;
use crate::models::service::ServiceCount;

/// Games per category, in row order. A missing category is labelled `""`.
pub fn summarize_by_category(rows: &[CategoryCount]) -> ChartSeries {
    rows.iter()
        .map(|row| (row.category.clone().unwrap_or_default(), row.count))
        .collect()
}

/// Reservations per month, in first-seen month order.
pub fn summarize_by_month(rows: &[DateCount], bucketing: MonthBucketing) -> ChartSeries {
    // Few distinct months per dashboard; a linear scan keeps insertion order.
    let mut buckets: Vec<(String, i64)> = Vec::new();

    for row in rows {
        let date = row.reservation_date;
        let label = match bucketing {
            MonthBucketing::MergeYears => format!("Month {:02}", date.month()),
            MonthBucketing::PerYear => format!("Month {:04}-{:02}", date.year(), date.month()),
        };

        match buckets.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, count)) => *count += row.count,
            None => buckets.push((label, row.count)),
        }
    }

    buckets.into_iter().collect()
}

/// Reservations per service, one entry per service including empty ones.
pub fn summarize_by_service(rows: &[ServiceCount]) -> ChartSeries {
    rows.iter().map(|row| (row.name.as_str(), row.count)).collect()
}
