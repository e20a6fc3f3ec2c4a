use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::chart::ChartPoint;
use crate::models::filter::FilterState;
use crate::models::transaction::Transaction;
use crate::services::format_service::format_display_date;

/// Turn a (usually already filtered) transaction list into revenue chart
/// points, using the current time for any missing window bound.
///
/// See `project_at`.
pub fn project(transactions: &[Transaction], filters: &FilterState) -> Vec<ChartPoint> {
    project_at(transactions, filters, Utc::now())
}

/// Turn a transaction list into revenue chart points.
///
/// - Non-empty input: one point per transaction, in input order, labelled
///   with its day ("Jan 15, 2024") and valued at its amount. A date that
///   cannot be parsed keeps its raw text as the label.
/// - Empty input: exactly two zero points labelled with the filter's start
///   and end dates (each falling back to `now`), so the chart still draws a
///   baseline.
pub fn project_at(
    transactions: &[Transaction],
    filters: &FilterState,
    now: DateTime<Utc>,
) -> Vec<ChartPoint> {
    if transactions.is_empty() {
        let start = filters.start_date.unwrap_or(now);
        let end = filters.end_date.unwrap_or(now);
        debug!("no transactions to chart, emitting zero baseline");
        return vec![
            ChartPoint::new(format_display_date(start), 0.0),
            ChartPoint::new(format_display_date(end), 0.0),
        ];
    }

    transactions
        .iter()
        .map(|t| ChartPoint::new(transaction_label(t), t.amount))
        .collect()
}

/// Sum of the values of a chart series.
pub fn series_total(points: &[ChartPoint]) -> f64 {
    points.iter().map(|p| p.value).sum()
}

fn transaction_label(transaction: &Transaction) -> String {
    transaction
        .timestamp()
        .map(format_display_date)
        .unwrap_or_else(|| transaction.date.clone())
}
