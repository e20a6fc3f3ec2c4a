use crate::models::filter::FilterState;
use crate::models::list::{Direction, TransactionListView, TransactionRow};
use crate::models::snapshot::Loadable;
use crate::models::transaction::Transaction;
use crate::services::filter_service::apply_filters;
use crate::services::format_service::{format_amount, format_display_date};

pub const EMPTY_TITLE: &str = "No matching transaction found for the selected filter";
pub const EMPTY_MESSAGE: &str =
    "Change your filters to see more results, or add a new product.";

/// Build the display row for one transaction.
pub fn build_row(transaction: &Transaction) -> TransactionRow {
    let title = first_non_empty(&[transaction.product_name(), transaction.kind()])
        .unwrap_or("Transaction")
        .to_string();

    let status = transaction.status.map(|s| s.as_str()).unwrap_or("");
    let subtitle = first_non_empty(&[transaction.metadata_name(), status])
        .unwrap_or("")
        .to_string();

    let date = transaction
        .timestamp()
        .map(format_display_date)
        .unwrap_or_else(|| transaction.date.clone());

    TransactionRow {
        title,
        subtitle,
        amount: format!("USD {}", format_amount(transaction.amount)),
        date,
        direction: if transaction.is_withdrawal() {
            Direction::Outgoing
        } else {
            Direction::Incoming
        },
    }
}

/// Decide what the transaction list shows.
///
/// A snapshot still loading yields `Loading`; a failed snapshot reads as
/// empty, like a filter that matched nothing.
pub fn build_list_view(
    snapshot: &Loadable<Vec<Transaction>>,
    filters: &FilterState,
) -> TransactionListView {
    if snapshot.is_loading() {
        return TransactionListView::Loading;
    }

    let filtered = apply_filters(snapshot.items(), filters);
    if filtered.is_empty() {
        return TransactionListView::Empty {
            title: EMPTY_TITLE.to_string(),
            message: EMPTY_MESSAGE.to_string(),
        };
    }

    TransactionListView::Populated {
        heading: format!("{} Transactions", filtered.len()),
        subheading: format!("Your transactions for {}", filters.date_range_label()),
        rows: filtered.iter().map(build_row).collect(),
    }
}

fn first_non_empty<'a>(candidates: &[&'a str]) -> Option<&'a str> {
    candidates.iter().copied().find(|s| !s.is_empty())
}
