use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::models::filter::{FilterState, TransactionCategory};
use crate::models::transaction::Transaction;

/// Which transaction field a category rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    /// The coarse top-level `type`
    Kind,
    /// The fine-grained `metadata.type`
    MetadataKind,
}

/// Raw values a category accepts on a single field (exact, case-sensitive).
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub category: TransactionCategory,
    pub field: MatchField,
    pub values: &'static [&'static str],
}

impl CategoryRule {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        let actual = match self.field {
            MatchField::Kind => transaction.kind(),
            MatchField::MetadataKind => transaction.metadata_kind(),
        };
        self.values.iter().any(|v| *v == actual)
    }
}

/// Category → raw value mapping. Adding a category means adding a row here.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: TransactionCategory::StoreTransactions,
        field: MatchField::MetadataKind,
        values: &["digital_product", "webinar"],
    },
    CategoryRule {
        category: TransactionCategory::GetTipped,
        field: MatchField::MetadataKind,
        values: &["coffee"],
    },
    CategoryRule {
        category: TransactionCategory::Withdrawals,
        field: MatchField::Kind,
        values: &["withdrawal"],
    },
    CategoryRule {
        category: TransactionCategory::Chargebacks,
        field: MatchField::Kind,
        values: &["chargeback"],
    },
    CategoryRule {
        category: TransactionCategory::Cashbacks,
        field: MatchField::Kind,
        values: &["cashback"],
    },
    CategoryRule {
        category: TransactionCategory::ReferAndEarn,
        field: MatchField::Kind,
        values: &["referral"],
    },
];

/// Look up the rule for a category.
pub fn rule_for(category: TransactionCategory) -> Option<&'static CategoryRule> {
    CATEGORY_RULES.iter().find(|r| r.category == category)
}

/// Does the transaction belong to the given category?
pub fn matches_category(transaction: &Transaction, category: TransactionCategory) -> bool {
    rule_for(category).is_some_and(|rule| rule.matches(transaction))
}

/// Return the transactions that pass every active filter dimension.
///
/// Dimensions (date window, category, status) are ANDed; selected
/// categories are ORed. An empty category or status selection and a
/// half-set date range are inactive. Input order is preserved.
///
/// Pure: no I/O, no shared state. Safe to call on every render.
pub fn apply_filters(transactions: &[Transaction], filters: &FilterState) -> Vec<Transaction> {
    let window = filters.date_window();

    let result: Vec<Transaction> = transactions
        .iter()
        .filter(|t| passes(t, filters, window))
        .cloned()
        .collect();

    debug!(
        total = transactions.len(),
        matched = result.len(),
        date_range = %filters.date_range,
        "applied transaction filters"
    );
    result
}

/// Single-transaction form of `apply_filters`.
pub fn matches_filters(transaction: &Transaction, filters: &FilterState) -> bool {
    passes(transaction, filters, filters.date_window())
}

fn passes(
    transaction: &Transaction,
    filters: &FilterState,
    window: Option<(DateTime<Utc>, DateTime<Utc>)>,
) -> bool {
    if let Some((start, end)) = window {
        match transaction.timestamp() {
            Some(at) if at >= start && at <= end => {}
            Some(_) => return false,
            None => {
                warn!(date = %transaction.date, "unparseable transaction date excluded by date filter");
                return false;
            }
        }
    }

    if !filters.transaction_type.is_empty()
        && !filters
            .transaction_type
            .iter()
            .any(|category| matches_category(transaction, *category))
    {
        return false;
    }

    if !filters.transaction_status.is_empty() {
        match transaction.status {
            Some(status) if filters.transaction_status.contains(&status) => {}
            _ => return false,
        }
    }

    true
}
