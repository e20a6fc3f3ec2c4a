use serde::{Deserialize, Serialize};

/// Money flow of a transaction from the wallet owner's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Money received (sales, tips, cashbacks, ...)
    Incoming,
    /// Money leaving the wallet (withdrawals)
    Outgoing,
}

/// Display-ready row of the transaction list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRow {
    /// Product name, else the raw type, else "Transaction"
    pub title: String,

    /// Counterparty name, else the status
    pub subtitle: String,

    /// e.g. "USD 1,000"
    pub amount: String,

    /// e.g. "Jan 15, 2024"
    pub date: String,

    pub direction: Direction,
}

/// What the transaction list should show for the current snapshot and filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransactionListView {
    /// Transactions have not arrived yet
    Loading,

    /// Nothing matched (or nothing could be loaded)
    Empty { title: String, message: String },

    Populated {
        /// e.g. "12 Transactions"
        heading: String,
        /// e.g. "Your transactions for last 7 days"
        subheading: String,
        rows: Vec<TransactionRow>,
    },
}
