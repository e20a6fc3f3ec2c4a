use serde::{Deserialize, Serialize};

/// Balances returned by `/wallet`. Any missing figure reads as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    #[serde(default)]
    pub balance: f64,

    #[serde(default)]
    pub total_payout: f64,

    #[serde(default)]
    pub total_revenue: f64,

    #[serde(default)]
    pub pending_payout: f64,

    #[serde(default)]
    pub ledger_balance: f64,
}

/// One labelled figure of the side statistics panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletStat {
    pub label: String,
    pub value: f64,
}

impl Wallet {
    /// Side panel figures in display order.
    pub fn stats(&self) -> Vec<WalletStat> {
        [
            ("Ledger Balance", self.ledger_balance),
            ("Total Payout", self.total_payout),
            ("Total Revenue", self.total_revenue),
            ("Pending Payout", self.pending_payout),
        ]
        .into_iter()
        .map(|(label, value)| WalletStat {
            label: label.to_string(),
            value,
        })
        .collect()
    }
}
