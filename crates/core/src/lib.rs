pub mod errors;
pub mod logging;
pub mod models;
pub mod providers;
pub mod services;

use chrono::{DateTime, Utc};
use models::{
    chart::ChartPoint,
    filter::FilterState,
    list::TransactionListView,
    settings::Settings,
    snapshot::Loadable,
    transaction::Transaction,
    user::User,
    wallet::{Wallet, WalletStat},
};
use providers::{http::HttpDashboardApi, traits::DashboardApi};
use services::{chart_service, filter_editor::FilterEditor, filter_service, list_service};
use tracing::{info, warn};

use errors::CoreError;

/// Main entry point for the dashboard core.
///
/// Holds the latest snapshot of each remote resource plus the applied
/// filters, and derives everything the views need from them. Derived data
/// is recomputed on each call; the snapshots are only replaced by
/// `refresh()` or the `set_*` methods.
#[must_use]
pub struct Dashboard {
    api: Box<dyn DashboardApi>,
    wallet: Loadable<Wallet>,
    transactions: Loadable<Vec<Transaction>>,
    user: Loadable<User>,
    filters: FilterState,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("api", &self.api.name())
            .field("wallet_loaded", &self.wallet.as_loaded().is_some())
            .field("transactions", &self.transactions.items().len())
            .field("user_loaded", &self.user.as_loaded().is_some())
            .field("filters", &self.filters)
            .finish()
    }
}

impl Dashboard {
    /// Create a dashboard over any resource source. Nothing is fetched yet.
    pub fn new(api: Box<dyn DashboardApi>) -> Self {
        Self {
            api,
            wallet: Loadable::Loading,
            transactions: Loadable::Loading,
            user: Loadable::Loading,
            filters: FilterState::default(),
        }
    }

    /// Create a dashboard backed by the HTTP API described by `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self, CoreError> {
        let api = HttpDashboardApi::new(settings)?;
        Ok(Self::new(Box::new(api)))
    }

    // ── Data loading ────────────────────────────────────────────────

    /// Re-fetch wallet, transactions and user.
    ///
    /// Each resource is fetched and stored on its own: a failure leaves that
    /// resource `Failed` without touching the others.
    pub async fn refresh(&mut self) {
        let source = self.api.name().to_string();

        self.wallet = log_outcome(&source, "wallet", self.api.fetch_wallet().await);
        self.transactions = log_outcome(&source, "transactions", self.api.fetch_transactions().await);
        self.user = log_outcome(&source, "user", self.api.fetch_user().await);
    }

    pub fn set_wallet(&mut self, wallet: Loadable<Wallet>) {
        self.wallet = wallet;
    }

    pub fn set_transactions(&mut self, transactions: Loadable<Vec<Transaction>>) {
        self.transactions = transactions;
    }

    pub fn set_user(&mut self, user: Loadable<User>) {
        self.user = user;
    }

    // ── Filters ─────────────────────────────────────────────────────

    #[must_use]
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Replace the applied filters wholesale.
    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
    }

    /// Reset to "All Time" with no type or status constraint.
    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
    }

    /// Open an editing draft of the applied filters.
    #[must_use]
    pub fn editor(&self) -> FilterEditor {
        FilterEditor::new(&self.filters)
    }

    /// Badge count for the filter button.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        self.filters.active_filter_count()
    }

    // ── Transactions & chart ────────────────────────────────────────

    #[must_use]
    pub fn is_loading_transactions(&self) -> bool {
        self.transactions.is_loading()
    }

    #[must_use]
    pub fn transactions(&self) -> &Loadable<Vec<Transaction>> {
        &self.transactions
    }

    /// Transactions passing the applied filters, in snapshot order.
    /// Empty while the snapshot is loading or failed.
    #[must_use]
    pub fn filtered_transactions(&self) -> Vec<Transaction> {
        filter_service::apply_filters(self.transactions.items(), &self.filters)
    }

    /// Revenue chart series for the filtered transactions.
    #[must_use]
    pub fn chart_series(&self) -> Vec<ChartPoint> {
        self.chart_series_at(Utc::now())
    }

    /// `chart_series` with an explicit "now" for the empty-result baseline.
    #[must_use]
    pub fn chart_series_at(&self, now: DateTime<Utc>) -> Vec<ChartPoint> {
        chart_service::project_at(&self.filtered_transactions(), &self.filters, now)
    }

    #[must_use]
    pub fn transaction_list(&self) -> TransactionListView {
        list_service::build_list_view(&self.transactions, &self.filters)
    }

    // ── Wallet & user ───────────────────────────────────────────────

    #[must_use]
    pub fn wallet(&self) -> &Loadable<Wallet> {
        &self.wallet
    }

    /// Available balance, zero until the wallet is loaded.
    #[must_use]
    pub fn available_balance(&self) -> f64 {
        self.wallet.as_loaded().map(|w| w.balance).unwrap_or(0.0)
    }

    /// Side panel figures; all zero until the wallet is loaded.
    #[must_use]
    pub fn wallet_stats(&self) -> Vec<WalletStat> {
        self.wallet.as_loaded().cloned().unwrap_or_default().stats()
    }

    #[must_use]
    pub fn user(&self) -> &Loadable<User> {
        &self.user
    }
}

fn log_outcome<T>(source: &str, resource: &str, result: Result<T, CoreError>) -> Loadable<T> {
    match &result {
        Ok(_) => info!(source, resource, "dashboard resource loaded"),
        Err(e) => warn!(source, resource, error = %e, "dashboard resource failed to load"),
    }
    result.into()
}
