use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::transaction::Transaction;
use crate::models::user::User;
use crate::models::wallet::Wallet;

/// Source of the three dashboard resources.
///
/// The HTTP client implements this against the real API; tests plug in
/// in-memory fakes. Each call is an independent read: callers get a
/// complete record or an error, never partial data. Retry and caching
/// policy, if any, live in the implementation.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait DashboardApi: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// `/wallet`
    async fn fetch_wallet(&self) -> Result<Wallet, CoreError>;

    /// `/transactions`, in the order the API returns them.
    async fn fetch_transactions(&self) -> Result<Vec<Transaction>, CoreError>;

    /// `/user`
    async fn fetch_user(&self) -> Result<User, CoreError>;
}
