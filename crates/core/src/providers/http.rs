use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;
use tracing::debug;

use crate::errors::CoreError;
use crate::models::settings::Settings;
use crate::models::transaction::Transaction;
use crate::models::user::User;
use crate::models::wallet::Wallet;
use super::traits::DashboardApi;

pub const WALLET_PATH: &str = "/wallet";
pub const TRANSACTIONS_PATH: &str = "/transactions";
pub const USER_PATH: &str = "/user";

/// Dashboard API client over plain JSON `GET`s.
///
/// - `GET {base}/wallet` → `Wallet`
/// - `GET {base}/transactions` → `[Transaction]`
/// - `GET {base}/user` → `User`
pub struct HttpDashboardApi {
    client: Client,
    base_url: String,
}

impl HttpDashboardApi {
    /// Build a client from validated settings.
    pub fn new(settings: &Settings) -> Result<Self, CoreError> {
        settings.validate()?;

        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(settings.request_timeout_secs));

        Ok(Self {
            client: builder.build()?,
            base_url: settings.api_base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path such as `/wallet`.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CoreError> {
        let url = self.endpoint_url(path);
        debug!(%url, "fetching dashboard resource");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Api {
                endpoint: path.to_string(),
                message: format!("unexpected status {status}"),
            });
        }

        resp.json().await.map_err(|e| CoreError::Api {
            endpoint: path.to_string(),
            message: format!("Failed to parse response: {e}"),
        })
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DashboardApi for HttpDashboardApi {
    fn name(&self) -> &str {
        "HTTP"
    }

    async fn fetch_wallet(&self) -> Result<Wallet, CoreError> {
        self.get_json(WALLET_PATH).await
    }

    async fn fetch_transactions(&self) -> Result<Vec<Transaction>, CoreError> {
        self.get_json(TRANSACTIONS_PATH).await
    }

    async fn fetch_user(&self) -> Result<User, CoreError> {
        self.get_json(USER_PATH).await
    }
}
