use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ApiConfig;
use crate::domain::errors::StoreError;
use crate::domain::order::{Order, OrderId, OrderPatch};
use crate::domain::ports::OrderGateway;

// ── Error conversion (infrastructure concern only) ───────────────────────────

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        StoreError::Transport(e.to_string())
    }
}

// ── Gateway ──────────────────────────────────────────────────────────────────

/// Order persistence over the REST backend. A 2xx status is the sole success
/// criterion; anything else maps to the fixed per-operation message, and a
/// client-level error (refused connection, timeout) surfaces its own text.
pub struct HttpOrderGateway {
    client: Client,
    config: ApiConfig,
}

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

impl HttpOrderGateway {
    pub fn new(config: ApiConfig) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
    async fn list(&self) -> Result<Vec<Order>, StoreError> {
        let resp = self.client.get(self.config.orders()).send().await?;
        if !resp.status().is_success() {
            return Err(StoreError::Transport("Failed to fetch orders".to_string()));
        }
        Ok(resp.json().await?)
    }

    async fn create(&self, order: &Order) -> Result<Order, StoreError> {
        let resp = self
            .client
            .post(self.config.orders())
            .json(order)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(StoreError::Transport("Failed to add order".to_string()));
        }
        Ok(resp.json().await?)
    }

    async fn update(&self, id: OrderId, patch: &OrderPatch) -> Result<(), StoreError> {
        let resp = self
            .client
            .put(self.config.order(id))
            .json(patch)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(StoreError::Transport("Failed to update order".to_string()));
        }
        Ok(())
    }

    async fn delete(&self, id: OrderId) -> Result<(), StoreError> {
        let resp = self.client.delete(self.config.order(id)).send().await?;
        if !resp.status().is_success() {
            return Err(StoreError::Transport("Failed to delete order".to_string()));
        }
        Ok(())
    }
}
