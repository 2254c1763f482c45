use async_trait::async_trait;

use super::errors::StoreError;
use super::order::{Order, OrderId, OrderPatch};

/// Persistence collaborator behind the order store, selected at construction
/// time: HTTP-backed against the REST API, or in-memory for demo mode.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Current collection, most recent first.
    async fn list(&self) -> Result<Vec<Order>, StoreError>;

    /// Persist a fully-built order. The returned record is what the store
    /// keeps; a network backend may normalize fields on echo.
    async fn create(&self, order: &Order) -> Result<Order, StoreError>;

    async fn update(&self, id: OrderId, patch: &OrderPatch) -> Result<(), StoreError>;

    async fn delete(&self, id: OrderId) -> Result<(), StoreError>;
}

/// Local persistent key/value collaborator used by the auth store (the
/// browser-localStorage role). Synchronous: both backends are local.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<(), std::io::Error>;
    fn remove(&mut self, key: &str);
}
