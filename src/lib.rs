//! Client-side state layer of a laundry-service back office: an order store
//! with derived dashboard counts, and an auth store for the built-in
//! administrator session.
//!
//! Persistence is behind two ports selected at construction time:
//! [`OrderGateway`] (HTTP against the REST backend, or an in-memory demo
//! gateway) and [`KeyValueStorage`] (file-backed or in-memory) for the
//! session record.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::auth_store::{AuthStore, USER_KEY};
pub use application::order_store::OrderStore;
pub use config::ApiConfig;
pub use domain::errors::{AuthError, StoreError};
pub use domain::order::{NewOrder, Order, OrderId, OrderPatch, OrderStatus};
pub use domain::ports::{KeyValueStorage, OrderGateway};
pub use domain::user::User;
pub use infrastructure::http_gateway::HttpOrderGateway;
pub use infrastructure::memory_gateway::MemoryOrderGateway;
pub use infrastructure::storage::{FileStorage, MemoryStorage};
