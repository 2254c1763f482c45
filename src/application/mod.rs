pub mod auth_store;
pub mod order_store;
