use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("Order not found")]
    NotFound,
    /// Network-level failure from the gateway; the message is surfaced
    /// verbatim to the caller and recorded in the store's `error` field.
    #[error("{0}")]
    Transport(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Login failed")]
    Storage(String),
}
