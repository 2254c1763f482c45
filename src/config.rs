use std::env;

use crate::domain::order::OrderId;

pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// REST backend location and the endpoint URLs derived from it.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Base URL from `API_URL`, falling back to the local development backend.
    pub fn from_env() -> Self {
        Self::new(env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn orders(&self) -> String {
        format!("{}/orders", self.base_url)
    }

    pub fn order(&self, id: OrderId) -> String {
        format!("{}/orders/{}", self.base_url, id)
    }

    pub fn customers(&self) -> String {
        format!("{}/customers", self.base_url)
    }

    pub fn services(&self) -> String {
        format!("{}/services", self.base_url)
    }

    pub fn users(&self) -> String {
        format!("{}/users", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
