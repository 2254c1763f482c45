use std::time::Duration;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};

use crate::domain::errors::StoreError;
use crate::domain::order::{Order, OrderId, OrderPatch, OrderStatus};
use crate::domain::ports::OrderGateway;

/// Demo-mode gateway: serves a fixed seed collection and acknowledges writes
/// after an artificial delay, so the store behaves as if a backend were
/// attached without one running. Writes are not retained; a later refresh
/// serves the seed again.
pub struct MemoryOrderGateway {
    seed: Vec<Order>,
    delay: Duration,
}

const DEMO_DELAY: Duration = Duration::from_millis(200);

impl MemoryOrderGateway {
    pub fn new() -> Self {
        Self::with_seed(demo_orders())
    }

    pub fn with_seed(seed: Vec<Order>) -> Self {
        Self {
            seed,
            delay: DEMO_DELAY,
        }
    }

    /// Override the artificial delay (tests use zero).
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

impl Default for MemoryOrderGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderGateway for MemoryOrderGateway {
    async fn list(&self) -> Result<Vec<Order>, StoreError> {
        self.simulate_latency().await;
        Ok(self.seed.clone())
    }

    async fn create(&self, order: &Order) -> Result<Order, StoreError> {
        self.simulate_latency().await;
        Ok(order.clone())
    }

    async fn update(&self, _id: OrderId, _patch: &OrderPatch) -> Result<(), StoreError> {
        self.simulate_latency().await;
        Ok(())
    }

    async fn delete(&self, _id: OrderId) -> Result<(), StoreError> {
        self.simulate_latency().await;
        Ok(())
    }
}

/// Seed data shown on first load in demo mode.
fn demo_orders() -> Vec<Order> {
    let now = Utc::now();
    let entry = |days_ago: i64, customer: &str, service: &str, weight: f64, rate: f64, status| {
        let created_at = now - ChronoDuration::days(days_ago);
        Order {
            id: created_at.timestamp_millis(),
            customer_name: customer.to_string(),
            service: service.to_string(),
            weight,
            price_per_kg: rate,
            total_price: weight * rate,
            status,
            created_at,
        }
    };

    vec![
        entry(0, "Budi Santoso", "Cuci Setrika", 3.0, 7000.0, OrderStatus::Pending),
        entry(1, "Siti Aminah", "Cuci Kering", 2.5, 5000.0, OrderStatus::Processing),
        entry(2, "Andi Wijaya", "Setrika", 4.0, 4000.0, OrderStatus::Completed),
        entry(3, "Dewi Lestari", "Dry Clean", 1.5, 15000.0, OrderStatus::Delivered),
    ]
}
