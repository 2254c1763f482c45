use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned at creation time from the Unix epoch in milliseconds.
///
/// Two orders created in the same millisecond collide; the backend this was
/// built against assigns ids the same way, so the collision is tolerated
/// rather than guarded against.
pub type OrderId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Delivered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub service: String,
    /// Laundry weight in kilograms.
    pub weight: f64,
    pub price_per_kg: f64,
    /// Fixed at creation as `weight * price_per_kg`. Updates do not recompute
    /// it unless the patch names it explicitly.
    pub total_price: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new order. Id, timestamp, status, and total
/// are filled in by [`Order::create`].
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_name: String,
    pub service: String,
    pub weight: f64,
    pub price_per_kg: f64,
}

/// Shallow-merge update: only the named fields are overwritten.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

impl Order {
    /// Build a full order record from caller input: id from the current
    /// epoch milliseconds, `created_at` now, status `pending`, and the total
    /// derived from weight and rate.
    pub fn create(input: NewOrder) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis(),
            total_price: input.weight * input.price_per_kg,
            customer_name: input.customer_name,
            service: input.service,
            weight: input.weight,
            price_per_kg: input.price_per_kg,
            status: OrderStatus::Pending,
            created_at: now,
        }
    }

    /// Apply a shallow merge in place.
    pub fn apply(&mut self, patch: &OrderPatch) {
        if let Some(v) = &patch.customer_name {
            self.customer_name = v.clone();
        }
        if let Some(v) = &patch.service {
            self.service = v.clone();
        }
        if let Some(v) = patch.weight {
            self.weight = v;
        }
        if let Some(v) = patch.price_per_kg {
            self.price_per_kg = v;
        }
        if let Some(v) = patch.total_price {
            self.total_price = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
    }
}

impl OrderPatch {
    pub fn status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> NewOrder {
        NewOrder {
            customer_name: "Budi Santoso".to_string(),
            service: "Cuci Setrika".to_string(),
            weight: 2.5,
            price_per_kg: 5000.0,
        }
    }

    #[test]
    fn create_derives_total_and_defaults_to_pending() {
        let order = Order::create(input());
        assert_eq!(order.total_price, 12500.0);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.id, order.created_at.timestamp_millis());
    }

    #[test]
    fn apply_overwrites_only_named_fields() {
        let mut order = Order::create(input());
        let before = order.clone();
        order.apply(&OrderPatch {
            weight: Some(4.0),
            status: Some(OrderStatus::Processing),
            ..OrderPatch::default()
        });

        assert_eq!(order.weight, 4.0);
        assert_eq!(order.status, OrderStatus::Processing);
        // Untouched fields survive, including the stale total.
        assert_eq!(order.customer_name, before.customer_name);
        assert_eq!(order.service, before.service);
        assert_eq!(order.price_per_kg, before.price_per_kg);
        assert_eq!(order.total_price, before.total_price);
        assert_eq!(order.created_at, before.created_at);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let order = Order::create(input());
        let json = serde_json::to_value(&order).unwrap();
        assert!(json.get("customerName").is_some());
        assert!(json.get("pricePerKg").is_some());
        assert_eq!(json["totalPrice"], 12500.0);
        assert_eq!(json["status"], "pending");
    }

    #[test]
    fn patch_skips_unset_fields_on_the_wire() {
        let patch = OrderPatch::status(OrderStatus::Completed);
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "completed" }));
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result: Result<OrderStatus, _> = serde_json::from_str("\"cancelled\"");
        assert!(result.is_err());
    }
}
