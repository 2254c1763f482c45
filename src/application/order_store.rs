use crate::domain::errors::StoreError;
use crate::domain::order::{NewOrder, Order, OrderId, OrderPatch, OrderStatus};
use crate::domain::ports::OrderGateway;

/// Client-side order state: the collection snapshot the views read, plus the
/// in-flight and last-error flags.
///
/// All operations take `&mut self`, so at most one operation can be in
/// flight per store; overlapping calls on one store are not expressible and
/// the `loading`/`error` flags are only ever written by the operation that
/// owns the borrow.
pub struct OrderStore<G> {
    gateway: G,
    orders: Vec<Order>,
    loading: bool,
    error: Option<String>,
}

impl<G: OrderGateway> OrderStore<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            orders: Vec::new(),
            loading: false,
            error: None,
        }
    }

    // ── Snapshot accessors ───────────────────────────────────────────────

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed operation, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // ── Derived counts (recomputed on every read) ────────────────────────

    pub fn total_orders(&self) -> usize {
        self.orders.len()
    }

    pub fn pending_orders(&self) -> usize {
        self.count_with(OrderStatus::Pending)
    }

    pub fn completed_orders(&self) -> usize {
        self.count_with(OrderStatus::Completed)
    }

    fn count_with(&self, status: OrderStatus) -> usize {
        self.orders.iter().filter(|o| o.status == status).count()
    }

    // ── Operations ───────────────────────────────────────────────────────

    /// Replace the collection with the gateway's current one. On transport
    /// failure the collection is left as it was and the message is recorded.
    pub async fn refresh(&mut self) -> Result<(), StoreError> {
        self.loading = true;
        self.error = None;

        let result = self.gateway.list().await;
        self.loading = false;

        match result {
            Ok(orders) => {
                self.orders = orders;
                Ok(())
            }
            Err(e) => {
                log::warn!("refresh failed: {}", e);
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Build a full order from caller input and persist it. The record the
    /// gateway returns is inserted at the head (most recent first).
    pub async fn create(&mut self, input: NewOrder) -> Result<Order, StoreError> {
        let order = Order::create(input);

        match self.gateway.create(&order).await {
            Ok(created) => {
                log::info!("order {} created for {}", created.id, created.customer_name);
                self.orders.insert(0, created.clone());
                Ok(created)
            }
            Err(e) => {
                log::warn!("create failed: {}", e);
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Shallow-merge `patch` into the order with the given id. Fields the
    /// patch does not name keep their values, including `total_price`.
    pub async fn update(&mut self, id: OrderId, patch: OrderPatch) -> Result<Order, StoreError> {
        let Some(pos) = self.position(id) else {
            return Err(StoreError::NotFound);
        };

        if let Err(e) = self.gateway.update(id, &patch).await {
            log::warn!("update of order {} failed: {}", id, e);
            self.error = Some(e.to_string());
            return Err(e);
        }

        let order = &mut self.orders[pos];
        order.apply(&patch);
        Ok(order.clone())
    }

    pub async fn delete(&mut self, id: OrderId) -> Result<(), StoreError> {
        let Some(pos) = self.position(id) else {
            return Err(StoreError::NotFound);
        };

        if let Err(e) = self.gateway.delete(id).await {
            log::warn!("delete of order {} failed: {}", id, e);
            self.error = Some(e.to_string());
            return Err(e);
        }

        self.orders.remove(pos);
        log::info!("order {} deleted", id);
        Ok(())
    }

    fn position(&self, id: OrderId) -> Option<usize> {
        self.orders.iter().position(|o| o.id == id)
    }
}
