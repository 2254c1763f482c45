use dotenvy::dotenv;
use std::env;

use laundry_backoffice::{
    ApiConfig, HttpOrderGateway, MemoryOrderGateway, NewOrder, OrderGateway, OrderPatch,
    OrderStatus, OrderStore,
};

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let demo_mode = env::var("DEMO_MODE")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if demo_mode {
        log::info!("Running in demo mode with seed data");
        run_session(OrderStore::new(MemoryOrderGateway::new())).await;
    } else {
        let config = ApiConfig::from_env();
        log::info!("Using backend at {}", config.base_url());
        let gateway = match HttpOrderGateway::new(config) {
            Ok(gateway) => gateway,
            Err(e) => {
                log::error!("Could not build HTTP client: {}", e);
                return;
            }
        };
        run_session(OrderStore::new(gateway)).await;
    }
}

/// A short scripted session exercising the store end to end.
async fn run_session<G: OrderGateway>(mut store: OrderStore<G>) {
    if let Err(e) = store.refresh().await {
        log::error!("Could not load orders: {}", e);
        return;
    }
    log_counts(&store);

    let created = match store
        .create(NewOrder {
            customer_name: "Jane Cooper".to_string(),
            service: "Cuci Setrika".to_string(),
            weight: 2.5,
            price_per_kg: 5000.0,
        })
        .await
    {
        Ok(order) => {
            log::info!(
                "Created order {} for {} (Rp {})",
                order.id,
                order.customer_name,
                order.total_price
            );
            order
        }
        Err(e) => {
            log::error!("Could not create order: {}", e);
            return;
        }
    };

    match store
        .update(created.id, OrderPatch::status(OrderStatus::Completed))
        .await
    {
        Ok(order) => log::info!("Order {} is now {:?}", order.id, order.status),
        Err(e) => log::error!("Could not update order: {}", e),
    }
    log_counts(&store);

    match store.delete(created.id).await {
        Ok(()) => log::info!("Order {} deleted", created.id),
        Err(e) => log::error!("Could not delete order: {}", e),
    }
    log_counts(&store);
}

fn log_counts<G: OrderGateway>(store: &OrderStore<G>) {
    log::info!(
        "{} orders ({} pending, {} completed)",
        store.total_orders(),
        store.pending_orders(),
        store.completed_orders()
    );
}
