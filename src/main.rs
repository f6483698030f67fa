use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use domain_events::config::AppConfig;
use domain_events::domain::customer::{
    Address, Customer, CustomerEvent, CustomerRepository, LogFirstWhenCustomerIsCreatedHandler,
    LogSecondWhenCustomerIsCreatedHandler, LogWhenCustomerAddressIsChangedHandler,
};
use domain_events::domain::order::{Order, OrderItem, OrderRepository, OrderService};
use domain_events::domain::product::{
    Product, ProductEvent, ProductService, SendEmailWhenProductIsCreatedHandler,
};
use domain_events::events::{EventDispatcher, SharedHandler};
use domain_events::metrics::DispatcherMetrics;
use domain_events::repository::{InMemoryRepository, Repository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    // RUST_LOG takes precedence over DOMAIN_EVENTS_LOG
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(config.log_thread_ids),
        )
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    tracing::info!(?config, "Starting domain events demo");

    let metrics = if config.metrics_enabled {
        Some(Arc::new(DispatcherMetrics::new()?))
    } else {
        None
    };

    // === 1. Customer events ===
    let customer_dispatcher = Arc::new(match &metrics {
        Some(metrics) => EventDispatcher::<CustomerEvent>::with_metrics(Arc::clone(metrics)),
        None => EventDispatcher::new(),
    });

    customer_dispatcher.register(CustomerEvent::CREATED, Arc::new(LogFirstWhenCustomerIsCreatedHandler));
    customer_dispatcher.register(CustomerEvent::CREATED, Arc::new(LogSecondWhenCustomerIsCreatedHandler));
    customer_dispatcher.register(
        CustomerEvent::ADDRESS_CHANGED,
        Arc::new(LogWhenCustomerAddressIsChangedHandler),
    );

    let customers: Arc<dyn CustomerRepository> =
        Arc::new(InMemoryRepository::<Customer>::new("Customer"));

    let mut customer =
        Customer::with_dispatcher("123", "Sidenir Teste", Arc::clone(&customer_dispatcher))?;
    customer.change_address(Address::new("rua do teste", 10, "12345-678", "Xique xique")?)?;
    customer.activate()?;
    customers.create(customer.clone()).await?;

    // === 2. Product events ===
    let product_dispatcher = match &metrics {
        Some(metrics) => EventDispatcher::<ProductEvent>::with_metrics(Arc::clone(metrics)),
        None => EventDispatcher::new(),
    };

    let mailer: SharedHandler<ProductEvent> = Arc::new(SendEmailWhenProductIsCreatedHandler);
    product_dispatcher.register(ProductEvent::CREATED, Arc::clone(&mailer));

    let mut products = vec![
        Product::with_dispatcher("p1", "Product 1", 10.0, &product_dispatcher)?,
        Product::with_dispatcher("p2", "Product 2", 20.0, &product_dispatcher)?,
    ];

    // Later products are created without the email notification
    product_dispatcher.unregister(ProductEvent::CREATED, &mailer);
    products.push(Product::with_dispatcher("p3", "Product 3", 30.0, &product_dispatcher)?);

    ProductService::increase_price(&mut products, 10.0)?;

    // === 3. Orders ===
    let orders = InMemoryRepository::<Order>::new("Order");
    let items = products
        .iter()
        .enumerate()
        .map(|(index, product)| {
            OrderItem::new(format!("i{}", index + 1), product.name(), product.price(), product.id(), 1)
        })
        .collect();

    let order = OrderService::place_order(&mut customer, items)?;
    orders.create(order).await?;
    customers.update(customer.clone()).await?;

    let customer_orders = orders.find_by_customer_id(customer.id()).await?;
    tracing::info!(
        customer_id = customer.id(),
        orders = customer_orders.len(),
        total = OrderService::total(&customer_orders),
        reward_points = customer.reward_points(),
        "Customer orders placed"
    );

    customer_dispatcher.unregister_all();
    tracing::debug!(dispatcher = ?customer_dispatcher, "Customer handlers cleared");

    if let Some(metrics) = &metrics {
        tracing::debug!("Dispatcher metrics:\n{}", metrics.render()?);
    }

    tracing::info!("Domain events demo finished");
    Ok(())
}
