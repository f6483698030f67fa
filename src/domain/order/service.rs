use uuid::Uuid;

use crate::domain::customer::Customer;
use super::entity::Order;
use super::errors::OrderError;
use super::value_objects::OrderItem;

// ============================================================================
// Order Domain Service
// ============================================================================

pub struct OrderService;

impl OrderService {
    pub fn total(orders: &[Order]) -> f64 {
        orders.iter().map(Order::total).sum()
    }

    /// Build an order for `customer` and credit half its total as reward points
    pub fn place_order(customer: &mut Customer, items: Vec<OrderItem>) -> Result<Order, OrderError> {
        if items.is_empty() {
            return Err(OrderError::EmptyItems);
        }

        let order = Order::new(Uuid::new_v4().to_string(), customer.id(), items)?;
        let points = (order.total() / 2.0).floor() as u64;
        customer.add_reward_points(points);

        tracing::debug!(
            order_id = order.id(),
            customer_id = customer.id(),
            reward_points = points,
            "Order placed"
        );

        Ok(order)
    }
}
