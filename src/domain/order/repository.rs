use async_trait::async_trait;

use crate::repository::{Identified, InMemoryRepository, Repository, RepositoryError};
use super::entity::Order;
use super::value_objects::OrderItem;

// ============================================================================
// Order Repository
// ============================================================================

#[async_trait]
pub trait OrderRepository: Repository<Order> {
    async fn find_by_customer_id(&self, customer_id: &str) -> Result<Vec<Order>, RepositoryError>;

    /// Replace the stored items of an existing order
    async fn update_items(&self, order_id: &str, items: Vec<OrderItem>) -> Result<(), RepositoryError>;
}

impl Identified for Order {
    fn id(&self) -> &str {
        Order::id(self)
    }
}

#[async_trait]
impl OrderRepository for InMemoryRepository<Order> {
    async fn find_by_customer_id(&self, customer_id: &str) -> Result<Vec<Order>, RepositoryError> {
        Ok(self
            .entries()
            .read()
            .await
            .iter()
            .filter(|order| order.customer_id() == customer_id)
            .cloned()
            .collect())
    }

    async fn update_items(&self, order_id: &str, items: Vec<OrderItem>) -> Result<(), RepositoryError> {
        let mut entries = self.entries().write().await;

        let stored = entries
            .iter_mut()
            .find(|stored| stored.id() == order_id)
            .ok_or_else(|| self.not_found(order_id))?;

        let count = items.len();
        stored
            .change_items(items)
            .map_err(|err| RepositoryError::Rejected {
                kind: self.kind(),
                reason: err.to_string(),
            })?;

        tracing::debug!(order_id, items = count, "Order items updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, quantity: u32) -> OrderItem {
        OrderItem::new(id, "Item", 10.0, "p1", quantity)
    }

    fn order(id: &str, customer_id: &str, quantity: u32) -> Order {
        Order::new(
            id,
            customer_id,
            vec![OrderItem::new(format!("{id}-item"), "Item", 10.0, "p1", quantity)],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_find_by_customer_id() {
        let repository: InMemoryRepository<Order> = InMemoryRepository::new("Order");
        repository.create(order("o1", "c1", 1)).await.unwrap();
        repository.create(order("o2", "c2", 1)).await.unwrap();
        repository.create(order("o3", "c1", 1)).await.unwrap();

        let orders = repository.find_by_customer_id("c1").await.unwrap();

        let ids: Vec<&str> = orders.iter().map(Order::id).collect();
        assert_eq!(ids, vec!["o1", "o3"]);
        assert!(repository.find_by_customer_id("nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_items() {
        let repository: InMemoryRepository<Order> = InMemoryRepository::new("Order");
        repository.create(order("o1", "c1", 1)).await.unwrap();

        repository.update_items("o1", vec![item("o1-item", 4)]).await.unwrap();

        let stored = repository.find("o1").await.unwrap();
        assert_eq!(stored.items()[0].quantity(), 4);
        assert_eq!(stored.total(), 40.0);
    }

    #[tokio::test]
    async fn test_update_items_of_unknown_order_fails() {
        let repository: InMemoryRepository<Order> = InMemoryRepository::new("Order");

        let err = repository.update_items("o1", vec![item("o1-item", 1)]).await.unwrap_err();
        assert_eq!(err, RepositoryError::NotFound { kind: "Order", id: "o1".to_string() });
    }

    #[tokio::test]
    async fn test_update_items_rejects_invalid_items() {
        let repository: InMemoryRepository<Order> = InMemoryRepository::new("Order");
        repository.create(order("o1", "c1", 2)).await.unwrap();

        let err = repository
            .update_items("o1", vec![item("o1-item", 1), item("zero", 0)])
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Rejected { kind: "Order", .. }));

        let err = repository.update_items("o1", Vec::new()).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Rejected { kind: "Order", .. }));

        let stored = repository.find("o1").await.unwrap();
        assert_eq!(stored.items(), order("o1", "c1", 2).items());
    }
}
