use crate::repository::{Identified, InMemoryRepository, Repository};
use super::entity::Customer;

// ============================================================================
// Customer Repository
// ============================================================================

pub trait CustomerRepository: Repository<Customer> {}

impl CustomerRepository for InMemoryRepository<Customer> {}

impl Identified for Customer {
    fn id(&self) -> &str {
        Customer::id(self)
    }
}
