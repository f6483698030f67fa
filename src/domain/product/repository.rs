use crate::repository::{Identified, InMemoryRepository, Repository};
use super::entity::Product;

pub trait ProductRepository: Repository<Product> {}

impl ProductRepository for InMemoryRepository<Product> {}

impl Identified for Product {
    fn id(&self) -> &str {
        Product::id(self)
    }
}
