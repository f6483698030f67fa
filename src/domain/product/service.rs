use super::entity::{check_price, Product};
use super::errors::ProductError;

// ============================================================================
// Product Domain Service
// ============================================================================

pub struct ProductService;

impl ProductService {
    /// Raise every product's price by `percentage` percent.
    ///
    /// All new prices are checked first; on error no product is changed.
    pub fn increase_price(products: &mut [Product], percentage: f64) -> Result<(), ProductError> {
        let prices = products
            .iter()
            .map(|product| {
                let price = product.price() + product.price() * percentage / 100.0;
                check_price(price).map(|()| price)
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (product, price) in products.iter_mut().zip(prices) {
            product.change_price(price)?;
        }

        tracing::debug!(count = products.len(), percentage, "Increased product prices");
        Ok(())
    }
}
