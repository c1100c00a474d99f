use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::Product;

/// Persistence port for products.
///
/// Lookups and writes against a missing id fail with
/// [`ProductError::NotFound`](crate::ProductError::NotFound); any other
/// failure is reported as a storage error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every stored product, in store order
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    async fn find_by_id(&self, id: Uuid) -> ProductResult<Product>;

    /// Store a new product under its own id
    async fn create(&self, product: &Product) -> ProductResult<Product>;

    /// Overwrite name and stock of an existing product
    async fn update(&self, product: &Product) -> ProductResult<Product>;

    async fn delete(&self, id: Uuid) -> ProductResult<()>;
}
