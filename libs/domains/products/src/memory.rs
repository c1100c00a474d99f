//! Process-local product store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use crate::repository::ProductRepository;

/// [`ProductRepository`] kept in a map, for local runs and tests.
///
/// `find_all` returns products ordered by name, then id.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<HashMap<Uuid, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: RwLock::new(products.into_iter().map(|p| (p.id, p)).collect()),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let mut products: Vec<Product> = self.products.read().await.values().cloned().collect();
        products.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(products)
    }

    async fn find_by_id(&self, id: Uuid) -> ProductResult<Product> {
        self.products
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn create(&self, product: &Product) -> ProductResult<Product> {
        self.products
            .write()
            .await
            .insert(product.id, product.clone());
        tracing::info!("Product created");
        Ok(product.clone())
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn update(&self, product: &Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        let stored = products
            .get_mut(&product.id)
            .ok_or(ProductError::NotFound(product.id))?;
        *stored = product.clone();
        tracing::info!("Product updated");
        Ok(product.clone())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ProductResult<()> {
        self.products
            .write()
            .await
            .remove(&id)
            .ok_or(ProductError::NotFound(id))?;
        tracing::info!("Product deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_crud_cycle() {
        let repo = InMemoryProductRepository::new();
        let product = Product::new("Desk", 4);

        repo.create(&product).await.unwrap();
        assert_eq!(repo.find_by_id(product.id).await.unwrap(), product);

        let changed = Product {
            stock: 9,
            ..product.clone()
        };
        repo.update(&changed).await.unwrap();
        assert_eq!(repo.find_by_id(product.id).await.unwrap().stock, 9);

        repo.delete(product.id).await.unwrap();
        assert!(matches!(
            repo.find_by_id(product.id).await,
            Err(ProductError::NotFound(id)) if id == product.id
        ));
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let repo = InMemoryProductRepository::new();
        let ghost = Product::new("Ghost", 1);

        assert!(matches!(repo.update(&ghost).await, Err(ProductError::NotFound(_))));
        assert!(matches!(repo.delete(ghost.id).await, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_find_all_sorted_by_name() {
        let repo = InMemoryProductRepository::with_products([
            Product::new("Chair", 1),
            Product::new("Armchair", 2),
        ]);

        let names: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Armchair", "Chair"]);
    }
}
