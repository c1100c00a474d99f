//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use crate::repository::ProductRepository;

pub const PRODUCTS_COLLECTION: &str = "products";

/// Stored shape of a product; the id is kept as its hyphenated string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ProductDocument {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    stock: i32,
}

impl From<&Product> for ProductDocument {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            stock: product.stock,
        }
    }
}

impl TryFrom<ProductDocument> for Product {
    type Error = ProductError;

    fn try_from(document: ProductDocument) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&document.id).map_err(|e| {
            ProductError::Database(format!("Stored product id '{}' is invalid: {e}", document.id))
        })?;

        Ok(Product {
            id,
            name: document.name,
            stock: document.stock,
        })
    }
}

fn by_id(id: Uuid) -> Document {
    doc! { "_id": id.to_string() }
}

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<ProductDocument>,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, PRODUCTS_COLLECTION)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<ProductDocument>(collection_name),
        }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<ProductDocument> = cursor.try_collect().await?;
        documents.into_iter().map(Product::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> ProductResult<Product> {
        self.collection
            .find_one(by_id(id))
            .await?
            .ok_or(ProductError::NotFound(id))?
            .try_into()
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn create(&self, product: &Product) -> ProductResult<Product> {
        self.collection
            .insert_one(ProductDocument::from(product))
            .await?;
        tracing::info!("Product created successfully");
        Ok(product.clone())
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn update(&self, product: &Product) -> ProductResult<Product> {
        let result = self
            .collection
            .replace_one(by_id(product.id), ProductDocument::from(product))
            .await?;

        if result.matched_count == 0 {
            return Err(ProductError::NotFound(product.id));
        }

        tracing::info!("Product updated successfully");
        Ok(product.clone())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ProductResult<()> {
        let result = self.collection.delete_one(by_id(id)).await?;
        if result.deleted_count == 0 {
            return Err(ProductError::NotFound(id));
        }

        tracing::info!(product_id = %id, "Product deleted successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_round_trip_keeps_fields() {
        let product = Product::new("Stool", 8);
        let document = ProductDocument::from(&product);
        assert_eq!(document.id, product.id.to_string());

        let back = Product::try_from(document).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn test_document_with_bad_id_is_storage_error() {
        let document = ProductDocument {
            id: "legacy-id".to_string(),
            name: "Stool".to_string(),
            stock: 1,
        };
        assert!(matches!(
            Product::try_from(document),
            Err(ProductError::Database(msg)) if msg.contains("legacy-id")
        ));
    }

    #[test]
    fn test_document_serializes_id_as_underscore_id() {
        let product = Product::new("Stool", 8);
        let bson = mongodb::bson::to_document(&ProductDocument::from(&product)).unwrap();
        assert_eq!(bson.get_str("_id").unwrap(), product.id.to_string());
        assert_eq!(bson.get_i32("stock").unwrap(), 8);
    }
}
