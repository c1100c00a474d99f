//! PostgreSQL implementation of ProductRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::instrument;
use uuid::Uuid;

use crate::entity;
use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use crate::repository::ProductRepository;

pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find().all(&self.db).await?;
        Ok(models.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> ProductResult<Product> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Product::from)
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn create(&self, product: &Product) -> ProductResult<Product> {
        let model = entity::ActiveModel::from(product).insert(&self.db).await?;
        tracing::info!("Created product");
        Ok(model.into())
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn update(&self, product: &Product) -> ProductResult<Product> {
        let result = entity::Entity::update_many()
            .col_expr(entity::Column::Name, Expr::value(product.name.clone()))
            .col_expr(entity::Column::Stock, Expr::value(product.stock))
            .filter(entity::Column::Id.eq(product.id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ProductError::NotFound(product.id));
        }

        tracing::info!("Updated product");
        Ok(product.clone())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ProductResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(ProductError::NotFound(id));
        }

        tracing::info!(product_id = %id, "Deleted product");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn model(product: &Product) -> entity::Model {
        entity::Model {
            id: product.id,
            name: product.name.clone(),
            stock: product.stock,
        }
    }

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn test_find_all_maps_rows() {
        let a = Product::new("Bench", 2);
        let b = Product::new("Shelf", 5);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(&a), model(&b)]])
            .into_connection();

        let products = PgProductRepository::new(db).find_all().await.unwrap();
        assert_eq!(products, vec![a, b]);
    }

    #[tokio::test]
    async fn test_find_by_id_missing_row_is_not_found() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();

        let result = PgProductRepository::new(db).find_by_id(id).await;
        assert!(matches!(result, Err(ProductError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_find_by_id_query_error_is_database() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let result = PgProductRepository::new(db).find_by_id(Uuid::new_v4()).await;
        assert!(matches!(result, Err(ProductError::Database(_))));
    }

    #[tokio::test]
    async fn test_create_returns_inserted_row() {
        let product = Product::new("Bench", 2);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(&product)]])
            .into_connection();

        let created = PgProductRepository::new(db).create(&product).await.unwrap();
        assert_eq!(created, product);
    }

    #[tokio::test]
    async fn test_update_without_matching_row_is_not_found() {
        let product = Product::new("Bench", 2);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(0)])
            .into_connection();

        let result = PgProductRepository::new(db).update(&product).await;
        assert!(matches!(result, Err(ProductError::NotFound(id)) if id == product.id));
    }

    #[tokio::test]
    async fn test_update_returns_merged_product() {
        let product = Product::new("Bench", 7);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(1)])
            .into_connection();

        let updated = PgProductRepository::new(db).update(&product).await.unwrap();
        assert_eq!(updated, product);
    }

    #[tokio::test]
    async fn test_delete_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(1), exec(0)])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert!(repo.delete(Uuid::new_v4()).await.is_ok());
        assert!(matches!(
            repo.delete(Uuid::new_v4()).await,
            Err(ProductError::NotFound(_))
        ));
    }
}
