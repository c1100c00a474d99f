//! Product Service - maps repository outcomes onto response envelopes

use std::sync::Arc;
use tracing::{instrument, warn};
use uuid::Uuid;

use crate::error::ProductError;
use crate::models::{INVALID_STOCK, NewProduct, ProductFields, parse_stock};
use crate::repository::ProductRepository;
use crate::response::{ResponseData, ServiceResponse};

pub const PRODUCTS_FETCHED: &str = "Products fetched successfully";
pub const PRODUCT_FETCHED: &str = "Product fetched successfully";
pub const PRODUCT_CREATED: &str = "Product created successfully";
pub const PRODUCT_UPDATED: &str = "Product updated successfully";
pub const PRODUCT_DELETED: &str = "Product deleted successfully";

pub const FETCH_ALL_FAILED: &str = "Failed to fetch products";
pub const FETCH_FAILED: &str = "Failed to fetch product";
pub const CREATE_FAILED: &str = "Error creating product";
pub const UPDATE_FAILED: &str = "Error updating product";
pub const DELETE_FAILED: &str = "Error deleting product";

/// Product use cases.
///
/// Every call resolves to a [`ServiceResponse`]; nothing is returned as an
/// error. Ids arrive as the raw path text, and one that does not parse as a
/// UUID is answered exactly like a missing product.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> ServiceResponse {
        match self.repository.find_all().await {
            Ok(products) => {
                ServiceResponse::ok(PRODUCTS_FETCHED, Some(ResponseData::Products(products)))
            }
            Err(e) => {
                warn!(error = %e, "Listing products failed");
                ServiceResponse::storage_failure(FETCH_ALL_FAILED, &e)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: &str) -> ServiceResponse {
        let Ok(uuid) = Uuid::parse_str(id) else {
            return ServiceResponse::not_found(id);
        };

        match self.repository.find_by_id(uuid).await {
            Ok(product) => {
                ServiceResponse::ok(PRODUCT_FETCHED, Some(ResponseData::Product(product)))
            }
            Err(ProductError::NotFound(_)) => ServiceResponse::not_found(id),
            Err(e) => {
                warn!(error = %e, "Fetching product failed");
                ServiceResponse::storage_failure(FETCH_FAILED, &e)
            }
        }
    }

    #[instrument(skip(self, fields))]
    pub async fn create(&self, fields: ProductFields) -> ServiceResponse {
        let product = match NewProduct::from(fields).into_product() {
            Ok(product) => product,
            Err(violations) => return ServiceResponse::validation(violations),
        };

        match self.repository.create(&product).await {
            Ok(_) => ServiceResponse::created(PRODUCT_CREATED, product),
            Err(e) => {
                warn!(error = %e, "Creating product failed");
                ServiceResponse::storage_failure(CREATE_FAILED, &e)
            }
        }
    }

    /// Merge the non-empty `fields` into the stored product.
    ///
    /// The product is fetched first; an invalid stock aborts before anything
    /// is written.
    #[instrument(skip(self, fields))]
    pub async fn update(&self, id: &str, fields: ProductFields) -> ServiceResponse {
        let Ok(uuid) = Uuid::parse_str(id) else {
            return ServiceResponse::not_found(id);
        };

        let mut product = match self.repository.find_by_id(uuid).await {
            Ok(product) => product,
            Err(ProductError::NotFound(_)) => return ServiceResponse::not_found(id),
            Err(e) => {
                warn!(error = %e, "Fetching product for update failed");
                return ServiceResponse::storage_failure(FETCH_FAILED, &e);
            }
        };

        if let Some(name) = fields.name() {
            product.name = name.to_string();
        }

        if let Some(raw) = fields.stock() {
            match parse_stock(raw) {
                Some(stock) => product.stock = stock,
                None => return ServiceResponse::bad_request(INVALID_STOCK),
            }
        }

        match self.repository.update(&product).await {
            Ok(_) => ServiceResponse::ok(PRODUCT_UPDATED, Some(ResponseData::Product(product))),
            Err(ProductError::NotFound(_)) => ServiceResponse::not_found(id),
            Err(e) => {
                warn!(error = %e, "Updating product failed");
                ServiceResponse::storage_failure(UPDATE_FAILED, &e)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> ServiceResponse {
        let Ok(uuid) = Uuid::parse_str(id) else {
            return ServiceResponse::not_found(id);
        };

        match self.repository.delete(uuid).await {
            Ok(()) => ServiceResponse::ok(PRODUCT_DELETED, None),
            Err(ProductError::NotFound(_)) => ServiceResponse::not_found(id),
            Err(e) => {
                warn!(error = %e, "Deleting product failed");
                ServiceResponse::storage_failure(DELETE_FAILED, &e)
            }
        }
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
