//! HTTP handlers for Products API

use axum::{
    Router,
    extract::{Path, State},
    routing::get,
};
use axum_helpers::{
    FormOrJson,
    errors::responses::{BodyRejectionResponse, NotFoundResponse},
};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use utoipa::OpenApi;

use crate::models::{Product, ProductFields};
use crate::profiling::ProfilingService;
use crate::repository::ProductRepository;
use crate::response::{ResponseData, ServiceResponse};
use crate::service::ProductService;

pub const LIST_PRODUCTS: &str = "GET /products";
pub const GET_PRODUCT: &str = "GET /products/{id}";
pub const CREATE_PRODUCT: &str = "POST /products";
pub const UPDATE_PRODUCT: &str = "PUT /products/{id}";
pub const DELETE_PRODUCT: &str = "DELETE /products/{id}";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, ProductFields, ServiceResponse, ResponseData),
        responses(BodyRejectionResponse, NotFoundResponse)
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

struct HandlerState<R: ProductRepository> {
    service: ProductService<R>,
    profiling: ProfilingService,
}

impl<R: ProductRepository> HandlerState<R> {
    /// Await `call` and hand its duration to the profiler under `label`.
    async fn profiled<F>(&self, label: &'static str, call: F) -> ServiceResponse
    where
        F: Future<Output = ServiceResponse>,
    {
        let started = Instant::now();
        let response = call.await;
        self.profiling.spawn_log(label, started.elapsed());
        response
    }
}

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    profiling: ProfilingService,
) -> Router {
    let state = Arc::new(HandlerState { service, profiling });

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(state)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "Products fetched successfully", body = ServiceResponse),
        (status = 500, description = "Failed to fetch products", body = ServiceResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(state): State<Arc<HandlerState<R>>>,
) -> ServiceResponse {
    state.profiled(LIST_PRODUCTS, state.service.find_all()).await
}

/// Create a new product
///
/// Accepts `name` and `stock` as a urlencoded form or as JSON.
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body(
        content = ProductFields,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 201, description = "Product created successfully", body = ServiceResponse),
        (status = 400, description = "Validation error", body = ServiceResponse),
        (status = 422, response = BodyRejectionResponse),
        (status = 500, description = "Error creating product", body = ServiceResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(state): State<Arc<HandlerState<R>>>,
    FormOrJson(fields): FormOrJson<ProductFields>,
) -> ServiceResponse {
    state
        .profiled(CREATE_PRODUCT, state.service.create(fields))
        .await
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product fetched successfully", body = ServiceResponse),
        (status = 404, description = "Product not found", body = ServiceResponse),
        (status = 500, description = "Failed to fetch product", body = ServiceResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(state): State<Arc<HandlerState<R>>>,
    Path(id): Path<String>,
) -> ServiceResponse {
    state
        .profiled(GET_PRODUCT, state.service.find_by_id(&id))
        .await
}

/// Update a product
///
/// Empty or missing fields keep their stored value.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body(
        content = ProductFields,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Product updated successfully", body = ServiceResponse),
        (status = 400, description = "Invalid stock value", body = ServiceResponse),
        (status = 404, description = "Product not found", body = ServiceResponse),
        (status = 422, response = BodyRejectionResponse),
        (status = 500, description = "Error updating product", body = ServiceResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(state): State<Arc<HandlerState<R>>>,
    Path(id): Path<String>,
    FormOrJson(fields): FormOrJson<ProductFields>,
) -> ServiceResponse {
    state
        .profiled(UPDATE_PRODUCT, state.service.update(&id, fields))
        .await
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted successfully", body = ServiceResponse),
        (status = 404, description = "Product not found", body = ServiceResponse),
        (status = 500, description = "Error deleting product", body = ServiceResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(state): State<Arc<HandlerState<R>>>,
    Path(id): Path<String>,
) -> ServiceResponse {
    state
        .profiled(DELETE_PRODUCT, state.service.delete(&id))
        .await
}
