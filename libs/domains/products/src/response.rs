//! The `{code, message, data}` envelope every product operation answers with.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ProductError;
use crate::models::Product;

/// Payload carried by a [`ServiceResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ResponseData {
    Product(Product),
    Products(Vec<Product>),
    /// Validation messages or the storage error text
    Errors(Vec<String>),
}

/// Envelope returned by every [`ProductService`](crate::ProductService) call.
///
/// `code` doubles as the HTTP status of the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ServiceResponse {
    #[schema(example = 200)]
    pub code: u16,
    #[schema(example = "Product fetched successfully")]
    pub message: String,
    pub data: Option<ResponseData>,
}

impl ServiceResponse {
    pub fn new(status: StatusCode, message: impl Into<String>, data: Option<ResponseData>) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
            data,
        }
    }

    /// 200 with an optional payload.
    pub fn ok(message: impl Into<String>, data: Option<ResponseData>) -> Self {
        Self::new(StatusCode::OK, message, data)
    }

    /// 201 carrying the stored product.
    pub fn created(message: impl Into<String>, product: Product) -> Self {
        Self::new(StatusCode::CREATED, message, Some(ResponseData::Product(product)))
    }

    /// 404 naming the id exactly as the caller sent it.
    pub fn not_found(id: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            format!("Product with ID {id} not found"),
            None,
        )
    }

    /// 400 listing every violated rule.
    pub fn validation(errors: Vec<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "Validation error",
            Some(ResponseData::Errors(errors)),
        )
    }

    /// 400 with the problem in the message and no payload.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, None)
    }

    /// 500 with the storage error text as detail.
    pub fn storage_failure(message: impl Into<String>, err: &ProductError) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            message,
            Some(ResponseData::Errors(vec![err.to_string()])),
        )
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ServiceResponse {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}
