//! Body extractor accepting a urlencoded form, a multipart form or a JSON document.

use crate::errors::AppError;
use axum::{
    extract::{Form, FromRequest, Json, Multipart, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Deserializes the body as JSON when the request says `application/json`,
/// from the text fields of a `multipart/form-data` body, and as a urlencoded
/// form otherwise.
///
/// Multipart file parts are ignored and the first occurrence of a repeated
/// field wins. Every multipart value reaches `T` as a JSON string.
///
/// A request without a `Content-Type` header yields `T::default()`, so
/// handlers whose inputs are all optional can be called with no body at all.
/// Rejections are rendered through [`AppError`].
///
/// # Example
/// ```ignore
/// use axum_helpers::FormOrJson;
///
/// #[derive(Default, Deserialize)]
/// struct Fields {
///     name: Option<String>,
/// }
///
/// async fn update(FormOrJson(fields): FormOrJson<Fields>) -> String {
///     fields.name.unwrap_or_default()
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FormOrJson<T>(pub T);

fn mime_is(content_type: &str, expected: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|mime| mime.trim().eq_ignore_ascii_case(expected))
        .unwrap_or(false)
}

fn is_json(content_type: &str) -> bool {
    mime_is(content_type, "application/json")
}

fn is_multipart(content_type: &str) -> bool {
    mime_is(content_type, "multipart/form-data")
}

async fn multipart_fields<T: DeserializeOwned>(mut multipart: Multipart) -> Result<T, AppError> {
    let mut fields = Map::new();
    while let Some(field) = multipart.next_field().await? {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let text = field.text().await?;
        fields.entry(name).or_insert(Value::String(text));
    }

    serde_json::from_value(Value::Object(fields))
        .map_err(|e| AppError::BadRequest(format!("Failed to deserialize multipart form: {e}")))
}

impl<T, S> FromRequest<S> for FormOrJson<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .map(|value| value.to_str().unwrap_or_default().to_string());

        match content_type {
            None => Ok(FormOrJson(T::default())),
            Some(ct) if is_json(&ct) => {
                let Json(value) = Json::<T>::from_request(req, state).await?;
                Ok(FormOrJson(value))
            }
            Some(ct) if is_multipart(&ct) => {
                let multipart = Multipart::from_request(req, state).await?;
                Ok(FormOrJson(multipart_fields(multipart).await?))
            }
            Some(_) => {
                let Form(value) = Form::<T>::from_request(req, state).await?;
                Ok(FormOrJson(value))
            }
        }
    }
}
