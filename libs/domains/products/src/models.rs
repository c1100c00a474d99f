use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

pub const NAME_REQUIRED: &str = "Name cannot be empty";
pub const INVALID_STOCK: &str = "Invalid Stock Value, must be a number and greater than 0";

/// Product entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique product identifier
    pub id: Uuid,
    /// Product name
    #[schema(example = "Mechanical keyboard")]
    pub name: String,
    /// Units in stock
    #[schema(example = 25)]
    pub stock: i32,
}

impl Product {
    /// A product with a freshly generated id.
    pub fn new(name: impl Into<String>, stock: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            stock,
        }
    }
}

/// Raw `name`/`stock` inputs of create and update requests.
///
/// Both are free text as submitted. A non-string JSON `stock` keeps its JSON
/// text (`5.0`, `true`) and is judged by [`parse_stock`] like any other input.
/// An empty string counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct ProductFields {
    #[serde(default)]
    #[schema(example = "Mechanical keyboard")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_stock")]
    #[schema(value_type = Option<String>, example = "25")]
    pub stock: Option<String>,
}

impl ProductFields {
    pub fn new(name: Option<&str>, stock: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            stock: stock.map(str::to_string),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn stock(&self) -> Option<&str> {
        self.stock.as_deref().filter(|stock| !stock.is_empty())
    }
}

fn lenient_stock<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.map(|value| match value {
        Value::String(text) => text,
        other => other.to_string(),
    }))
}

/// Parses a stock value: a decimal `i32`, optionally signed, not negative.
pub fn parse_stock(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok().filter(|stock| *stock >= 0)
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::new("name").with_message(Cow::Borrowed(NAME_REQUIRED)));
    }
    Ok(())
}

fn validate_stock(raw: &str) -> Result<(), ValidationError> {
    match parse_stock(raw) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("stock").with_message(Cow::Borrowed(INVALID_STOCK))),
    }
}

/// Create input after defaulting absent fields to empty text.
#[derive(Debug, Clone, Validate)]
pub struct NewProduct {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(custom(function = "validate_stock"))]
    pub stock: String,
}

impl From<ProductFields> for NewProduct {
    fn from(fields: ProductFields) -> Self {
        Self {
            name: fields.name.unwrap_or_default(),
            stock: fields.stock.unwrap_or_default(),
        }
    }
}

impl NewProduct {
    /// Every violated rule, name first, then stock.
    pub fn violations(&self) -> Vec<String> {
        let Err(errors) = self.validate() else {
            return Vec::new();
        };

        let fields = errors.field_errors();
        ["name", "stock"]
            .iter()
            .filter_map(|field| fields.get(*field))
            .flat_map(|errs| errs.iter())
            .map(|err| {
                err.message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| err.code.to_string())
            })
            .collect()
    }

    /// The product to persist, or the full list of violations.
    pub fn into_product(self) -> Result<Product, Vec<String>> {
        let violations = self.violations();
        match parse_stock(&self.stock) {
            Some(stock) if violations.is_empty() => Ok(Product::new(self.name, stock)),
            _ => Err(violations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stock() {
        assert_eq!(parse_stock("0"), Some(0));
        assert_eq!(parse_stock("42"), Some(42));
        assert_eq!(parse_stock("+7"), Some(7));
        assert_eq!(parse_stock("-1"), None);
        assert_eq!(parse_stock("abc"), None);
        assert_eq!(parse_stock(""), None);
        assert_eq!(parse_stock(" 5"), None);
        assert_eq!(parse_stock("2147483648"), None);
    }

    #[test]
    fn test_new_product_valid() {
        let product = NewProduct::from(ProductFields::new(Some("Lamp"), Some("3")))
            .into_product()
            .unwrap();
        assert_eq!(product.name, "Lamp");
        assert_eq!(product.stock, 3);
        assert!(!product.id.is_nil());
    }

    #[test]
    fn test_new_product_collects_all_violations_in_order() {
        let violations = NewProduct::from(ProductFields::default())
            .into_product()
            .unwrap_err();
        assert_eq!(violations, vec![NAME_REQUIRED, INVALID_STOCK]);
    }

    #[test]
    fn test_new_product_negative_stock() {
        let violations = NewProduct::from(ProductFields::new(Some("Lamp"), Some("-1")))
            .into_product()
            .unwrap_err();
        assert_eq!(violations, vec![INVALID_STOCK]);
    }

    #[test]
    fn test_fields_treat_empty_as_absent() {
        let fields = ProductFields::new(Some(""), Some(""));
        assert_eq!(fields.name(), None);
        assert_eq!(fields.stock(), None);
    }

    #[test]
    fn test_fields_accept_json_number_stock() {
        let fields: ProductFields = serde_json::from_str(r#"{"name":"Lamp","stock":12}"#).unwrap();
        assert_eq!(fields.stock(), Some("12"));

        let fields: ProductFields = serde_json::from_str(r#"{"stock":1.5}"#).unwrap();
        assert_eq!(fields.stock(), Some("1.5"));
        assert_eq!(parse_stock("1.5"), None);

        let fields: ProductFields = serde_json::from_str(r#"{"stock":null}"#).unwrap();
        assert_eq!(fields, ProductFields::default());
    }

    #[test]
    fn test_fields_keep_float_stock_text() {
        let fields: ProductFields = serde_json::from_str(r#"{"name":"Lamp","stock":5.0}"#).unwrap();
        assert_eq!(fields.stock(), Some("5.0"));

        let violations = NewProduct::from(fields).into_product().unwrap_err();
        assert_eq!(violations, vec![INVALID_STOCK]);
    }

    #[test]
    fn test_fields_non_number_stock_reaches_validation() {
        let fields: ProductFields = serde_json::from_str(r#"{"name":"","stock":true}"#).unwrap();
        assert_eq!(fields.stock(), Some("true"));
        let violations = NewProduct::from(fields).into_product().unwrap_err();
        assert_eq!(violations, vec![NAME_REQUIRED, INVALID_STOCK]);

        for raw in [r#"{"stock":[5]}"#, r#"{"stock":{"n":5}}"#, r#"{"stock":false}"#] {
            let fields: ProductFields = serde_json::from_str(raw).unwrap();
            let stock = fields.stock().unwrap();
            assert_eq!(parse_stock(stock), None, "{raw}");
        }
    }

    #[test]
    fn test_validate_name_message() {
        assert!(validate_name("Lamp").is_ok());
        let err = validate_name("").unwrap_err();
        assert_eq!(err.message.as_deref(), Some(NAME_REQUIRED));
    }

    #[test]
    fn test_product_json_shape() {
        let product = Product {
            id: Uuid::nil(),
            name: "Lamp".to_string(),
            stock: 3,
        };
        assert_eq!(
            serde_json::to_value(&product).unwrap(),
            serde_json::json!({
                "id": "00000000-0000-0000-0000-000000000000",
                "name": "Lamp",
                "stock": 3
            })
        );
    }
}
