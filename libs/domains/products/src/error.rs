use thiserror::Error;
use uuid::Uuid;

/// Outcome of a repository call that did not succeed.
///
/// `NotFound` is the only variant callers branch on; everything else is an
/// opaque storage failure carried as text.
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(Uuid),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Database(err.to_string())
    }
}

impl From<sea_orm::DbErr> for ProductError {
    fn from(err: sea_orm::DbErr) -> Self {
        ProductError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_err_maps_to_database() {
        let err: ProductError = sea_orm::DbErr::Custom("connection reset".to_string()).into();
        assert!(matches!(err, ProductError::Database(ref msg) if msg.contains("connection reset")));
    }

    #[test]
    fn test_not_found_display() {
        let id = Uuid::nil();
        assert_eq!(
            ProductError::NotFound(id).to_string(),
            format!("Product not found: {id}")
        );
    }
}
