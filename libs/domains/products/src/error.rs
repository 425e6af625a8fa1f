use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::models::{BaseResponseDto, messages};

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(i64),

    #[error("Product with id {0} already exists")]
    Duplicate(i64),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProductError::NotFound(_) => StatusCode::BAD_REQUEST,
            ProductError::Duplicate(_) => StatusCode::NOT_ACCEPTABLE,
            ProductError::Database(_) | ProductError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Every product failure is rendered as a `BaseResponseDto` envelope.
///
/// Server-side failures are logged here and replaced by a generic message.
impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let message = match &self {
            ProductError::NotFound(id) => {
                tracing::info!(product_id = id, "Product not found");
                messages::NOT_FOUND
            }
            ProductError::Duplicate(id) => {
                tracing::info!(product_id = id, "Duplicate product id");
                messages::DUPLICATE
            }
            ProductError::Database(_) | ProductError::Internal(_) => {
                tracing::error!(error = %self, "Product request failed");
                messages::UNEXPECTED
            }
        };

        (self.status_code(), Json(BaseResponseDto::failure(message))).into_response()
    }
}

impl From<DbErr> for ProductError {
    fn from(err: DbErr) -> Self {
        ProductError::Database(err.to_string())
    }
}
