use serde::{Deserialize, Serialize};
use validator::Validate;

/// Envelope messages returned by the product endpoints.
pub mod messages {
    pub const CREATED: &str = "Product Created Successfully !!!";
    pub const UPDATED: &str = "Product Updated Successfully !!!";
    pub const DELETED: &str = "Product Deleted Successfully !!!";
    pub const NOT_FOUND: &str = "Product ID NOT found.";
    pub const DUPLICATE: &str = "Duplicate found.";
    pub const UNEXPECTED: &str = "An unexpected error occurred.";
}

/// Product as stored and handled by the service layer
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub product_id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub currency_code: String,
}

impl Product {
    /// Stored products always carry a positive id.
    pub fn is_persisted(&self) -> bool {
        self.product_id > 0
    }
}

/// Wire representation of a product
///
/// Only `id` and `price` are required; the remaining fields fall back to
/// empty strings and `USD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductDto {
    #[validate(range(min = 1))]
    pub id: i64,

    #[serde(default)]
    #[validate(length(max = 255))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,

    #[validate(range(min = 0.0))]
    pub price: f64,

    #[serde(default = "default_currency_code")]
    #[validate(length(equal = 3))]
    pub currency_code: String,
}

fn default_currency_code() -> String {
    "USD".to_string()
}

/// `{status, message}` envelope for mutations and domain failures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseResponseDto {
    pub status: bool,
    pub message: String,
}

impl BaseResponseDto {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: message.into(),
        }
    }
}
