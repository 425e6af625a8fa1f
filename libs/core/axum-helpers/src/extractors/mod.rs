//! Custom extractors for Axum handlers.
//!
//! Both extractors reject with an [`ErrorResponse`](crate::errors::ErrorResponse)
//! body so clients see one error shape for malformed requests.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
