//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Deserializes the body, then runs the `validator` crate's `Validate` impl.
/// Every failure rejects with 400 and an `ErrorResponse`, including a missing
/// field, a mistyped value and a missing JSON content type. Validation
/// failures carry per-field details.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct NewProduct {
///     #[validate(range(min = 1))]
///     id: i64,
///     #[validate(length(max = 255))]
///     name: String,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<NewProduct>) -> String {
///     format!("Creating product {}", payload.id)
/// }
///
/// let app = Router::new().route("/products", post(create));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}
