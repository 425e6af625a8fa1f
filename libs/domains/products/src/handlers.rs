use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use axum_helpers::{IdPath, ValidatedJson};
use std::sync::Arc;

use crate::error::{ProductError, ProductResult};
use crate::mapper::ProductMapper;
use crate::models::{BaseResponseDto, ProductDto, messages};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// Handler state shared by every product route
pub struct ProductsState<R: ProductRepository> {
    pub service: ProductService<R>,
    pub mapper: ProductMapper,
}

type SharedState<R> = Arc<ProductsState<R>>;

/// Create the product router with all HTTP endpoints
///
/// Routes are relative; mount with `Router::nest("/products", ...)`.
pub fn router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    mapper: ProductMapper,
) -> Router {
    let shared_state = Arc::new(ProductsState { service, mapper });

    Router::new()
        .route(
            "/",
            get(list_products::<R>)
                .post(create_product::<R>)
                .put(update_product::<R>),
        )
        .route("/{id}", get(get_product::<R>).delete(delete_product::<R>))
        .with_state(shared_state)
}

async fn list_products<R: ProductRepository>(
    State(state): State<SharedState<R>>,
) -> ProductResult<Json<Vec<ProductDto>>> {
    let products = state.service.find_all_products().await?;
    let dtos = products.iter().map(|p| state.mapper.to_dto(p)).collect();
    Ok(Json(dtos))
}

async fn get_product<R: ProductRepository>(
    State(state): State<SharedState<R>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<ProductDto>> {
    let product = state
        .service
        .find_product_by_id(id)
        .await?
        .ok_or(ProductError::NotFound(id))?;

    Ok(Json(state.mapper.to_dto(&product)))
}

async fn create_product<R: ProductRepository>(
    State(state): State<SharedState<R>>,
    ValidatedJson(dto): ValidatedJson<ProductDto>,
) -> ProductResult<Json<BaseResponseDto>> {
    state
        .service
        .create_product(state.mapper.to_domain(dto))
        .await?;

    Ok(Json(BaseResponseDto::success(messages::CREATED)))
}

async fn update_product<R: ProductRepository>(
    State(state): State<SharedState<R>>,
    ValidatedJson(dto): ValidatedJson<ProductDto>,
) -> ProductResult<Json<BaseResponseDto>> {
    let existing = state
        .service
        .find_product_by_id(dto.id)
        .await?
        .ok_or(ProductError::NotFound(dto.id))?;

    state
        .service
        .update_product(state.mapper.to_domain(dto), existing)
        .await?;

    Ok(Json(BaseResponseDto::success(messages::UPDATED)))
}

async fn delete_product<R: ProductRepository>(
    State(state): State<SharedState<R>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<BaseResponseDto>> {
    let existing = state
        .service
        .find_product_by_id(id)
        .await?
        .ok_or(ProductError::NotFound(id))?;

    state.service.delete_product(existing).await?;

    Ok(Json(BaseResponseDto::success(messages::DELETED)))
}
