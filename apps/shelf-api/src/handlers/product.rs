//! # Product Handlers
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST   /products/       NewProduct JSON   → 200 Product                │
//! │  GET    /products/       ?skip=&limit=     → 200 [Product] newest first │
//! │  GET    /products/{id}                     → 200 Product | 404          │
//! │  PATCH  /products/{id}   ProductPatch JSON → 200 Product | 404          │
//! │  DELETE /products/{id}                     → 200 {"ok":true} | 404      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Extractors are taken as `Result<_, Rejection>` so malformed input comes
//! back as a `VALIDATION_ERROR` body instead of axum's plain-text default.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use shelf_core::{NewProduct, Page, Product, ProductPatch};
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::state::{AppState, DbSession};

/// Query string for `GET /products/`.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Body returned by a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub ok: bool,
}

/// `POST /products/`
pub async fn create_product(
    DbSession(mut session): DbSession,
    body: Result<Json<NewProduct>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let Json(input) = body?;

    let product = session.products().create(&input).await?;
    Ok(Json(product))
}

/// `GET /products/`
pub async fn list_products(
    State(state): State<AppState>,
    DbSession(mut session): DbSession,
    params: Result<Query<ListParams>, QueryRejection>,
) -> ApiResult<Json<Vec<Product>>> {
    let Query(params) = params?;

    let page = Page::new(
        params.skip.unwrap_or(0),
        params.limit.unwrap_or(state.default_list_limit),
    );

    let products = session.products().list(page).await?;
    Ok(Json(products))
}

/// `GET /products/{id}`
pub async fn get_product(
    DbSession(mut session): DbSession,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Product>> {
    let Path(id) = id?;

    let product = session.products().get(id).await?;
    product.map(Json).ok_or_else(|| ApiError::not_found("Product"))
}

/// `PATCH /products/{id}`
pub async fn update_product(
    DbSession(mut session): DbSession,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<ProductPatch>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let Path(id) = id?;
    let Json(patch) = body?;

    let product = session.products().update(id, &patch).await?;
    product.map(Json).ok_or_else(|| ApiError::not_found("Product"))
}

/// `DELETE /products/{id}`
pub async fn delete_product(
    DbSession(mut session): DbSession,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DeleteResponse>> {
    let Path(id) = id?;

    if session.products().delete(id).await? {
        debug!(id = id, "Product deleted");
        Ok(Json(DeleteResponse { ok: true }))
    } else {
        Err(ApiError::not_found("Product"))
    }
}
