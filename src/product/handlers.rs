//! HTTP handlers for the product resource.
//!
//! Each handler performs one store operation. Request bodies are taken as a
//! raw stream and read here, so every read or decode failure, oversized bodies
//! included, becomes a plain 400 and `update_product` can answer 404 before
//! the body is read at all.

use super::model::{CreateProductRequest, Product, UpdateProductRequest};
use crate::error::{ApiError, Result};
use crate::state::AppState;
use axum::{
    Json,
    body::{self, Body},
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// Base path of the product resource.
pub const PRODUCTS_PATH: &str = "/api/products";

/// Largest request body the handlers will read.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

async fn decode<T: DeserializeOwned>(body: Body) -> Result<T> {
    let bytes = body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ApiError::MalformedInput(e.to_string()))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Get all products
///
/// The array comes back in no particular order.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Product API",
    description = "Retrieve a list of all available products, in no particular order.",
    responses(
        (status = 200, description = "Successfully retrieved list", body = Vec<Product>)
    )
)]
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.store.list())
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Product API",
    description = "Retrieve a single product by its unique ID.",
    params(("id" = String, Path, description = "ID of the product to retrieve.")),
    responses(
        (status = 200, description = "Successfully retrieved product", body = Product),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    state
        .store
        .get(&id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(id))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Product API",
    description = "Add a new product to the store.",
    request_body(
        content = CreateProductRequest,
        description = "Product object that needs to be added to the store"
    ),
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    body: Body,
) -> Result<impl IntoResponse> {
    let req: CreateProductRequest = decode(body).await?;

    let id = Uuid::new_v4().to_string();
    let product = req.into_product(id.clone());
    state.store.put(id.clone(), product.clone());

    tracing::info!("Created product {} ({})", id, product.name);

    let location = format!("{}/{}", PRODUCTS_PATH, id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

/// Update an existing product
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Product API",
    description = "Update an existing product by its ID.",
    params(("id" = String, Path, description = "ID of the product to update.")),
    request_body(content = UpdateProductRequest, description = "Updated product object"),
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 404, description = "Product not found"),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Body,
) -> Result<Json<Product>> {
    if !state.store.contains(&id) {
        return Err(ApiError::not_found(id));
    }

    let req: UpdateProductRequest = decode(body).await?;
    if let Some(body_id) = req.id {
        if body_id != id {
            return Err(ApiError::IdMismatch {
                path_id: id,
                body_id,
            });
        }
    }

    let product = Product::new(id.clone(), req.name, req.price);
    state.store.put(id.clone(), product.clone());

    tracing::info!("Updated product {}", id);
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Product API",
    description = "Delete a product by its ID.",
    params(("id" = String, Path, description = "ID of the product to delete.")),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if state.store.remove(&id) {
        tracing::info!("Deleted product {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(id))
    }
}
