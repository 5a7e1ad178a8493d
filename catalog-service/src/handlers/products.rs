use crate::dtos::PriceRangeParams;
use crate::error::AppError;
use crate::startup::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use futures::stream::TryStreamExt;
use mongodb::bson::doc;

pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut cursor = state
        .db
        .products()
        .find(doc! {}, None)
        .await
        .map_err(AppError::from)?;

    let mut products = Vec::new();
    while let Some(product) = cursor.try_next().await.map_err(AppError::from)? {
        products.push(product);
    }

    Ok(Json(products))
}

pub async fn get_product_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let product = state
        .db
        .products()
        .find_one(doc! { "title": &title }, None)
        .await
        .map_err(AppError::from)?;

    match product {
        Some(product) => Ok(Json(product)),
        None => Err(AppError::NotFound(anyhow::anyhow!("Product not found"))),
    }
}

pub async fn list_products_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut cursor = state
        .db
        .products()
        .find(doc! { "category_name": &category }, None)
        .await
        .map_err(AppError::from)?;

    let mut products = Vec::new();
    while let Some(product) = cursor.try_next().await.map_err(AppError::from)? {
        products.push(product);
    }

    if products.is_empty() {
        return Err(AppError::NotFound(anyhow::anyhow!(
            "No products found in this category"
        )));
    }

    Ok(Json(products))
}

pub async fn list_products_by_price(
    State(state): State<AppState>,
    Query(params): Query<PriceRangeParams>,
) -> Result<impl IntoResponse, AppError> {
    // Inclusive on both ends.
    let filter = doc! {
        "sale_price.usd_amount": {
            "$gte": params.min_price(),
            "$lte": params.max_price(),
        }
    };

    let mut cursor = state
        .db
        .products()
        .find(filter, None)
        .await
        .map_err(AppError::from)?;

    let mut products = Vec::new();
    while let Some(product) = cursor.try_next().await.map_err(AppError::from)? {
        products.push(product);
    }

    if products.is_empty() {
        return Err(AppError::NotFound(anyhow::anyhow!(
            "No products found within the specified price range"
        )));
    }

    Ok(Json(products))
}
