//! Restaurant route handlers

use crate::error::{not_found_error, ApiResult, RESTAURANT_NOT_FOUND};
use crate::models::{Restaurant, RestaurantDetail};
use crate::state::SharedState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

/// Ids that are not integers can never match a restaurant
fn restaurant_id(path: Result<Path<i32>, PathRejection>) -> ApiResult<i32> {
    path.map(|Path(id)| id)
        .map_err(|_| not_found_error(RESTAURANT_NOT_FOUND))
}

/// List all restaurants, without their pizzas
pub async fn list_restaurants(
    State(state): State<SharedState>,
) -> ApiResult<Json<Vec<Restaurant>>> {
    let restaurants = state.store.list_restaurants().await?;
    debug!("Listed {} restaurants", restaurants.len());
    Ok(Json(restaurants))
}

/// Get one restaurant with the pizzas it sells
pub async fn get_restaurant(
    State(state): State<SharedState>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<RestaurantDetail>> {
    let id = restaurant_id(path)?;
    debug!("Fetching restaurant {}", id);

    state
        .store
        .find_restaurant(id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found_error(RESTAURANT_NOT_FOUND))
}

/// Delete a restaurant and its price rows
pub async fn delete_restaurant(
    State(state): State<SharedState>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = restaurant_id(path)?;

    if !state.store.delete_restaurant(id).await? {
        debug!("Restaurant {} not found for deletion", id);
        return Err(not_found_error(RESTAURANT_NOT_FOUND));
    }

    info!("Restaurant {} deleted", id);
    Ok(StatusCode::NO_CONTENT)
}
