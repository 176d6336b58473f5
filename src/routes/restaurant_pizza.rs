//! Price association route handlers

use crate::error::{validation_error, ApiResult, INVALID_REQUEST_BODY};
use crate::models::{CreateRestaurantPizzaRequest, Pizza};
use crate::state::SharedState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

/// Record that a restaurant sells a pizza at a price.
///
/// Responds with the pizza that was linked, not the new price row.
pub async fn create_restaurant_pizza(
    State(state): State<SharedState>,
    payload: Result<Json<CreateRestaurantPizzaRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Pizza>)> {
    let Json(payload) = payload.map_err(|rejection| {
        debug!("Rejected request body: {}", rejection.body_text());
        validation_error(INVALID_REQUEST_BODY)
    })?;

    let new = payload.into_new()?;
    let pizza = state.store.create_restaurant_pizza(&new).await?;

    info!(
        "Restaurant {} now sells pizza {} at {}",
        new.restaurant_id, pizza.id, new.price
    );
    Ok((StatusCode::CREATED, Json(pizza)))
}
