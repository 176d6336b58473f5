//! Pizza route handlers

use crate::error::ApiResult;
use crate::models::Pizza;
use crate::state::SharedState;
use axum::{extract::State, Json};
use tracing::debug;

/// List all pizzas
pub async fn list_pizzas(State(state): State<SharedState>) -> ApiResult<Json<Vec<Pizza>>> {
    let pizzas = state.store.list_pizzas().await?;
    debug!("Listed {} pizzas", pizzas.len());
    Ok(Json(pizzas))
}
