// Route handlers

use crate::error::ApiError;
use crate::ApiState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use brewlog_core::domain::{Coffee, CoffeeId, CoffeeUpdate, CoffeeView, NewCoffee};

pub(crate) async fn root() -> &'static str {
    "Brewlog coffee catalog"
}

pub(crate) async fn list_coffees(
    State(state): State<ApiState>,
) -> Result<Json<Vec<CoffeeView>>, ApiError> {
    Ok(Json(state.catalog.list().await?))
}

pub(crate) async fn get_coffee(
    State(state): State<ApiState>,
    Path(id): Path<CoffeeId>,
) -> Result<Json<CoffeeView>, ApiError> {
    Ok(Json(state.catalog.get(id).await?))
}

pub(crate) async fn create_coffee(
    State(state): State<ApiState>,
    Json(input): Json<NewCoffee>,
) -> Result<(StatusCode, Json<Coffee>), ApiError> {
    let coffee = state.catalog.create(input).await?;
    Ok((StatusCode::CREATED, Json(coffee)))
}

pub(crate) async fn update_coffee(
    State(state): State<ApiState>,
    Path(id): Path<CoffeeId>,
    Json(input): Json<CoffeeUpdate>,
) -> Result<Json<Coffee>, ApiError> {
    Ok(Json(state.catalog.update(id, input).await?))
}
