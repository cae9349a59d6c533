use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{json, Value};

use crate::database::models::location::{Location, NewLocation};
use crate::database::Db;
use crate::error::ApiError;

/// GET /location2 - list all locations
pub async fn list(State(db): State<Db>) -> Result<Json<Vec<Location>>, ApiError> {
    let rows = Location::list(&db).await?;
    Ok(Json(rows))
}

/// POST /location2 - create a location
pub async fn create(
    State(db): State<Db>,
    Json(payload): Json<NewLocation>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    payload.validate()?;
    Location::insert(&db, &payload).await?;
    Ok((StatusCode::CREATED, Json(json!({ "message": "Ubicación creada" }))))
}
