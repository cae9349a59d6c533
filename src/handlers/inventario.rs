use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{json, Value};

use crate::database::models::inventario::{Inventario, InventarioPayload};
use crate::database::Db;
use crate::error::ApiError;

/// GET /inventario2 - list all inventory records
pub async fn list(State(db): State<Db>) -> Result<Json<Vec<Inventario>>, ApiError> {
    let rows = Inventario::list(&db).await?;
    Ok(Json(rows))
}

/// POST /inventario2 - create an inventory record
pub async fn create(
    State(db): State<Db>,
    Json(payload): Json<InventarioPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    payload.validate()?;
    Inventario::insert(&db, &payload).await?;
    Ok((StatusCode::CREATED, Json(json!({ "message": "Inventario creado" }))))
}

/// PUT /inventario2/:id - update an inventory record
pub async fn update(
    State(db): State<Db>,
    Path(id): Path<i32>,
    Json(payload): Json<InventarioPayload>,
) -> Result<Json<Value>, ApiError> {
    payload.validate()?;
    Inventario::update(&db, id, &payload).await?;
    Ok(Json(json!({ "message": "Inventario actualizado" })))
}

/// DELETE /inventario2/:id - delete an inventory record
pub async fn delete(
    State(db): State<Db>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    Inventario::delete(&db, id).await?;
    Ok(Json(json!({ "message": "Inventario eliminado" })))
}
