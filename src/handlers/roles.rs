use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{json, Value};

use crate::database::models::rol::{NewRol, Rol};
use crate::database::Db;
use crate::error::ApiError;

/// GET /rol2 - list all roles
pub async fn list(State(db): State<Db>) -> Result<Json<Vec<Rol>>, ApiError> {
    let rows = Rol::list(&db).await?;
    Ok(Json(rows))
}

/// POST /rol2 - create a role
pub async fn create(
    State(db): State<Db>,
    Json(payload): Json<NewRol>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    payload.validate()?;
    Rol::insert(&db, &payload).await?;
    Ok((StatusCode::CREATED, Json(json!({ "message": "Rol creado" }))))
}
