use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{json, Value};

use crate::database::models::articulo::{Articulo, NewArticulo};
use crate::database::Db;
use crate::error::ApiError;

/// GET /articulo2 - list all articles
pub async fn list(State(db): State<Db>) -> Result<Json<Vec<Articulo>>, ApiError> {
    let rows = Articulo::list(&db).await?;
    Ok(Json(rows))
}

/// POST /articulo2 - create an article
pub async fn create(
    State(db): State<Db>,
    Json(payload): Json<NewArticulo>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    payload.validate()?;
    Articulo::insert(&db, &payload).await?;
    Ok((StatusCode::CREATED, Json(json!({ "message": "Artículo creado" }))))
}
