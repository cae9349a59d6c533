use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{self, Claims};
use crate::config;
use crate::database::models::usuario::{DeleteUsuario, NewUsuario, UpdateUsuario, Usuario};
use crate::database::Db;
use crate::error::ApiError;

/// POST /usuario2/login body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "correoOUsuario")]
    pub correo_o_usuario: String,
    #[serde(rename = "Clave")]
    pub clave: String,
}

/// GET /usuario2/getUsuario - list all users (password digests excluded)
pub async fn list(State(db): State<Db>) -> Result<Json<Vec<Usuario>>, ApiError> {
    let rows = Usuario::list(&db).await?;
    Ok(Json(rows))
}

/// POST /usuario2 - create a user
pub async fn create(
    State(db): State<Db>,
    Json(payload): Json<NewUsuario>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    payload.validate()?;
    let digest = auth::hash_password(&payload.clave);
    Usuario::insert(&db, &payload, &digest).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Usuario creado correctamente" })),
    ))
}

/// PUT /usuario2 - update a user (password untouched)
pub async fn update(
    State(db): State<Db>,
    Json(payload): Json<UpdateUsuario>,
) -> Result<Json<Value>, ApiError> {
    Usuario::update(&db, &payload).await?;
    Ok(Json(json!({ "message": "Usuario actualizado correctamente" })))
}

/// DELETE /usuario2 - delete a user by id in the body
pub async fn delete(
    State(db): State<Db>,
    Json(payload): Json<DeleteUsuario>,
) -> Result<Json<Value>, ApiError> {
    Usuario::delete(&db, payload.usuario_id).await?;
    Ok(Json(json!({ "message": "Usuario eliminado correctamente" })))
}

/// POST /usuario2/login - validate credentials and issue a session token
pub async fn login(
    State(db): State<Db>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let usuario = Usuario::find_by_login(&db, &payload.correo_o_usuario)
        .await?
        .ok_or_else(|| ApiError::not_found("Usuario no encontrado"))?;

    if auth::hash_password(&payload.clave) != usuario.clave {
        return Err(ApiError::unauthorized("Contraseña incorrecta"));
    }

    let security = &config::config().security;
    let claims = Claims::new(&usuario, security.jwt_expiry_hours);
    let token = auth::generate_jwt(&claims, &security.jwt_secret)?;

    Ok(Json(json!({
        "message": "Login exitoso",
        "token": token,
        "usuario": claims,
    })))
}

/// GET /usuario2/getSession - echo the session behind a bearer token
pub async fn session(headers: HeaderMap) -> Result<Json<Value>, ApiError> {
    let token = auth::bearer_token(&headers)?;
    let claims = auth::validate_jwt(token, &config::config().security.jwt_secret)?;
    Ok(Json(json!({ "usuario": claims, "token": token })))
}

/// POST /usuario2/logout - stateless acknowledgement; the client drops its token
pub async fn logout() -> Json<Value> {
    Json(json!({ "message": "Sesión cerrada exitosamente" }))
}
