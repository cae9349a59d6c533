use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::{get, post};
use axum::Router;
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config;
use crate::database::Db;
use crate::handlers::{articulos, inventario, locations, roles, ui, usuarios};

/// Assemble the full application router around an injected database handle.
pub fn app(db: Db) -> Router {
    let config = config::config();

    let mut router = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(location_routes())
        .merge(role_routes())
        .merge(articulo_routes())
        .merge(inventario_routes())
        .merge(usuario_routes())
        .merge(ui_routes())
        .fallback(ui::not_found);

    if config.security.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router.with_state(db)
}

fn location_routes() -> Router<Db> {
    Router::new().route("/location2", get(locations::list).post(locations::create))
}

fn role_routes() -> Router<Db> {
    Router::new().route("/rol2", get(roles::list).post(roles::create))
}

fn articulo_routes() -> Router<Db> {
    Router::new().route("/articulo2", get(articulos::list).post(articulos::create))
}

fn inventario_routes() -> Router<Db> {
    Router::new()
        .route("/inventario2", get(inventario::list).post(inventario::create))
        .route(
            "/inventario2/:id",
            axum::routing::put(inventario::update).delete(inventario::delete),
        )
}

fn usuario_routes() -> Router<Db> {
    Router::new()
        .route("/usuario2/getUsuario", get(usuarios::list))
        .route(
            "/usuario2",
            post(usuarios::create)
                .put(usuarios::update)
                .delete(usuarios::delete),
        )
        .route("/usuario2/login", post(usuarios::login))
        .route("/usuario2/getSession", get(usuarios::session))
        .route("/usuario2/logout", post(usuarios::logout))
}

fn ui_routes() -> Router<Db> {
    Router::new()
        .route("/app/:role", get(ui::dashboard))
        .route("/app/:role/estadisticas", get(ui::estadisticas))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Sapatos API",
        "version": version,
        "description": "Business-management backend for the Sapatos retail network",
        "endpoints": {
            "home": "/",
            "health": "/health",
            "locations": "GET|POST /location2",
            "roles": "GET|POST /rol2",
            "articulos": "GET|POST /articulo2",
            "inventario": "GET|POST /inventario2, PUT|DELETE /inventario2/:id",
            "usuarios": "GET /usuario2/getUsuario, POST|PUT|DELETE /usuario2, POST /usuario2/login, GET /usuario2/getSession, POST /usuario2/logout",
            "app": "GET /app/:role, GET /app/:role/estadisticas",
        }
    }))
}

async fn health(State(db): State<Db>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "database": "ok",
                "timestamp": now,
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "database_error": e.to_string(),
                "timestamp": now,
            })),
        ),
    }
}
