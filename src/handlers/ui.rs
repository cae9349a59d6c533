use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use crate::views::{self, Role};

#[derive(Debug, Deserialize)]
pub struct ShellQuery {
    /// Sidebar-open flag; closed by default
    pub sidebar: Option<bool>,
    /// One-shot flash message rendered as a toast
    pub mensaje: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EstadisticasQuery {
    /// Assigned location; absence renders the not-assigned notice
    pub ubicacion: Option<String>,
}

/// GET /app/:role - role-specific navigation shell
pub async fn dashboard(Path(role): Path<String>, Query(query): Query<ShellQuery>) -> Response {
    match Role::parse(&role) {
        Some(role) => Html(views::layout::dashboard(
            role,
            query.sidebar.unwrap_or(false),
            query.mensaje.as_deref(),
        ))
        .into_response(),
        None => not_found().await.into_response(),
    }
}

/// GET /app/:role/estadisticas - statistics page, gated on an assigned location
pub async fn estadisticas(
    Path(role): Path<String>,
    Query(query): Query<EstadisticasQuery>,
) -> Response {
    let role = Role::parse(&role);

    match query.ubicacion {
        // The notice renders for unrecognized roles too, with the default text
        None => Html(views::pages::location_not_assigned(role)).into_response(),
        Some(ubicacion) => match role {
            Some(role) => Html(views::pages::estadisticas(role, &ubicacion)).into_response(),
            None => not_found().await.into_response(),
        },
    }
}

/// Router fallback - rendered 404 page
pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(views::pages::not_found()))
}
