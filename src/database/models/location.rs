use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::{Db, DbError};
use crate::error::ApiError;

/// Row of the Location2 table, returned to clients exactly as persisted.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Location {
    #[serde(rename = "Nombre")]
    #[sqlx(rename = "Nombre")]
    pub nombre: String,
    #[serde(rename = "Tipo")]
    #[sqlx(rename = "Tipo")]
    pub tipo: String,
    #[serde(rename = "PosicionX")]
    #[sqlx(rename = "PosicionX")]
    pub posicion_x: i32,
    #[serde(rename = "PosicionY")]
    #[sqlx(rename = "PosicionY")]
    pub posicion_y: i32,
    #[serde(rename = "FechaCreado")]
    #[sqlx(rename = "FechaCreado")]
    pub fecha_creado: NaiveDate,
}

/// Request payload for creating a location.
#[derive(Debug, Deserialize)]
pub struct NewLocation {
    #[serde(rename = "Nombre")]
    pub nombre: String,
    #[serde(rename = "Tipo")]
    pub tipo: String,
    #[serde(rename = "PosicionX")]
    pub posicion_x: i32,
    #[serde(rename = "PosicionY")]
    pub posicion_y: i32,
    #[serde(rename = "FechaCreado")]
    pub fecha_creado: NaiveDate,
}

impl NewLocation {
    /// Field-level checks, run before any SQL does.
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut field_errors = HashMap::new();
        if self.nombre.trim().is_empty() {
            field_errors.insert("Nombre".to_string(), "El nombre es obligatorio".to_string());
        }
        if self.tipo.trim().is_empty() {
            field_errors.insert("Tipo".to_string(), "El tipo es obligatorio".to_string());
        }
        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation("Datos de ubicación inválidos", field_errors))
        }
    }
}

impl Location {
    pub async fn list(db: &Db) -> Result<Vec<Location>, DbError> {
        let rows = sqlx::query_as::<_, Location>(r#"SELECT * FROM "Location2""#)
            .fetch_all(db.pool())
            .await?;
        Ok(rows)
    }

    pub async fn insert(db: &Db, nueva: &NewLocation) -> Result<(), DbError> {
        sqlx::query(
            r#"INSERT INTO "Location2" ("Nombre", "Tipo", "PosicionX", "PosicionY", "FechaCreado")
               VALUES ($1, $2, $3, $4, $5)"#,
        )
        .bind(&nueva.nombre)
        .bind(&nueva.tipo)
        .bind(nueva.posicion_x)
        .bind(nueva.posicion_y)
        .bind(nueva.fecha_creado)
        .execute(db.pool())
        .await?;
        Ok(())
    }
}
