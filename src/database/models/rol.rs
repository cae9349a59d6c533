use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::{Db, DbError};
use crate::error::ApiError;

/// Row of the Rol2 table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Rol {
    #[serde(rename = "Nombre")]
    #[sqlx(rename = "Nombre")]
    pub nombre: String,
}

/// Request payload for creating a role.
#[derive(Debug, Deserialize)]
pub struct NewRol {
    #[serde(rename = "Nombre")]
    pub nombre: String,
}

impl NewRol {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.nombre.trim().is_empty() {
            let mut field_errors = HashMap::new();
            field_errors.insert("Nombre".to_string(), "El nombre es obligatorio".to_string());
            return Err(ApiError::validation("Datos de rol inválidos", field_errors));
        }
        Ok(())
    }
}

impl Rol {
    pub async fn list(db: &Db) -> Result<Vec<Rol>, DbError> {
        let rows = sqlx::query_as::<_, Rol>(r#"SELECT * FROM "Rol2""#)
            .fetch_all(db.pool())
            .await?;
        Ok(rows)
    }

    pub async fn insert(db: &Db, nuevo: &NewRol) -> Result<(), DbError> {
        sqlx::query(r#"INSERT INTO "Rol2" ("Nombre") VALUES ($1)"#)
            .bind(&nuevo.nombre)
            .execute(db.pool())
            .await?;
        Ok(())
    }
}
