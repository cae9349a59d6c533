use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::{Db, DbError};
use crate::error::ApiError;

/// Row of the Usuario2 table. The password digest stays server-side: the
/// column is read for login checks but never serialized into a response.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Usuario {
    #[serde(rename = "Usuario_ID")]
    #[sqlx(rename = "Usuario_ID")]
    pub usuario_id: i32,
    #[serde(rename = "Nombre")]
    #[sqlx(rename = "Nombre")]
    pub nombre: String,
    #[serde(rename = "Rol_ID")]
    #[sqlx(rename = "Rol_ID")]
    pub rol_id: i32,
    #[serde(skip_serializing)]
    #[sqlx(rename = "Clave")]
    pub clave: String,
    #[serde(rename = "Location_ID")]
    #[sqlx(rename = "Location_ID")]
    pub location_id: Option<i32>,
    #[serde(rename = "FechaEmpiezo")]
    #[sqlx(rename = "FechaEmpiezo")]
    pub fecha_empiezo: NaiveDate,
    #[serde(rename = "RFC")]
    #[sqlx(rename = "RFC")]
    pub rfc: String,
    #[serde(rename = "Correo")]
    #[sqlx(rename = "Correo")]
    pub correo: String,
    #[serde(rename = "Username")]
    #[sqlx(rename = "Username")]
    pub username: String,
}

/// Request payload for creating a user. Clave arrives in the clear and is
/// digested before it reaches the insert.
#[derive(Debug, Deserialize)]
pub struct NewUsuario {
    #[serde(rename = "Nombre")]
    pub nombre: String,
    #[serde(rename = "Rol_ID")]
    pub rol_id: i32,
    #[serde(rename = "Clave")]
    pub clave: String,
    #[serde(rename = "Location_ID")]
    pub location_id: Option<i32>,
    #[serde(rename = "FechaEmpiezo")]
    pub fecha_empiezo: NaiveDate,
    #[serde(rename = "RFC")]
    pub rfc: String,
    #[serde(rename = "Correo")]
    pub correo: String,
    #[serde(rename = "Username")]
    pub username: String,
}

/// Request payload for updating a user; the password is not touched here.
#[derive(Debug, Deserialize)]
pub struct UpdateUsuario {
    #[serde(rename = "Usuario_ID")]
    pub usuario_id: i32,
    #[serde(rename = "Nombre")]
    pub nombre: String,
    #[serde(rename = "Rol_ID")]
    pub rol_id: i32,
    #[serde(rename = "Location_ID")]
    pub location_id: Option<i32>,
    #[serde(rename = "FechaEmpiezo")]
    pub fecha_empiezo: NaiveDate,
    #[serde(rename = "RFC")]
    pub rfc: String,
    #[serde(rename = "Correo")]
    pub correo: String,
    #[serde(rename = "Username")]
    pub username: String,
}

/// DELETE /usuario2 body
#[derive(Debug, Deserialize)]
pub struct DeleteUsuario {
    #[serde(rename = "Usuario_ID")]
    pub usuario_id: i32,
}

impl NewUsuario {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut field_errors = HashMap::new();
        if self.nombre.trim().is_empty() {
            field_errors.insert("Nombre".to_string(), "El nombre es obligatorio".to_string());
        }
        if self.clave.trim().is_empty() {
            field_errors.insert("Clave".to_string(), "La contraseña es obligatoria".to_string());
        }
        if self.username.trim().is_empty() {
            field_errors.insert("Username".to_string(), "El username es obligatorio".to_string());
        }
        if !self.correo.contains('@') {
            field_errors.insert("Correo".to_string(), "Correo inválido".to_string());
        }
        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation("Datos de usuario inválidos", field_errors))
        }
    }
}

impl Usuario {
    pub async fn list(db: &Db) -> Result<Vec<Usuario>, DbError> {
        let rows = sqlx::query_as::<_, Usuario>(r#"SELECT * FROM "Usuario2""#)
            .fetch_all(db.pool())
            .await?;
        Ok(rows)
    }

    /// Login lookup by email or username.
    pub async fn find_by_login(db: &Db, identificador: &str) -> Result<Option<Usuario>, DbError> {
        let row = sqlx::query_as::<_, Usuario>(
            r#"SELECT * FROM "Usuario2" WHERE "Correo" = $1 OR "Username" = $1"#,
        )
        .bind(identificador)
        .fetch_optional(db.pool())
        .await?;
        Ok(row)
    }

    pub async fn insert(db: &Db, nuevo: &NewUsuario, clave_digest: &str) -> Result<(), DbError> {
        sqlx::query(
            r#"INSERT INTO "Usuario2"
                 ("Nombre", "Rol_ID", "Clave", "Location_ID", "FechaEmpiezo", "RFC", "Correo", "Username")
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"#,
        )
        .bind(&nuevo.nombre)
        .bind(nuevo.rol_id)
        .bind(clave_digest)
        .bind(nuevo.location_id)
        .bind(nuevo.fecha_empiezo)
        .bind(&nuevo.rfc)
        .bind(&nuevo.correo)
        .bind(&nuevo.username)
        .execute(db.pool())
        .await?;
        Ok(())
    }

    pub async fn update(db: &Db, datos: &UpdateUsuario) -> Result<(), DbError> {
        sqlx::query(
            r#"UPDATE "Usuario2" SET
                 "Nombre" = $1, "Rol_ID" = $2, "Location_ID" = $3, "FechaEmpiezo" = $4,
                 "RFC" = $5, "Correo" = $6, "Username" = $7
               WHERE "Usuario_ID" = $8"#,
        )
        .bind(&datos.nombre)
        .bind(datos.rol_id)
        .bind(datos.location_id)
        .bind(datos.fecha_empiezo)
        .bind(&datos.rfc)
        .bind(&datos.correo)
        .bind(&datos.username)
        .bind(datos.usuario_id)
        .execute(db.pool())
        .await?;
        Ok(())
    }

    pub async fn delete(db: &Db, usuario_id: i32) -> Result<(), DbError> {
        sqlx::query(r#"DELETE FROM "Usuario2" WHERE "Usuario_ID" = $1"#)
            .bind(usuario_id)
            .execute(db.pool())
            .await?;
        Ok(())
    }
}
