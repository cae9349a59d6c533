use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::{Db, DbError};
use crate::error::ApiError;

/// Row of the Articulo2 table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Articulo {
    #[serde(rename = "Nombre")]
    #[sqlx(rename = "Nombre")]
    pub nombre: String,
    #[serde(rename = "Categoria")]
    #[sqlx(rename = "Categoria")]
    pub categoria: String,
    #[serde(rename = "PrecioProveedor")]
    #[sqlx(rename = "PrecioProveedor")]
    pub precio_proveedor: Decimal,
    #[serde(rename = "PrecioVenta")]
    #[sqlx(rename = "PrecioVenta")]
    pub precio_venta: Decimal,
    #[serde(rename = "Temporada")]
    #[sqlx(rename = "Temporada")]
    pub temporada: String,
}

/// Request payload for creating an article.
#[derive(Debug, Deserialize)]
pub struct NewArticulo {
    #[serde(rename = "Nombre")]
    pub nombre: String,
    #[serde(rename = "Categoria")]
    pub categoria: String,
    #[serde(rename = "PrecioProveedor")]
    pub precio_proveedor: Decimal,
    #[serde(rename = "PrecioVenta")]
    pub precio_venta: Decimal,
    #[serde(rename = "Temporada")]
    pub temporada: String,
}

impl NewArticulo {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut field_errors = HashMap::new();
        if self.nombre.trim().is_empty() {
            field_errors.insert("Nombre".to_string(), "El nombre es obligatorio".to_string());
        }
        if self.categoria.trim().is_empty() {
            field_errors.insert("Categoria".to_string(), "La categoría es obligatoria".to_string());
        }
        if self.precio_proveedor < Decimal::ZERO {
            field_errors.insert(
                "PrecioProveedor".to_string(),
                "El precio no puede ser negativo".to_string(),
            );
        }
        if self.precio_venta < Decimal::ZERO {
            field_errors.insert(
                "PrecioVenta".to_string(),
                "El precio no puede ser negativo".to_string(),
            );
        }
        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation("Datos de artículo inválidos", field_errors))
        }
    }
}

impl Articulo {
    pub async fn list(db: &Db) -> Result<Vec<Articulo>, DbError> {
        let rows = sqlx::query_as::<_, Articulo>(r#"SELECT * FROM "Articulo2""#)
            .fetch_all(db.pool())
            .await?;
        Ok(rows)
    }

    pub async fn insert(db: &Db, nuevo: &NewArticulo) -> Result<(), DbError> {
        sqlx::query(
            r#"INSERT INTO "Articulo2" ("Nombre", "Categoria", "PrecioProveedor", "PrecioVenta", "Temporada")
               VALUES ($1, $2, $3, $4, $5)"#,
        )
        .bind(&nuevo.nombre)
        .bind(&nuevo.categoria)
        .bind(nuevo.precio_proveedor)
        .bind(nuevo.precio_venta)
        .bind(&nuevo.temporada)
        .execute(db.pool())
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_accepts_numeric_prices() {
        let payload: NewArticulo = serde_json::from_value(json!({
            "Nombre": "Bota industrial",
            "Categoria": "Calzado",
            "PrecioProveedor": 350.50,
            "PrecioVenta": 599.99,
            "Temporada": "Invierno"
        }))
        .unwrap();

        assert_eq!(payload.precio_venta, "599.99".parse::<Decimal>().unwrap());
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn negative_price_fails_validation() {
        let payload = NewArticulo {
            nombre: "Bota".to_string(),
            categoria: "Calzado".to_string(),
            precio_proveedor: "-1".parse().unwrap(),
            precio_venta: Decimal::ZERO,
            temporada: "Verano".to_string(),
        };
        let err = payload.validate().unwrap_err();
        assert_eq!(
            err.to_json()["field_errors"]["PrecioProveedor"],
            "El precio no puede ser negativo"
        );
    }
}
