use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::{Db, DbError};
use crate::error::ApiError;

/// Row of the Inventario2 table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Inventario {
    #[serde(rename = "Inventario_ID")]
    #[sqlx(rename = "Inventario_ID")]
    pub inventario_id: i32,
    #[serde(rename = "Articulo_ID")]
    #[sqlx(rename = "Articulo_ID")]
    pub articulo_id: i32,
    #[serde(rename = "Location_ID")]
    #[sqlx(rename = "Location_ID")]
    pub location_id: i32,
    #[serde(rename = "StockActual")]
    #[sqlx(rename = "StockActual")]
    pub stock_actual: i32,
    #[serde(rename = "Importacion")]
    #[sqlx(rename = "Importacion")]
    pub importacion: i32,
    #[serde(rename = "Exportacion")]
    #[sqlx(rename = "Exportacion")]
    pub exportacion: i32,
    #[serde(rename = "StockMinimo")]
    #[sqlx(rename = "StockMinimo")]
    pub stock_minimo: i32,
    #[serde(rename = "StockRecomendado")]
    #[sqlx(rename = "StockRecomendado")]
    pub stock_recomendado: i32,
    #[serde(rename = "FechaUltimaImportacion")]
    #[sqlx(rename = "FechaUltimaImportacion")]
    pub fecha_ultima_importacion: Option<NaiveDate>,
    #[serde(rename = "FechaUltimaExportacion")]
    #[sqlx(rename = "FechaUltimaExportacion")]
    pub fecha_ultima_exportacion: Option<NaiveDate>,
    #[serde(rename = "MargenGanancia")]
    #[sqlx(rename = "MargenGanancia")]
    pub margen_ganancia: Decimal,
    #[serde(rename = "TiempoReposicion")]
    #[sqlx(rename = "TiempoReposicion")]
    pub tiempo_reposicion: i32,
    #[serde(rename = "StockSeguridad")]
    #[sqlx(rename = "StockSeguridad")]
    pub stock_seguridad: i32,
    #[serde(rename = "DemandaPromedio")]
    #[sqlx(rename = "DemandaPromedio")]
    pub demanda_promedio: Decimal,
}

/// Request payload for creating or updating an inventory record. Wire names
/// follow the frontend's abbreviated forms (StockRecomend, FechaUltimaImp, ...).
#[derive(Debug, Deserialize)]
pub struct InventarioPayload {
    #[serde(rename = "Articulo_ID")]
    pub articulo_id: i32,
    #[serde(rename = "Location_ID")]
    pub location_id: i32,
    #[serde(rename = "StockActual")]
    pub stock_actual: i32,
    #[serde(rename = "Importacion")]
    pub importacion: i32,
    #[serde(rename = "Exportacion")]
    pub exportacion: i32,
    #[serde(rename = "StockMinimo")]
    pub stock_minimo: i32,
    #[serde(rename = "StockRecomend")]
    pub stock_recomendado: i32,
    #[serde(rename = "FechaUltimaImp")]
    pub fecha_ultima_importacion: Option<NaiveDate>,
    #[serde(rename = "FechaUltimaExp")]
    pub fecha_ultima_exportacion: Option<NaiveDate>,
    #[serde(rename = "MargenGanancia")]
    pub margen_ganancia: Decimal,
    #[serde(rename = "TiempoReposi")]
    pub tiempo_reposicion: i32,
    #[serde(rename = "StockSeguridad")]
    pub stock_seguridad: i32,
    #[serde(rename = "DemandaProm")]
    pub demanda_promedio: Decimal,
}

impl InventarioPayload {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut field_errors = HashMap::new();
        for (campo, valor) in [
            ("StockActual", self.stock_actual),
            ("StockMinimo", self.stock_minimo),
            ("StockRecomend", self.stock_recomendado),
            ("StockSeguridad", self.stock_seguridad),
        ] {
            if valor < 0 {
                field_errors.insert(campo.to_string(), "El stock no puede ser negativo".to_string());
            }
        }
        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation("Datos de inventario inválidos", field_errors))
        }
    }
}

impl Inventario {
    pub async fn list(db: &Db) -> Result<Vec<Inventario>, DbError> {
        let rows = sqlx::query_as::<_, Inventario>(r#"SELECT * FROM "Inventario2""#)
            .fetch_all(db.pool())
            .await?;
        Ok(rows)
    }

    pub async fn insert(db: &Db, datos: &InventarioPayload) -> Result<(), DbError> {
        sqlx::query(
            r#"INSERT INTO "Inventario2" (
                 "Articulo_ID", "Location_ID", "StockActual", "Importacion", "Exportacion",
                 "StockMinimo", "StockRecomendado", "FechaUltimaImportacion", "FechaUltimaExportacion",
                 "MargenGanancia", "TiempoReposicion", "StockSeguridad", "DemandaPromedio"
               ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)"#,
        )
        .bind(datos.articulo_id)
        .bind(datos.location_id)
        .bind(datos.stock_actual)
        .bind(datos.importacion)
        .bind(datos.exportacion)
        .bind(datos.stock_minimo)
        .bind(datos.stock_recomendado)
        .bind(datos.fecha_ultima_importacion)
        .bind(datos.fecha_ultima_exportacion)
        .bind(datos.margen_ganancia)
        .bind(datos.tiempo_reposicion)
        .bind(datos.stock_seguridad)
        .bind(datos.demanda_promedio)
        .execute(db.pool())
        .await?;
        Ok(())
    }

    pub async fn update(db: &Db, id: i32, datos: &InventarioPayload) -> Result<(), DbError> {
        sqlx::query(
            r#"UPDATE "Inventario2" SET
                 "Articulo_ID" = $1, "Location_ID" = $2, "StockActual" = $3, "Importacion" = $4,
                 "Exportacion" = $5, "StockMinimo" = $6, "StockRecomendado" = $7,
                 "FechaUltimaImportacion" = $8, "FechaUltimaExportacion" = $9,
                 "MargenGanancia" = $10, "TiempoReposicion" = $11, "StockSeguridad" = $12,
                 "DemandaPromedio" = $13
               WHERE "Inventario_ID" = $14"#,
        )
        .bind(datos.articulo_id)
        .bind(datos.location_id)
        .bind(datos.stock_actual)
        .bind(datos.importacion)
        .bind(datos.exportacion)
        .bind(datos.stock_minimo)
        .bind(datos.stock_recomendado)
        .bind(datos.fecha_ultima_importacion)
        .bind(datos.fecha_ultima_exportacion)
        .bind(datos.margen_ganancia)
        .bind(datos.tiempo_reposicion)
        .bind(datos.stock_seguridad)
        .bind(datos.demanda_promedio)
        .bind(id)
        .execute(db.pool())
        .await?;
        Ok(())
    }

    pub async fn delete(db: &Db, id: i32) -> Result<(), DbError> {
        sqlx::query(r#"DELETE FROM "Inventario2" WHERE "Inventario_ID" = $1"#)
            .bind(id)
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
    fn payload_uses_abbreviated_wire_names() {
        let payload: InventarioPayload = serde_json::from_value(json!({
            "Articulo_ID": 1,
            "Location_ID": 2,
            "StockActual": 40,
            "Importacion": 10,
            "Exportacion": 5,
            "StockMinimo": 8,
            "StockRecomend": 30,
            "FechaUltimaImp": "2024-03-01",
            "FechaUltimaExp": null,
            "MargenGanancia": 0.35,
            "TiempoReposi": 14,
            "StockSeguridad": 6,
            "DemandaProm": 3.5
        }))
        .unwrap();

        assert_eq!(payload.stock_recomendado, 30);
        assert_eq!(
            payload.fecha_ultima_importacion,
            Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        );
        assert_eq!(payload.fecha_ultima_exportacion, None);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn negative_stock_fails_validation() {
        let payload: InventarioPayload = serde_json::from_value(json!({
            "Articulo_ID": 1,
            "Location_ID": 2,
            "StockActual": -1,
            "Importacion": 0,
            "Exportacion": 0,
            "StockMinimo": 0,
            "StockRecomend": 0,
            "FechaUltimaImp": null,
            "FechaUltimaExp": null,
            "MargenGanancia": 0,
            "TiempoReposi": 0,
            "StockSeguridad": 0,
            "DemandaProm": 0
        }))
        .unwrap();

        let err = payload.validate().unwrap_err();
        assert_eq!(
            err.to_json()["field_errors"]["StockActual"],
            "El stock no puede ser negativo"
        );
    }
}
