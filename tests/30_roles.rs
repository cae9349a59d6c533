mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn create_rol_returns_confirmation() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/rol2", server.base_url))
        .json(&json!({ "Nombre": "Administrador" }))
        .send()
        .await?;

    let status = res.status();
    let body = res.json::<serde_json::Value>().await?;

    match status {
        StatusCode::CREATED => assert_eq!(body, json!({ "message": "Rol creado" })),
        StatusCode::INTERNAL_SERVER_ERROR => {
            assert!(body.get("error").is_some(), "500 without error field: {}", body);
        }
        other => panic!("expected 201 or 500, got {}: {}", other, body),
    }

    Ok(())
}

#[tokio::test]
async fn list_roles_returns_rows_or_db_error() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/rol2", server.base_url)).send().await?;
    let status = res.status();
    let body = res.json::<serde_json::Value>().await?;

    match status {
        StatusCode::OK => assert!(body.is_array(), "expected a JSON array: {}", body),
        StatusCode::INTERNAL_SERVER_ERROR => {
            assert!(body.get("error").is_some(), "500 without error field: {}", body)
        }
        other => panic!("expected 200 or 500, got {}: {}", other, body),
    }

    Ok(())
}

#[tokio::test]
async fn create_rol_rejects_empty_nombre() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/rol2", server.base_url))
        .json(&json!({ "Nombre": "   " }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["field_errors"]["Nombre"], "El nombre es obligatorio");

    Ok(())
}
